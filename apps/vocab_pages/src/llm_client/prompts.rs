// Prompt constants for the explanation call.

/// System prompt: the model plays an English teacher answering in Japanese.
pub const EXPLANATION_SYSTEM: &str = "あなたは英語を教える優秀な教師です。";

/// Explanation prompt template. Replace `{word}` before sending.
///
/// Every section must start with its literal `<label>:` marker; the section
/// parser depends on it.
pub const EXPLANATION_PROMPT_TEMPLATE: &str = "以下の形式で「{word}」を解説してください。
各項目は必ず「項目名:」で始めてください：

品詞: 単語の品詞を記述
意味: 簡潔な日本語の意味
語源: 語源の説明（50文字以内）
例文: 英文と日本語訳のペア
関連語: 関連する単語や表現の説明（100文字以内）";
