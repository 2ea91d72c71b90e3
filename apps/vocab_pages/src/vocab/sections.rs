//! Section Parser — splits the model's free-text answer into the five named
//! sections of an explanation page.
//!
//! The format is trusted, not validated. Rules:
//! - lines are trimmed; blank lines and `#` lines are skipped
//! - a line starting with `<label>:` switches the current section and resets
//!   its buffer to the line with every `<label>:` removed
//! - any other line is appended to the current section, joined by one space
//! - text before the first label is dropped
//! - a repeated label discards what that section had collected so far

/// Part of speech used when the answer never names one.
pub const DEFAULT_PART_OF_SPEECH: &str = "形容詞";

/// The closed set of sections a page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PartOfSpeech,
    Meaning,
    Etymology,
    Example,
    RelatedWords,
}

impl Section {
    /// Matching order when scanning a line.
    pub const ALL: [Section; 5] = [
        Section::PartOfSpeech,
        Section::Meaning,
        Section::Etymology,
        Section::Example,
        Section::RelatedWords,
    ];

    /// The Japanese label the model is told to prefix the section with.
    /// Also used as the page subheading.
    pub fn label(&self) -> &'static str {
        match self {
            Section::PartOfSpeech => "品詞",
            Section::Meaning => "意味",
            Section::Etymology => "語源",
            Section::Example => "例文",
            Section::RelatedWords => "関連語",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// If `line` opens this section, returns the line with the marker removed.
    fn strip_marker(&self, line: &str) -> Option<String> {
        let marker = format!("{}:", self.label());
        line.starts_with(&marker)
            .then(|| line.replace(&marker, "").trim().to_string())
    }
}

/// Parsed explanation. Every section is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationSections {
    values: [String; 5],
}

impl Default for ExplanationSections {
    fn default() -> Self {
        let mut values: [String; 5] = Default::default();
        values[Section::PartOfSpeech.index()] = DEFAULT_PART_OF_SPEECH.to_string();
        Self { values }
    }
}

impl ExplanationSections {
    pub fn get(&self, section: Section) -> &str {
        &self.values[section.index()]
    }

    pub fn set(&mut self, section: Section, value: impl Into<String>) {
        self.values[section.index()] = value.into();
    }

    /// `(section, value)` pairs in page order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

pub fn parse_sections(explanation: &str) -> ExplanationSections {
    let mut sections = ExplanationSections::default();
    let mut current: Option<Section> = None;
    let mut buffer: Vec<String> = Vec::new();

    for raw in explanation.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let opened = Section::ALL
            .iter()
            .find_map(|s| s.strip_marker(line).map(|rest| (*s, rest)));

        match opened {
            Some((section, rest)) => {
                current = Some(section);
                buffer.clear();
                if !rest.is_empty() {
                    buffer.push(rest);
                }
            }
            None if current.is_some() => buffer.push(line.to_string()),
            None => {}
        }

        if let Some(section) = current {
            sections.set(section, buffer.join(" "));
        }
    }

    sections
}
