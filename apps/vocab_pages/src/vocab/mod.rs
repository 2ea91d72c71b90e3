// Vocabulary page batch: word source → explanation → section parse → page write.
// All remote calls go through the DocumentStore / CompletionModel traits.

pub mod explainer;
pub mod page_writer;
pub mod pipeline;
pub mod sections;
pub mod word_source;

#[cfg(test)]
pub mod testing;
