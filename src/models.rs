//! Core data models.
//!
//! The records produced by chunking, plus the JSON report shape emitted by
//! `readprep split --json` for downstream tooling.

use serde::Serialize;

/// One learning-sized chunk of an article.
///
/// `index` is 1-based and contiguous; downstream content generation
/// (translation, summaries, questions) is keyed by it. `word_count` is the
/// whitespace-token count used by the chunking thresholds, not the
/// display word count.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    pub word_count: usize,
}

/// Report shape for `readprep split --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleReport {
    /// Natural paragraphs found in the input before merging.
    pub paragraph_count: usize,
    pub chunk_count: usize,
    pub chunks: Vec<Chunk>,
}
