//! # readprep
//!
//! Text preparation for reading-practice tools.
//!
//! An article pasted by a learner (or scraped from a URL upstream) rarely
//! arrives in pieces of a useful size: some paragraphs are one sentence,
//! some are half the article. `readprep` regroups the article's natural
//! paragraphs into chunks of roughly 50–150 whitespace tokens, the size a
//! learner can read, translate, and answer questions about in one sitting.
//! Downstream content generation (translation, simplified restatement,
//! comprehension questions) is keyed by chunk position and is out of scope
//! here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`chunk`] | Greedy paragraph-merging chunker |
//! | [`models`] | Chunk records and the JSON report shape |
//! | [`stats`] | Display word/character counters and the stats command |
//!
//! ## Example
//!
//! ```rust
//! use readprep::chunk::chunk_article;
//!
//! let chunks = chunk_article("First paragraph.\n\nSecond paragraph.");
//! assert_eq!(chunks.len(), 1);
//! ```

pub mod chunk;
pub mod models;
pub mod stats;
