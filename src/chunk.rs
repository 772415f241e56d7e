//! Greedy paragraph-merging chunker.
//!
//! Splits article text into natural paragraphs on blank lines, then merges
//! adjacent paragraphs left-to-right into chunks whose whitespace-token
//! count targets the [`MIN_CHUNK_WORDS`]..=[`MAX_CHUNK_WORDS`] window.
//!
//! # Algorithm
//!
//! 1. Split the input on blank lines into natural paragraphs; trim each and
//!    drop the empty ones.
//! 2. Seed an accumulator with the first paragraph.
//! 3. For each following paragraph: if the combined token count stays at or
//!    below [`MAX_CHUNK_WORDS`], merge it into the accumulator (joined by a
//!    blank line). Otherwise flush the accumulator as a chunk and reseed,
//!    unless the accumulator is still under [`MIN_CHUNK_WORDS`], in which
//!    case the paragraph is merged anyway and the chunk overshoots the cap.
//! 4. Flush whatever remains.
//!
//! A single paragraph longer than [`MAX_CHUNK_WORDS`] is never split
//! internally; it becomes its own oversized chunk. At least one chunk is
//! always returned: when no natural paragraphs survive (empty or
//! whitespace-only input), the untouched input string is returned as the
//! sole chunk.
//!
//! Token counting splits on whitespace runs, so punctuation-attached tokens
//! and hyphenated compounds each count once, and CJK text with no
//! inter-word spaces is undercounted. The thresholds were calibrated
//! against this counting; see [`crate::stats`] for the user-facing
//! counters, which count differently.
//!
//! # Example
//!
//! ```rust
//! use readprep::chunk::chunk_article;
//!
//! let chunks = chunk_article("Hello world.\n\nSecond paragraph.");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0], "Hello world.\n\nSecond paragraph.");
//! ```

use crate::models::Chunk;

/// Minimum token count for a chunk to stand alone.
///
/// An accumulator below this is never flushed early; the next paragraph is
/// merged in even when the result exceeds [`MAX_CHUNK_WORDS`].
pub const MIN_CHUNK_WORDS: usize = 50;

/// Target upper bound on tokens per chunk.
///
/// A soft cap: the undersized-accumulator rule above and oversized single
/// paragraphs can both exceed it.
pub const MAX_CHUNK_WORDS: usize = 150;

/// Separator between merged paragraphs within a chunk.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Count whitespace-delimited tokens.
///
/// This is the chunker's internal notion of "word count": substrings
/// separated by runs of whitespace. It is not dictionary word
/// segmentation and is distinct from the display counters in
/// [`crate::stats`].
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split article text into natural paragraphs.
///
/// A natural paragraph is a maximal run of non-blank lines. Each returned
/// paragraph is trimmed; paragraphs that trim to nothing are dropped, so
/// whitespace-only input yields an empty vector. Line iteration strips a
/// trailing `\r`, so CRLF input splits the same as LF input. Lines
/// containing only spaces do not separate paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            paragraphs.push(trimmed.to_string());
        }
        current.clear();
    };

    for line in text.lines() {
        if line.is_empty() {
            flush(&mut current);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current);

    paragraphs
}

/// Regroup article text into learning-sized chunks.
///
/// Returns the chunks in source order, joined internally by blank lines.
///
/// # Guarantees
///
/// - At least one chunk is always returned. When no natural paragraphs
///   survive trimming (empty or whitespace-only input), the single chunk is
///   the original input, untrimmed.
/// - Concatenating the chunks with a blank-line separator reproduces the
///   trimmed, paragraph-normalized input; no text is lost or duplicated.
/// - Every chunk except possibly the last has at least
///   [`MIN_CHUNK_WORDS`] tokens, unless it is a single paragraph that
///   alone exceeds [`MAX_CHUNK_WORDS`].
/// - Two adjacent paragraphs whose merge stays within
///   [`MAX_CHUNK_WORDS`] always land in the same chunk.
///
/// The function is total over all string inputs and never panics.
pub fn chunk_article(text: &str) -> Vec<String> {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_tokens = 0usize;

    for para in paragraphs {
        let para_tokens = token_count(&para);

        if current.is_empty() {
            current = para;
            current_tokens = para_tokens;
            continue;
        }

        // Paragraphs are trimmed and non-empty, so the token count of the
        // joined text is the sum of the two counts.
        let combined_tokens = current_tokens + para_tokens;

        if combined_tokens <= MAX_CHUNK_WORDS {
            current.push_str(PARAGRAPH_SEPARATOR);
            current.push_str(&para);
            current_tokens = combined_tokens;
        } else if current_tokens >= MIN_CHUNK_WORDS {
            chunks.push(std::mem::replace(&mut current, para));
            current_tokens = para_tokens;
        } else {
            // Too small to stand alone: merge anyway and overshoot the cap
            // rather than emit an undersized chunk.
            current.push_str(PARAGRAPH_SEPARATOR);
            current.push_str(&para);
            current_tokens = combined_tokens;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Produce indexed [`Chunk`] records for downstream consumers.
///
/// Indices are 1-based and contiguous, matching the paragraph numbering
/// the content-generation pipeline keys on.
pub fn make_chunks(text: &str) -> Vec<Chunk> {
    chunk_article(text)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let word_count = token_count(&text);
            Chunk {
                index: i + 1,
                text,
                word_count,
            }
        })
        .collect()
}
