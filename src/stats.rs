//! Display counters and the stats command.
//!
//! The counters the UI shows a learner are deliberately different from the
//! chunker's internal token heuristic: English words are counted as maximal
//! letter runs, and CJK text (which has no inter-word spaces) is counted as
//! one word per ideograph. Character counts are Unicode scalar values.
//! Used by `readprep stats` to give a quick picture of an article before
//! chunking it.

use crate::chunk::{self, token_count};

/// Count display words: one per maximal letter run, one per CJK ideograph.
///
/// "don't" counts as two words (two letter runs), "你好" as two. This
/// matches the counter shown in the reading UI and intentionally disagrees
/// with [`token_count`], which drives the chunking thresholds.
pub fn display_word_count(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;
    for c in text.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if c.is_alphabetic() {
            if !in_word {
                words += 1;
                in_word = true;
            }
        } else {
            in_word = false;
        }
    }
    words
}

/// Count Unicode scalar values.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Han ideograph ranges: Unified Ideographs, Extension A, Compatibility.
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}')
}

/// Run the stats command: chunk the article and print a summary.
pub fn run_stats(text: &str) {
    let paragraphs = chunk::split_paragraphs(text);
    let chunks = chunk::make_chunks(text);

    println!("readprep — Article Stats");
    println!("========================");
    println!();
    println!("  Characters:  {}", char_count(text));
    println!("  Words:       {}", display_word_count(text));
    println!("  Tokens:      {}", token_count(text));
    println!("  Paragraphs:  {}", paragraphs.len());
    println!("  Chunks:      {}", chunks.len());

    if !chunks.is_empty() {
        let counts: Vec<usize> = chunks.iter().map(|c| c.word_count).collect();
        let min = counts.iter().min().copied().unwrap_or(0);
        let max = counts.iter().max().copied().unwrap_or(0);
        let mean = counts.iter().sum::<usize>() / counts.len();

        println!();
        println!("  Chunk tokens: min {} / mean {} / max {}", min, mean, max);
        println!();
        println!("  {:<6} {:>7}   {}", "CHUNK", "TOKENS", "PREVIEW");
        println!("  {}", "-".repeat(64));
        for c in &chunks {
            println!("  {:<6} {:>7}   {}", c.index, c.word_count, preview(&c.text, 48));
        }
    }

    println!();
}

/// First line of a chunk, truncated to `max_chars` on a char boundary.
fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= max_chars {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(max_chars).collect();
        format!("{}…", truncated)
    }
}
