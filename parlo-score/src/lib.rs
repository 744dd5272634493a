//! Similarity scoring between a reference sentence and a transcript.
//!
//! The score is the classic matching-blocks ratio: both strings are
//! normalized, the total length `M` of non-overlapping matching blocks is
//! found by recursive longest-common-substring decomposition, and the ratio
//! is `2 * M / T` with `T` the combined length. The user-facing score is
//! that ratio rounded to an integer percentage.
//!
//! Fully deterministic; no external state.

use serde::{Deserialize, Serialize};

/// How strings are normalized before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Lowercase both strings.
    Casefold,
    /// Lowercase, then keep only ASCII letters, digits, and spaces.
    ///
    /// Note this also drops accented letters (ü, é, ...), so German and
    /// French text is compared in an ASCII-reduced form.
    CasefoldStripSymbols,
}

/// Apply a normalization mode to one string.
pub fn normalize(s: &str, mode: Normalization) -> String {
    let lowered = s.to_lowercase();
    match mode {
        Normalization::Casefold => lowered,
        Normalization::CasefoldStripSymbols => lowered
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect(),
    }
}

/// Similarity ratio in `[0.0, 1.0]` between two already-normalized strings.
///
/// `2 * M / T` per the matching-blocks definition; two empty strings are a
/// perfect match.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_total(&a_chars, &b_chars);
    2.0 * matched as f64 / total as f64
}

/// Integer percentage score after normalization.
pub fn score(reference: &str, response: &str, mode: Normalization) -> u8 {
    let a = normalize(reference, mode);
    let b = normalize(response, mode);
    (ratio(&a, &b) * 100.0).round() as u8
}

/// Total length of non-overlapping matching blocks.
///
/// Finds the longest matching block (earliest in `a`, then earliest in `b`
/// on ties), then recurses into the pieces before and after it.
fn matching_total(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (ai, bi, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }

    size + matching_total(&a[..ai], &b[..bi])
        + matching_total(&a[ai + size..], &b[bi + size..])
}

/// Longest common contiguous block of `a` and `b` as `(a_start, b_start, len)`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    // prev[j + 1] = length of the common suffix ending at a[i - 1], b[j].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            curr[j + 1] = if a[i] == b[j] { prev[j] + 1 } else { 0 };

            // Strict comparison in ascending order keeps the earliest block
            // in `a`, then the earliest in `b`, on ties.
            let size = curr[j + 1];
            if size > best.2 {
                best = (i + 1 - size, j + 1 - size, size);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
