//! Readability Analyzer
//!
//! Flesch-Kincaid grade-level estimation with heuristic syllable counting.
//! The syllable counter is a pure lexical approximation, not a dictionary
//! lookup — it will misestimate on irregular words ("beautiful" counts 4).
//! That is an accepted property of the algorithm, not a bug.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern compiles"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));
static ALPHA_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("alpha pattern compiles"));
static SILENT_ENDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("ending pattern compiles")
});
static VOWEL_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pattern compiles"));

/// Compute the Flesch-Kincaid Grade Level of a text.
///
/// Sentence and word counts are floored at 1, so punctuation-free or empty
/// text still yields a defined (non-negative) result. The raw grade is
/// clamped at 0.0 and rounded half-away-from-zero to one decimal place.
pub fn grade_level(text: &str) -> f64 {
    let sentences = SENTENCE_RE.find_iter(text).count().max(1);
    let words = WORD_RE.find_iter(text).count().max(1);
    let syllables = count_syllables(text);

    let grade = 0.39 * (words as f64 / sentences as f64)
        + 11.8 * (syllables as f64 / words as f64)
        - 15.59;

    round_one_decimal(grade.max(0.0))
}

/// Estimate the syllable count of a text.
///
/// Lowercase alphabetic runs are treated as words; for each word a trailing
/// silent ending is stripped, then a leading "y", then vowel groups of one
/// or two letters are counted. Every word contributes at least one
/// syllable. Non-alphabetic tokens contribute zero. The pipeline order is
/// load-bearing: strip ending, strip leading "y", count groups.
pub fn count_syllables(text: &str) -> usize {
    let lower = text.to_lowercase();
    let mut count = 0;

    for word in ALPHA_RUN_RE.find_iter(&lower) {
        let stripped = SILENT_ENDING_RE.replace(word.as_str(), "");
        let residual = stripped.strip_prefix('y').unwrap_or(&stripped);

        let groups = VOWEL_GROUP_RE.find_iter(residual).count();
        count += groups.max(1);
    }

    count
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
