//! Style Pack Schema Types
//!
//! The policy data model: a style pack declares banned terms, required
//! terms, and a target reading-level band.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static BAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[^\d]+(\d+)").expect("band pattern compiles"));

/// A content policy: what must and must not appear in the text, and the
/// reading-level window the text should land in (matches the JSON pack format)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StylePack {
    /// Descriptive voice guidance, not algorithmically checked
    #[serde(default)]
    pub brand_voice: Option<String>,
    /// Band specification, e.g. "Grade 8-10"
    #[serde(default = "default_reading_level")]
    pub reading_level: String,
    /// Terms that must appear in the text (case-insensitive)
    #[serde(default)]
    pub must_use: Vec<String>,
    /// Terms that must not appear in the text (case-insensitive)
    #[serde(default)]
    pub must_avoid: Vec<String>,
}

fn default_reading_level() -> String {
    "Grade 8-10".to_string()
}

impl Default for StylePack {
    fn default() -> Self {
        Self {
            brand_voice: None,
            reading_level: default_reading_level(),
            must_use: Vec::new(),
            must_avoid: Vec::new(),
        }
    }
}

impl StylePack {
    /// Parse the pack's reading-level band
    pub fn reading_band(&self) -> ReadingBand {
        ReadingBand::parse(&self.reading_level)
    }
}

/// Inclusive grade-level window parsed from a band string like "Grade 8-10"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingBand {
    pub min: u32,
    pub max: u32,
}

impl ReadingBand {
    /// Extract the first two integers from a band string.
    ///
    /// An unparsable band falls back to `(0, 20)`: a broken policy should
    /// never block content, so the default passes everything. A band
    /// authored backwards (`min > max`) is not corrected and will reject
    /// every level.
    pub fn parse(spec: &str) -> Self {
        let fallback = Self { min: 0, max: 20 };
        match BAND_RE.captures(spec) {
            Some(caps) => {
                let min = caps[1].parse().ok();
                let max = caps[2].parse().ok();
                match (min, max) {
                    (Some(min), Some(max)) => Self { min, max },
                    _ => fallback,
                }
            }
            None => fallback,
        }
    }

    /// Whether a grade level falls inside the band, inclusive on both ends
    pub fn contains(&self, level: f64) -> bool {
        f64::from(self.min) <= level && level <= f64::from(self.max)
    }
}
