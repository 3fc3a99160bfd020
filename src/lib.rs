//! Style Linter
//!
//! A deterministic style-compliance linting engine for text content.
//!
//! This library provides:
//! - Flesch-Kincaid readability analysis with heuristic syllable counting
//! - Banned/required term checking against a style pack
//! - Structured lint reports with a calibrated compliance score
//! - Style pack loading and configuration management
//!
//! The engine is pure and stateless: given the same `(text, pack)` pair it
//! always produces the same report, and it never fails. Malformed policy
//! inputs degrade to permissive defaults instead of rejecting content.

pub mod config;
pub mod pack;
pub mod policy;
pub mod readability;
pub mod report;

// Re-exports for clean public API
pub use config::Config;
pub use pack::{ReadingBand, StylePack};
pub use readability::{count_syllables, grade_level};
pub use report::{format_report, lint, score, LintReport, Violation, ViolationKind};
