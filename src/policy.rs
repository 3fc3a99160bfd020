//! Policy Checker
//!
//! Term-membership checks against a style pack. Matching is
//! case-insensitive and substring-based: a banned "spam" also matches
//! inside "spammer". Word-boundary matching would change observable
//! behavior and is deliberately not applied.

use crate::pack::StylePack;

/// Outcome of the term checks, in pack declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFindings {
    /// Banned terms found in the text
    pub banned: Vec<String>,
    /// Required terms absent from the text
    pub missing_required: Vec<String>,
}

/// Check a text against the pack's banned and required term lists.
///
/// Both result lists preserve the order terms are declared in the pack,
/// not the order of occurrence in the text. Empty term lists trivially
/// pass.
pub fn check_policy(text: &str, pack: &StylePack) -> PolicyFindings {
    let lower_text = text.to_lowercase();

    let banned = pack
        .must_avoid
        .iter()
        .filter(|term| lower_text.contains(&term.to_lowercase()))
        .cloned()
        .collect();

    let missing_required = pack
        .must_use
        .iter()
        .filter(|term| !lower_text.contains(&term.to_lowercase()))
        .cloned()
        .collect();

    PolicyFindings {
        banned,
        missing_required,
    }
}
