//! Free-text query translation.
//!
//! This is a bounded heuristic, not a grammar: an ordered list of independent
//! matchers over the lowercased query text, each contributing at most one
//! predicate field, followed by a single consolidated conflict check. First
//! match wins within a category; categories do not interact; no backtracking.

use crate::error::{Result, StrprobeError};
use crate::filter::FilterPredicate;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)[\s-]*words?\b").unwrap());
static LONGER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:longer|more|greater|bigger)\s+than\s+(\d+)").unwrap());
static SHORTER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:shorter|less|fewer|smaller)\s+than\s+(\d+)").unwrap());
static CONTAINS_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contain(?:s|ing)?\s+(?:the\s+letter\s+)?'?([a-z])'?\b").unwrap());

/// Translates a free-text query into a [`FilterPredicate`].
///
/// Errors with [`StrprobeError::UnparseableQuery`] when no rule fires at all,
/// and with [`StrprobeError::ConflictingFilters`] when rules fired but the
/// resulting predicate is impossible to satisfy. The two are distinct: the
/// second means the query *was* understood.
pub fn translate(text: &str) -> Result<FilterPredicate> {
    let lowered = text.to_lowercase();
    let mut predicate = FilterPredicate::default();

    if lowered.contains("palindrom") {
        predicate.is_palindrome = Some(true);
    }

    if lowered.contains("single word") {
        predicate.word_count = Some(1);
    } else if let Some(n) = capture_number(&WORD_COUNT_RE, &lowered) {
        predicate.word_count = Some(n);
    }

    if let Some(n) = capture_number(&LONGER_THAN_RE, &lowered) {
        // "longer than N" is exclusive; stored as the inclusive bound N + 1
        predicate.min_length = Some(n.saturating_add(1));
    }
    if let Some(n) = capture_number(&SHORTER_THAN_RE, &lowered) {
        // Exclusive again: "shorter than N" means at most N - 1. There is no
        // inclusive bound below zero, so N = 0 is unsatisfiable.
        match n.checked_sub(1) {
            Some(max) => predicate.max_length = Some(max),
            None => {
                return Err(StrprobeError::ConflictingFilters(
                    "no string is shorter than 0 characters".to_string(),
                ))
            }
        }
    }

    if let Some(caps) = CONTAINS_LETTER_RE.captures(&lowered) {
        let c = caps[1].chars().next().unwrap_or('a');
        predicate.contains_character = Some(c.to_ascii_lowercase());
    }
    // Fixed heuristic; only applies when no explicit letter was named
    if predicate.contains_character.is_none() && lowered.contains("first vowel") {
        predicate.contains_character = Some('a');
    }

    if predicate.is_empty() {
        return Err(StrprobeError::UnparseableQuery(text.to_string()));
    }
    predicate.validate()?;

    Ok(predicate)
}

fn capture_number(re: &Regex, text: &str) -> Option<usize> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
