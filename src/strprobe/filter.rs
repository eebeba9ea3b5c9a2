//! The filter predicate model and its evaluator.
//!
//! A [`FilterPredicate`] is an AND-composition of optional constraints over a
//! [`PropertyRecord`]. It is built either from structured parameters
//! ([`FilterPredicate::from_params`]) or by the natural-language translator
//! (`translate` module); both paths produce the same shape, and the same
//! [`FilterPredicate::matches`] semantics apply whether filtering happens in
//! memory or is pushed down into a store's `query`.

use crate::error::{Result, StrprobeError};
use crate::model::PropertyRecord;
use serde::{Deserialize, Serialize};

/// An AND-composed, optional-field constraint set. Absent fields impose no
/// constraint; the empty predicate matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on `length`.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on `length`.
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    /// Always lowercase; folded at construction.
    pub contains_character: Option<char>,
}

/// Raw, untyped filter parameters as an outer layer (query string, CLI flags)
/// hands them over. Each field is validated individually by
/// [`FilterPredicate::from_params`].
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl FilterPredicate {
    /// Validates and converts raw parameters into a predicate.
    ///
    /// Field failures are reported as `InvalidFilterParameter` naming the
    /// offending field; a well-typed but impossible bound pair is
    /// `ConflictingFilters`.
    pub fn from_params(params: &FilterParams) -> Result<Self> {
        let predicate = Self {
            is_palindrome: params
                .is_palindrome
                .as_deref()
                .map(|raw| parse_bool("is_palindrome", raw))
                .transpose()?,
            min_length: params
                .min_length
                .as_deref()
                .map(|raw| parse_count("min_length", raw))
                .transpose()?,
            max_length: params
                .max_length
                .as_deref()
                .map(|raw| parse_count("max_length", raw))
                .transpose()?,
            word_count: params
                .word_count
                .as_deref()
                .map(|raw| parse_count("word_count", raw))
                .transpose()?,
            contains_character: params
                .contains_character
                .as_deref()
                .map(|raw| parse_char("contains_character", raw))
                .transpose()?,
        };
        predicate.validate()?;
        Ok(predicate)
    }

    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Checks the internal consistency of the bounds. Never "fixes" anything:
    /// an impossible pair is an error, not a swap.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(StrprobeError::ConflictingFilters(format!(
                    "min_length ({min}) is greater than max_length ({max})"
                )));
            }
        }
        Ok(())
    }

    /// Evaluates every present constraint against a record; all must hold.
    pub fn matches(&self, props: &PropertyRecord) -> bool {
        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            // Frequency counts are >= 1 by construction, so key presence is
            // enough. The map is raw-case; the filter char is lowercase.
            if !props.character_frequency_map.contains_key(&c) {
                return false;
            }
        }
        true
    }
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(StrprobeError::InvalidFilterParameter {
            field,
            reason: format!("expected \"true\" or \"false\", got {raw:?}"),
        })
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| StrprobeError::InvalidFilterParameter {
            field,
            reason: format!("expected a non-negative integer, got {raw:?}"),
        })
}

fn parse_char(field: &'static str, raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_ascii_lowercase()),
        _ => Err(StrprobeError::InvalidFilterParameter {
            field,
            reason: format!("expected exactly one character, got {raw:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    fn params(
        is_palindrome: Option<&str>,
        min: Option<&str>,
        max: Option<&str>,
        words: Option<&str>,
        contains: Option<&str>,
    ) -> FilterParams {
        FilterParams {
            is_palindrome: is_palindrome.map(String::from),
            min_length: min.map(String::from),
            max_length: max.map(String::from),
            word_count: words.map(String::from),
            contains_character: contains.map(String::from),
        }
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        let p = FilterPredicate::default();
        assert!(p.matches(&analyze("madam").unwrap()));
        assert!(p.matches(&analyze("two words here").unwrap()));
    }

    #[test]
    fn test_exact_length_window() {
        let p = FilterPredicate {
            min_length: Some(3),
            max_length: Some(3),
            ..Default::default()
        };
        assert!(p.matches(&analyze("abc").unwrap()));
        assert!(!p.matches(&analyze("ab").unwrap()));
        assert!(!p.matches(&analyze("abcd").unwrap()));
    }

    #[test]
    fn test_and_composition() {
        let p = FilterPredicate {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        };
        assert!(p.matches(&analyze("madam").unwrap()));
        // palindrome but two words
        assert!(!p.matches(&analyze("never odd or even").unwrap()));
        // single word but not a palindrome
        assert!(!p.matches(&analyze("hello").unwrap()));
    }

    #[test]
    fn test_contains_character_is_case_sensitive_against_raw_map() {
        let p = FilterPredicate {
            contains_character: Some('a'),
            ..Default::default()
        };
        assert!(p.matches(&analyze("banana").unwrap()));
        // Raw map keeps original case; lowercase 'a' is not a key of "BANANA"
        assert!(!p.matches(&analyze("BANANA").unwrap()));
        assert!(!p.matches(&analyze("hello").unwrap()));
    }

    #[test]
    fn test_from_params_happy_path() {
        let p = FilterPredicate::from_params(&params(
            Some("TRUE"),
            Some("2"),
            Some("10"),
            Some("1"),
            Some("M"),
        ))
        .unwrap();
        assert_eq!(p.is_palindrome, Some(true));
        assert_eq!(p.min_length, Some(2));
        assert_eq!(p.max_length, Some(10));
        assert_eq!(p.word_count, Some(1));
        // folded to lowercase
        assert_eq!(p.contains_character, Some('m'));
    }

    #[test]
    fn test_from_params_field_errors_name_the_field() {
        let err = FilterPredicate::from_params(&params(Some("yes"), None, None, None, None))
            .unwrap_err();
        assert!(
            matches!(err, StrprobeError::InvalidFilterParameter { field: "is_palindrome", .. })
        );

        let err = FilterPredicate::from_params(&params(None, Some("-3"), None, None, None))
            .unwrap_err();
        assert!(matches!(
            err,
            StrprobeError::InvalidFilterParameter { field: "min_length", .. }
        ));

        let err = FilterPredicate::from_params(&params(None, None, None, Some("two"), None))
            .unwrap_err();
        assert!(matches!(
            err,
            StrprobeError::InvalidFilterParameter { field: "word_count", .. }
        ));

        let err = FilterPredicate::from_params(&params(None, None, None, None, Some("ab")))
            .unwrap_err();
        assert!(matches!(
            err,
            StrprobeError::InvalidFilterParameter { field: "contains_character", .. }
        ));
    }

    #[test]
    fn test_from_params_conflicting_bounds() {
        let err = FilterPredicate::from_params(&params(None, Some("10"), Some("5"), None, None))
            .unwrap_err();
        assert!(matches!(err, StrprobeError::ConflictingFilters(_)));
    }
}
