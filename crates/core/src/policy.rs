//! Input validation policy
//!
//! Every conversion validates its input before transforming it. Instead of each
//! conversion carrying its own ad hoc checks, a [`ValidationPolicy`] bundles the
//! checks as named toggles and each conversion declares the preset it applies
//! (see [`crate::Case::policy`]).

use crate::error::{CaseError, InvalidInputReason};

/// Default upper bound for the special-character ratio.
pub const SPECIAL_RATIO_LIMIT: f64 = 0.5;

/// Default minimum number of ASCII letters and digits.
pub const MIN_LENGTH: usize = 2;

/// Punctuation that does not count towards the special-character ratio.
const ALLOWED_PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationPolicy {
    /// Reject when `special / non-whitespace` is strictly greater than this.
    pub max_special_ratio: Option<f64>,
    /// Reject when the first character is not an ASCII letter.
    pub reject_leading_non_letter: bool,
    /// Reject when any character is outside 7-bit ASCII.
    pub reject_non_ascii: bool,
    /// Reject when there are fewer ASCII letters and digits than this.
    pub min_length: usize,
    /// Reject when no ASCII letter or digit is present.
    pub require_alphanumeric: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::sentence()
    }
}

impl ValidationPolicy {
    /// Only rejects empty or whitespace-only input.
    pub const fn permissive() -> Self {
        Self {
            max_special_ratio: None,
            reject_leading_non_letter: false,
            reject_non_ascii: false,
            min_length: 0,
            require_alphanumeric: false,
        }
    }

    /// Free-form sentences: length, alphanumeric and special-ratio checks.
    pub const fn sentence() -> Self {
        Self {
            max_special_ratio: Some(SPECIAL_RATIO_LIMIT),
            reject_leading_non_letter: false,
            reject_non_ascii: false,
            min_length: MIN_LENGTH,
            require_alphanumeric: true,
        }
    }

    /// [`ValidationPolicy::sentence`] plus ASCII-only input that starts with a letter.
    pub const fn strict() -> Self {
        Self {
            reject_leading_non_letter: true,
            reject_non_ascii: true,
            ..Self::sentence()
        }
    }

    /// Run every enabled check in order and report the first failure.
    ///
    /// Order: empty, non-ASCII, leading character, alphanumeric presence,
    /// minimum length, special-character ratio.
    pub fn validate(&self, input: &str) -> Result<(), CaseError> {
        if input.trim().is_empty() {
            return Err(InvalidInputReason::Empty.into());
        }

        if self.reject_non_ascii {
            if let Some((index, ch)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
                return Err(InvalidInputReason::NonAscii { ch, index }.into());
            }
        }

        if self.reject_leading_non_letter {
            if let Some(ch) = input.chars().next().filter(|c| !c.is_ascii_alphabetic()) {
                return Err(InvalidInputReason::LeadingNonLetter { ch }.into());
            }
        }

        let found = alphanumeric_count(input);
        if self.require_alphanumeric && found == 0 {
            return Err(InvalidInputReason::NoAlphanumeric.into());
        }

        if found < self.min_length {
            return Err(InvalidInputReason::TooShort {
                min: self.min_length,
                found,
            }
            .into());
        }

        if let Some(limit) = self.max_special_ratio {
            if let Some(ratio) = special_char_ratio(input) {
                if ratio > limit {
                    return Err(InvalidInputReason::TooManySpecialCharacters { ratio, limit }.into());
                }
            }
        }

        Ok(())
    }
}

/// Whether `c` belongs to `[A-Za-z0-9\s,.!?]`.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

fn alphanumeric_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

fn non_whitespace_count(input: &str) -> usize {
    input.chars().filter(|c| !c.is_whitespace()).count()
}

/// Ratio of characters outside [`is_allowed_char`] to non-whitespace characters.
///
/// Returns `None` when the input has no non-whitespace characters.
pub fn special_char_ratio(input: &str) -> Option<f64> {
    let total = non_whitespace_count(input);
    if total == 0 {
        return None;
    }

    let special = input.chars().filter(|c| !is_allowed_char(*c)).count();
    Some(special as f64 / total as f64)
}
