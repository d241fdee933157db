use regex::Regex;
use std::sync::LazyLock;

use super::Case;
use crate::error::CaseError;

/// Marker emitted for sentence-ending punctuation (`.` and `!`).
const HARD_BREAK: &str = "--";

static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());
static LONG_HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").unwrap());

/// What happens to the `--` marker left by sentence-ending punctuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HardBreak {
    /// Collapse it into a single `-` like every other separator.
    #[default]
    Collapse,
    /// Keep interior `--` so sentence breaks stay distinguishable.
    Preserve,
}

/// Convert a sentence to kebab-case.
///
/// The input must be ASCII, start with a letter and pass the special-character
/// ratio check. Commas, semicolons and whitespace become `-`; `.` and `!` mark
/// a hard break which, with the default [`HardBreak::Collapse`], ends up as a
/// plain `-` too.
///
/// ```
/// use casekit_core::to_kebab_case;
///
/// assert_eq!(to_kebab_case("Hello, World!").unwrap(), "hello-world");
/// ```
pub fn to_kebab_case(sentence: &str) -> Result<String, CaseError> {
    to_kebab_case_with(sentence, HardBreak::Collapse)
}

/// Like [`to_kebab_case`] with explicit hard-break handling.
pub fn to_kebab_case_with(sentence: &str, hard_break: HardBreak) -> Result<String, CaseError> {
    Case::Kebab.policy().validate(sentence)?;
    Ok(finish(&scan(sentence), hard_break))
}

fn scan(sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len() + HARD_BREAK.len());

    for c in sentence.chars().map(|c| c.to_ascii_lowercase()) {
        match c {
            '.' | '!' => {
                let kept = out
                    .trim_end_matches(|c: char| c == '-' || c.is_whitespace())
                    .len();
                out.truncate(kept);
                out.push_str(HARD_BREAK);
            }
            ',' | ';' => push_separator(&mut out),
            c if c.is_whitespace() => push_separator(&mut out),
            c => out.push(c),
        }
    }

    out
}

fn push_separator(out: &mut String) {
    if !out.ends_with('-') {
        out.push('-');
    }
}

fn finish(scanned: &str, hard_break: HardBreak) -> String {
    let collapsed = match hard_break {
        HardBreak::Collapse => HYPHEN_RUN.replace_all(scanned, "-"),
        HardBreak::Preserve => LONG_HYPHEN_RUN.replace_all(scanned, HARD_BREAK),
    };
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputReason;

    // ============================================================================
    // to_kebab_case tests
    // ============================================================================

    #[test]
    fn test_kebab_comma_and_exclamation() {
        assert_eq!(to_kebab_case("Hello, World!").unwrap(), "hello-world");
    }

    #[test]
    fn test_kebab_simple_sentence() {
        assert_eq!(to_kebab_case("The Quick brown Fox").unwrap(), "the-quick-brown-fox");
    }

    #[test]
    fn test_kebab_semicolon_and_repeated_spaces() {
        assert_eq!(to_kebab_case("first;  second ,third").unwrap(), "first-second-third");
    }

    #[test]
    fn test_kebab_sentence_break_collapses() {
        assert_eq!(to_kebab_case("Stop. Go now!").unwrap(), "stop-go-now");
    }

    #[test]
    fn test_kebab_tabs_and_newlines_are_separators() {
        assert_eq!(to_kebab_case("one\ttwo\nthree").unwrap(), "one-two-three");
    }

    #[test]
    fn test_kebab_keeps_other_characters() {
        assert_eq!(to_kebab_case("What? Why").unwrap(), "what?-why");
        assert_eq!(to_kebab_case("Area 51").unwrap(), "area-51");
    }

    #[test]
    fn test_kebab_existing_hyphens_collapse() {
        assert_eq!(to_kebab_case("well -- maybe").unwrap(), "well-maybe");
    }

    #[test]
    fn test_kebab_is_stable_on_its_output() {
        let once = to_kebab_case("Hello, big World!").unwrap();
        assert_eq!(to_kebab_case(&once).unwrap(), once);
    }

    #[test]
    fn test_kebab_rejects_leading_non_letter() {
        let err = to_kebab_case("1 two three").unwrap_err();
        assert_eq!(
            err,
            CaseError::InvalidInput(InvalidInputReason::LeadingNonLetter { ch: '1' })
        );
    }

    #[test]
    fn test_kebab_rejects_non_ascii() {
        let err = to_kebab_case("Crème brûlée").unwrap_err();
        assert!(matches!(
            err,
            CaseError::InvalidInput(InvalidInputReason::NonAscii { ch: 'è', index: 2 })
        ));
    }

    #[test]
    fn test_kebab_rejects_mostly_special_characters() {
        // 5 special / 7 non-whitespace
        let err = to_kebab_case("ab;;;;;").unwrap_err();
        assert!(matches!(
            err,
            CaseError::InvalidInput(InvalidInputReason::TooManySpecialCharacters { .. })
        ));
    }

    #[test]
    fn test_kebab_rejects_empty_single_and_punctuation() {
        assert!(to_kebab_case("").unwrap_err().is_invalid_input());
        assert!(to_kebab_case("a").unwrap_err().is_invalid_input());
        assert!(to_kebab_case(".,;!").unwrap_err().is_invalid_input());
    }

    // ============================================================================
    // HardBreak::Preserve tests
    // ============================================================================

    #[test]
    fn test_preserve_keeps_sentence_break() {
        assert_eq!(
            to_kebab_case_with("Stop. Go now!", HardBreak::Preserve).unwrap(),
            "stop--go-now"
        );
    }

    #[test]
    fn test_preserve_trims_trailing_break() {
        assert_eq!(
            to_kebab_case_with("Hello, World!", HardBreak::Preserve).unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn test_preserve_repeated_terminators() {
        assert_eq!(
            to_kebab_case_with("Wait... what!!", HardBreak::Preserve).unwrap(),
            "wait--what"
        );
    }

    #[test]
    fn test_preserve_separator_before_terminator() {
        assert_eq!(
            to_kebab_case_with("Done , . next", HardBreak::Preserve).unwrap(),
            "done--next"
        );
    }

    #[test]
    fn test_preserve_long_runs_shrink_to_marker() {
        assert_eq!(
            to_kebab_case_with("well --- maybe", HardBreak::Preserve).unwrap(),
            "well--maybe"
        );
    }

    #[test]
    fn test_hard_break_default_is_collapse() {
        assert_eq!(HardBreak::default(), HardBreak::Collapse);
    }
}
