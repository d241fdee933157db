use std::fmt::Write;

use super::Case;
use crate::error::CaseError;
use crate::token::tokenize;

/// Convert a sentence to camelCase.
///
/// Words are split on whitespace and each word is segmented into letter,
/// digit and punctuation runs. The first letter-or-digit run of the first word
/// is lowercased; every later letter-or-digit run is capitalized. Punctuation
/// runs are kept verbatim and in place.
///
/// ```
/// use casekit_core::to_camel_case;
///
/// assert_eq!(to_camel_case("Hello World!").unwrap(), "helloWorld!");
/// assert_eq!(to_camel_case("my name is John").unwrap(), "myNameIsJohn");
/// ```
pub fn to_camel_case(sentence: &str) -> Result<String, CaseError> {
    Case::Camel.policy().validate(sentence)?;
    render(sentence).map_err(|e| CaseError::processing(Case::Camel, e))
}

fn render(sentence: &str) -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(sentence.len());

    for (index, word) in sentence.split_whitespace().enumerate() {
        let mut lowercase_next = index == 0;

        for token in tokenize(word) {
            if !token.is_word() {
                out.write_str(token.text)?;
            } else if lowercase_next {
                out.write_str(&token.text.to_ascii_lowercase())?;
                lowercase_next = false;
            } else {
                write_capitalized(&mut out, token.text)?;
            }
        }
    }

    Ok(out)
}

fn write_capitalized(out: &mut impl Write, text: &str) -> std::fmt::Result {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        out.write_char(first.to_ascii_uppercase())?;
        out.write_str(&chars.as_str().to_ascii_lowercase())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_basic() {
        assert_eq!(to_camel_case("hello world").unwrap(), "helloWorld");
    }

    #[test]
    fn test_camel_all_caps() {
        assert_eq!(to_camel_case("HELLO WORLD").unwrap(), "helloWorld");
    }

    #[test]
    fn test_camel_keeps_punctuation_in_place() {
        assert_eq!(to_camel_case("Hello World!").unwrap(), "helloWorld!");
        assert_eq!(to_camel_case("well, that is odd.").unwrap(), "well,ThatIsOdd.");
    }

    #[test]
    fn test_camel_collapses_whitespace_runs() {
        assert_eq!(
            to_camel_case("  my   name\tis\nJohn  ").unwrap(),
            "myNameIsJohn"
        );
    }

    #[test]
    fn test_camel_segments_numbers() {
        assert_eq!(
            to_camel_case("version 2beta release").unwrap(),
            "version2BetaRelease"
        );
        assert_eq!(to_camel_case("route66 highway").unwrap(), "route66Highway");
    }

    #[test]
    fn test_camel_first_word_leading_punctuation() {
        // The first letter run of the first word is still lowercased.
        assert_eq!(to_camel_case("(Hello) World").unwrap(), "(hello)World");
    }

    #[test]
    fn test_camel_leading_number() {
        assert_eq!(to_camel_case("42 Is the answer").unwrap(), "42IsTheAnswer");
    }

    #[test]
    fn test_camel_keeps_non_ascii_verbatim() {
        assert_eq!(to_camel_case("café olé").unwrap(), "caféOlé");
    }

    #[test]
    fn test_camel_not_idempotent() {
        let once = to_camel_case("hello world").unwrap();
        assert_eq!(once, "helloWorld");
        // A single word is lowercased entirely on the second pass.
        assert_eq!(to_camel_case(&once).unwrap(), "helloworld");
    }

    #[test]
    fn test_camel_rejects_invalid_input() {
        for input in ["", "x", "...", "a$%^&*"] {
            assert!(
                to_camel_case(input).unwrap_err().is_invalid_input(),
                "{input:?} should be rejected"
            );
        }
    }
}
