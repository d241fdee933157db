use std::fmt::Write;

use super::Case;
use crate::error::CaseError;

const SEPARATOR: char = '.';

/// Convert a sentence to dot.case.
///
/// Lowercases the input, splits it into words on whitespace and `.`, drops
/// every character that is not an ASCII letter or digit, discards words left
/// empty, and joins the rest with `.`. Splitting on `.` makes the conversion
/// idempotent.
///
/// ```
/// use casekit_core::to_dot_case;
///
/// assert_eq!(to_dot_case("My Name is John!").unwrap(), "my.name.is.john");
/// ```
pub fn to_dot_case(sentence: &str) -> Result<String, CaseError> {
    Case::Dot.policy().validate(sentence)?;
    render(sentence).map_err(|e| CaseError::processing(Case::Dot, e))
}

fn render(sentence: &str) -> Result<String, std::fmt::Error> {
    let lowered = sentence.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    let words = lowered
        .split(|c: char| c.is_whitespace() || c == SEPARATOR)
        .map(|word| word.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|word| !word.is_empty());

    for (index, word) in words.enumerate() {
        if index > 0 {
            out.write_char(SEPARATOR)?;
        }
        out.write_str(&word)?;
    }

    Ok(out)
}
