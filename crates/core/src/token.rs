//! Character-class segmentation
//!
//! Splits a word into maximal runs of ASCII letters, ASCII digits, or anything
//! else. Concatenating the tokens of a word always yields the word back.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+|[0-9]+|[^a-zA-Z0-9]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Alpha,
    Numeric,
    Other,
}

impl TokenKind {
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            TokenKind::Alpha
        } else if c.is_ascii_digit() {
            TokenKind::Numeric
        } else {
            TokenKind::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    /// Letters or digits, as opposed to punctuation and other symbols.
    pub fn is_word(&self) -> bool {
        self.kind != TokenKind::Other
    }
}

/// Segment `word` into alphabetic, numeric and other tokens, left to right.
pub fn tokenize(word: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .find_iter(word)
        .filter_map(|m| {
            let text = m.as_str();
            text.chars().next().map(|c| Token {
                kind: TokenKind::of(c),
                text,
            })
        })
        .collect()
}
