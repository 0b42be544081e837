//! List-literal extraction.
//!
//! Models are asked to reply with a list such as
//! `['Space and astronomy', "Music and rhythm"]`, but often wrap it in
//! prose or code fences. [`extract_list`] takes the text between the first
//! `[` and the last `]` and parses it with a small grammar:
//!
//! ```text
//! list   := '[' ws ( string ws ( ',' ws string ws )* ( ',' ws )? )? ']'
//! string := '\'' chars '\'' | '"' chars '"'
//! ```
//!
//! Escapes `\\`, `\'`, `\"`, `\n`, `\t` and `\r` are decoded; any other
//! backslash sequence is kept verbatim. Nothing is evaluated.

use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

/// Errors produced while extracting a list from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListParseError {
    #[error("No bracketed list found in text")]
    NoBrackets,

    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("Unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("Unexpected end of list")]
    UnexpectedEnd,

    #[error("Unexpected input after closing bracket at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("List is empty")]
    Empty,
}

/// Extract a non-empty list of strings from free text.
///
/// # Examples
///
/// ```
/// use qa_domain::parsing::extract_list;
///
/// let text = "Sure! Here you go: ['Love', \"Nature\"] Enjoy.";
/// assert_eq!(extract_list(text).unwrap(), vec!["Love", "Nature"]);
/// ```
pub fn extract_list(text: &str) -> Result<Vec<String>, ListParseError> {
    let start = text.find('[').ok_or(ListParseError::NoBrackets)?;
    let end = text.rfind(']').ok_or(ListParseError::NoBrackets)?;
    if end < start {
        return Err(ListParseError::NoBrackets);
    }

    let items = parse_list_literal(&text[start..=end])?;
    if items.is_empty() {
        return Err(ListParseError::Empty);
    }
    Ok(items)
}

/// Parse a complete list literal. Offsets in errors are relative to `literal`.
pub fn parse_list_literal(literal: &str) -> Result<Vec<String>, ListParseError> {
    let mut parser = ListParser {
        chars: literal.char_indices().peekable(),
    };
    let items = parser.parse_list()?;
    parser.skip_whitespace();
    if let Some((offset, _)) = parser.peek() {
        return Err(ListParseError::TrailingInput { offset });
    }
    Ok(items)
}

/// Render strings as a list literal accepted by [`parse_list_literal`].
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for c in item.as_ref().chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                other => out.push(other),
            }
        }
        out.push('\'');
    }
    out.push(']');
    out
}

struct ListParser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl ListParser<'_> {
    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ListParseError> {
        match self.bump() {
            Some((_, c)) if c == expected => Ok(()),
            Some((offset, found)) => Err(ListParseError::UnexpectedChar { offset, found }),
            None => Err(ListParseError::UnexpectedEnd),
        }
    }

    fn parse_list(&mut self) -> Result<Vec<String>, ListParseError> {
        self.skip_whitespace();
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some((_, ']')) => {
                    self.bump();
                    return Ok(items);
                }
                Some((_, '\'' | '"')) => items.push(self.parse_string()?),
                Some((offset, found)) => {
                    return Err(ListParseError::UnexpectedChar { offset, found });
                }
                None => return Err(ListParseError::UnexpectedEnd),
            }

            self.skip_whitespace();
            match self.bump() {
                Some((_, ',')) => {}
                Some((_, ']')) => return Ok(items),
                Some((offset, found)) => {
                    return Err(ListParseError::UnexpectedChar { offset, found });
                }
                None => return Err(ListParseError::UnexpectedEnd),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, ListParseError> {
        let (offset, quote) = self.bump().ok_or(ListParseError::UnexpectedEnd)?;
        let unterminated = ListParseError::UnterminatedString { offset };

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(unterminated),
                Some((_, c)) if c == quote => return Ok(value),
                Some((_, '\\')) => match self.bump() {
                    None => return Err(unterminated),
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, c @ ('\\' | '\'' | '"'))) => value.push(c),
                    Some((_, other)) => {
                        value.push('\\');
                        value.push(other);
                    }
                },
                Some((_, c)) => value.push(c),
            }
        }
    }
}
