//! Line classification and tokenization.
//!
//! The lexer works in two steps:
//!
//!     1. Split the source into lines and classify each one: `#` starts a
//!        header line (the rest of the line is the label), whitespace-only
//!        lines are blank, everything else is a content line.
//!     2. Tokenize content lines with the logos [Token](crate::trunic::token::Token)
//!        lexer. Any character a content line is not allowed to contain
//!        surfaces here as an error carrying the line number.
//!
//! The parser consumes the resulting stream of [LineToken]s with one line
//! of lookahead and never needs to re-inspect raw text.

use crate::trunic::token::{LineKind, LineToken, Token};
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A content line contained a character the glyph lexer rejects.
    UnexpectedCharacter { line: usize, found: char },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { line, found } => {
                write!(f, "line {}: unexpected character {:?}", line, found)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Append a trailing newline when the source lacks one.
///
/// Required so the final line terminates like every other line.
pub fn ensure_trailing_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize one content line with the glyph lexer.
pub fn tokenize_line(text: &str, number: usize) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or(' ');
                return Err(LexError::UnexpectedCharacter {
                    line: number,
                    found,
                });
            }
        }
    }

    Ok(tokens)
}

/// Split the source into classified line tokens.
pub fn classify_lines(source: &str) -> Result<Vec<LineToken>, LexError> {
    let mut lines = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let number = i + 1;
        let trimmed = raw.trim();
        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(label) = trimmed.strip_prefix('#') {
            LineKind::Header(label.trim().to_string())
        } else {
            LineKind::Content(tokenize_line(raw, number)?)
        };
        lines.push(LineToken { number, kind });
    }

    Ok(lines)
}
