//! Recursive descent parser for trunic documents.
//!
//! Grammar, in matching order:
//!
//!     document  : section EOF
//!     section   : header (section+ | line+)
//!     line      : (word | literal)+
//!     word      : glyph-run ("/" glyph-run)*
//!
//! The language is unambiguous with one line of lookahead: after a header,
//! the very next significant line decides whether the section holds nested
//! sections or lines. Section nesting is greedy, matching the
//! shift-preferring resolution of the original grammar: a header always
//! continues the innermost open section list.
//!
//! Whitespace between tokens on a line is insignificant, so `12/ 34` is one
//! word. Blank lines are ignored. Glyph runs are canonicalized as soon as
//! they are recognized; the parser never stores raw runs.
//!
//! Parsing is all-or-nothing per document: any malformed input aborts with
//! a [ParseError] and no partial tree is surfaced.

use crate::trunic::ast::{Document, Line, LineItem, Section, SectionBody, Word};
use crate::trunic::canonical::{canonicalize_with, CanonicalError, CanonicalGlyph, CanonicalOptions};
use crate::trunic::lexing::{classify_lines, ensure_trailing_newline, LexError};
use crate::trunic::token::{LineKind, LineToken, Token};
use std::fmt;
use std::ops::Range;

/// Errors produced while parsing a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed (alphabet violation).
    Lex(LexError),
    /// The document contained no significant lines.
    EmptyDocument,
    /// The document did not start with a section header.
    MissingHeader { line: usize },
    /// A `#` header with no label.
    EmptyHeader { line: usize },
    /// A header immediately followed by end of input.
    EmptySection { label: String },
    /// Significant lines after the top-level section closed. This is also
    /// how mixed section content surfaces: a line body commits at the first
    /// line after the header, so a later attempt to mix (lines trailing a
    /// nested-section subtree) leaves unconsumable input at the top level.
    TrailingContent { line: usize },
    /// A glyph run failed to canonicalize.
    Glyph { line: usize, source: CanonicalError },
    /// A token sequence the line grammar forbids.
    UnexpectedToken { line: usize, message: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::EmptyDocument => write!(f, "document has no content"),
            ParseError::MissingHeader { line } => {
                write!(f, "line {}: expected a '#' section header", line)
            }
            ParseError::EmptyHeader { line } => {
                write!(f, "line {}: section header has no label", line)
            }
            ParseError::EmptySection { label } => {
                write!(f, "section {:?} has no content", label)
            }
            ParseError::TrailingContent { line } => {
                write!(f, "line {}: content after the top-level section", line)
            }
            ParseError::Glyph { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
            ParseError::UnexpectedToken { line, message } => {
                write!(f, "line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Glyph { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Parse a document with the default canonicalization options.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    parse_with(source, &CanonicalOptions::default())
}

/// Parse a document, canonicalizing glyphs with the given options.
pub fn parse_with(source: &str, options: &CanonicalOptions) -> Result<Document, ParseError> {
    let text = ensure_trailing_newline(source);
    let lines = classify_lines(&text)?;
    let significant: Vec<LineToken> = lines
        .into_iter()
        .filter(|line| !matches!(line.kind, LineKind::Blank))
        .collect();

    let mut parser = Parser {
        lines: significant,
        pos: 0,
        options,
    };

    if parser.peek().is_none() {
        return Err(ParseError::EmptyDocument);
    }
    let root = parser.parse_section()?;
    if let Some(line) = parser.peek() {
        return Err(ParseError::TrailingContent { line: line.number });
    }
    Ok(Document { root })
}

struct Parser<'a> {
    lines: Vec<LineToken>,
    pos: usize,
    options: &'a CanonicalOptions,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&LineToken> {
        self.lines.get(self.pos)
    }

    fn advance(&mut self) -> Option<LineToken> {
        let line = self.lines.get(self.pos).cloned();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    fn parse_section(&mut self) -> Result<Section, ParseError> {
        let header = match self.advance() {
            Some(line) => line,
            None => return Err(ParseError::EmptyDocument),
        };
        let label = match header.kind {
            LineKind::Header(label) if label.is_empty() => {
                return Err(ParseError::EmptyHeader {
                    line: header.number,
                })
            }
            LineKind::Header(label) => label,
            _ => {
                return Err(ParseError::MissingHeader {
                    line: header.number,
                })
            }
        };

        let body = match self.peek().map(|line| &line.kind) {
            None => return Err(ParseError::EmptySection { label }),
            Some(LineKind::Header(_)) => {
                // A header always continues the innermost open section list,
                // so this loop only ends at end of input: children with line
                // bodies stop at the next header, and that header re-enters
                // the loop as a sibling.
                let mut children = Vec::new();
                while matches!(self.peek().map(|l| &l.kind), Some(LineKind::Header(_))) {
                    children.push(self.parse_section()?);
                }
                SectionBody::Sections(children)
            }
            Some(_) => {
                let mut lines = Vec::new();
                while let Some((number, tokens)) = self.take_content_line() {
                    lines.push(self.parse_line(number, tokens)?);
                }
                SectionBody::Lines(lines)
            }
        };

        Ok(Section { label, body })
    }

    fn take_content_line(&mut self) -> Option<(usize, Vec<(Token, Range<usize>)>)> {
        match self.peek() {
            Some(LineToken {
                kind: LineKind::Content(_),
                ..
            }) => match self.advance() {
                Some(LineToken {
                    number,
                    kind: LineKind::Content(tokens),
                }) => Some((number, tokens)),
                _ => None,
            },
            _ => None,
        }
    }

    fn parse_line(
        &self,
        number: usize,
        tokens: Vec<(Token, Range<usize>)>,
    ) -> Result<Line, ParseError> {
        let mut items = Vec::new();
        let mut iter = tokens.into_iter().peekable();

        while let Some((token, _)) = iter.next() {
            match token {
                Token::Literal(text) => items.push(LineItem::Literal(text)),
                Token::GlyphRun(run) => {
                    let mut glyphs = vec![self.glyph(&run, number)?];
                    while matches!(iter.peek(), Some((Token::Slash, _))) {
                        iter.next();
                        match iter.next() {
                            Some((Token::GlyphRun(run), _)) => {
                                glyphs.push(self.glyph(&run, number)?)
                            }
                            _ => {
                                return Err(ParseError::UnexpectedToken {
                                    line: number,
                                    message: "expected a glyph after '/'".to_string(),
                                })
                            }
                        }
                    }
                    items.push(LineItem::Word(Word { glyphs }));
                }
                Token::Slash => {
                    return Err(ParseError::UnexpectedToken {
                        line: number,
                        message: "'/' without a preceding glyph".to_string(),
                    })
                }
            }
        }

        Ok(Line {
            items,
            provenance: None,
        })
    }

    fn glyph(&self, run: &str, number: usize) -> Result<CanonicalGlyph, ParseError> {
        canonicalize_with(run, self.options).map_err(|source| ParseError::Glyph {
            line: number,
            source,
        })
    }
}
