//! Token types shared by the lexer and parser.
//!
//! Tokenization is line-based: the source is first split into classified
//! line tokens (header, content, blank), and only content lines are run
//! through the logos lexer. Header labels and bracketed literals are free
//! text, so tokenizing them with the glyph lexer would reject them; line
//! classification keeps the glyph lexer strict without giving up on them.

use logos::Logos;
use std::ops::Range;

fn literal_text(lex: &mut logos::Lexer<Token>) -> String {
    // Trim the enclosing brackets; the inner text is passed through verbatim.
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokens of a content line.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Joins glyphs into a word.
    #[token("/")]
    Slash,

    /// Bracket-delimited free text, passed through unparsed. The brackets
    /// must enclose at least one character; `[]` is not a literal.
    #[regex(r"\[[^\]\n]+\]", literal_text)]
    Literal(String),

    /// A maximal run of alphabet characters, possibly with an internal
    /// half separator.
    #[regex(r"[1234QWERASDFZXCV\-]+", |lex| lex.slice().to_string())]
    GlyphRun(String),
}

/// A classified source line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineToken {
    /// 1-based source line number, used for error reporting only.
    pub number: usize,
    pub kind: LineKind,
}

/// What a source line is, decided before glyph tokenization.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// `#`-marked section header; carries the trimmed label.
    Header(String),
    /// A significant line, as glyph tokens with their byte spans.
    Content(Vec<(Token, Range<usize>)>),
    /// Empty or whitespace-only; ignored by the parser.
    Blank,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<Token> {
        Token::lexer(line).map(|t| t.expect("valid token")).collect()
    }

    #[test]
    fn lexes_glyph_runs_and_slashes() {
        assert_eq!(
            tokens("12/34 QW"),
            vec![
                Token::GlyphRun("12".to_string()),
                Token::Slash,
                Token::GlyphRun("34".to_string()),
                Token::GlyphRun("QW".to_string()),
            ]
        );
    }

    #[test]
    fn lexes_bracketed_literals_without_brackets() {
        assert_eq!(
            tokens("[a door opens]"),
            vec![Token::Literal("a door opens".to_string())]
        );
    }

    #[test]
    fn keeps_half_separator_inside_a_run() {
        assert_eq!(tokens("12-AS"), vec![Token::GlyphRun("12-AS".to_string())]);
    }

    #[test]
    fn rejects_an_empty_literal() {
        let mut lexer = Token::lexer("[]");
        assert!(lexer.next().unwrap().is_err());
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        let mut lexer = Token::lexer("12 x");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
    }
}
