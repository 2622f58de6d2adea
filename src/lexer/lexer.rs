use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    kind: TokenKind,
    pattern: &'static str,
    handler: RegexHandler,
}

impl RegexPattern {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }
}

lazy_static! {
    /// Rules in priority order: at each position the first rule matching there wins.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { kind: TokenKind::Comment, pattern: r"(?s:\(\*.*?\*\))", handler: skip_handler },
        RegexPattern { kind: TokenKind::Assign, pattern: ":=", handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
        RegexPattern { kind: TokenKind::OpNot, pattern: "not", handler: MK_DEFAULT_HANDLER!(TokenKind::OpNot) },
        RegexPattern { kind: TokenKind::OpAnd, pattern: "and", handler: MK_DEFAULT_HANDLER!(TokenKind::OpAnd) },
        RegexPattern { kind: TokenKind::OpOr, pattern: "or", handler: MK_DEFAULT_HANDLER!(TokenKind::OpOr) },
        RegexPattern { kind: TokenKind::OpXor, pattern: "xor", handler: MK_DEFAULT_HANDLER!(TokenKind::OpXor) },
        RegexPattern { kind: TokenKind::LParen, pattern: r"\(", handler: MK_DEFAULT_HANDLER!(TokenKind::LParen) },
        RegexPattern { kind: TokenKind::RParen, pattern: r"\)", handler: MK_DEFAULT_HANDLER!(TokenKind::RParen) },
        RegexPattern { kind: TokenKind::Semicolon, pattern: ";", handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { kind: TokenKind::Const, pattern: r"\btrue\b|\bfalse\b", handler: MK_DEFAULT_HANDLER!(TokenKind::Const) },
        RegexPattern { kind: TokenKind::Hex, pattern: r"\b[0-9][0-9a-fA-F]*\b", handler: MK_DEFAULT_HANDLER!(TokenKind::Hex) },
        RegexPattern { kind: TokenKind::Roman, pattern: r"\b[IVXLCDM]+\b", handler: MK_DEFAULT_HANDLER!(TokenKind::Roman) },
        RegexPattern { kind: TokenKind::Ident, pattern: r"\b[a-zA-Z_][a-zA-Z_0-9]{0,31}\b", handler: MK_DEFAULT_HANDLER!(TokenKind::Ident) },
        RegexPattern { kind: TokenKind::Skip, pattern: r"[ \t\n]+", handler: skip_handler },
        RegexPattern { kind: TokenKind::Mismatch, pattern: r"(?s:.)", handler: mismatch_handler },
    ];

    /// All rules as one alternation, group `i + 1` capturing `PATTERNS[i]`.
    /// Alternatives are preferred in listing order, and `Mismatch` accepts any
    /// character, so a search from `pos` always yields the lexeme at `pos`.
    static ref MASTER: Regex = Regex::new(
        &PATTERNS
            .iter()
            .map(|rule| format!("(?P<{}>{})", rule.kind.name(), rule.pattern))
            .collect::<Vec<String>>()
            .join("|")
    )
    .unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        tracing::trace!(kind = %token.kind, value = %token.value, offset = token.span.start.0, "token");
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of `lexeme` starting at the current position.
    pub fn span_of(&self, lexeme: &str) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + lexeme.len()) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The rule that wins at the current position and the end of its lexeme.
    ///
    /// The search runs over the whole source so `\b` sees the character
    /// before the current position. Returns `None` only at end of input.
    fn next_match(&self) -> Option<(&'static RegexPattern, usize)> {
        let captures = MASTER.captures_at(&self.source, self.pos)?;
        let whole = captures.get(0)?;
        if whole.start() != self.pos {
            return None;
        }

        let rules: &'static [RegexPattern] = &PATTERNS;
        rules
            .iter()
            .enumerate()
            .find(|(i, _)| captures.get(i + 1).is_some())
            .map(|(_, rule)| (rule, whole.end()))
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn mismatch_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnrecognisedToken { token: String::from(lexeme) }, lexer.position()))
}

/// Splits `source` into tokens, dropping whitespace and comments.
///
/// Fails on the first character no rule accepts; nothing scanned before it is
/// returned.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some((rule, end)) = lex.next_match() {
        let lexeme = lex.source[lex.pos..end].to_string();
        (rule.handler)(&mut lex, &lexeme)?;
    }

    debug_assert!(lex.at_eof());
    tracing::debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
