use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    Assign, // :=

    OpNot,
    OpAnd,
    OpOr,
    OpXor,

    LParen,
    RParen,
    Semicolon,

    Const, // true | false
    Hex,
    Roman,
    Ident,

    Skip,
    Mismatch,
}

impl TokenKind {
    /// The upper-case name used in token tables and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::OpNot => "OP_NOT",
            TokenKind::OpAnd => "OP_AND",
            TokenKind::OpOr => "OP_OR",
            TokenKind::OpXor => "OP_XOR",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Const => "CONST",
            TokenKind::Hex => "HEX",
            TokenKind::Roman => "ROMAN",
            TokenKind::Ident => "IDENT",
            TokenKind::Skip => "SKIP",
            TokenKind::Mismatch => "MISMATCH",
        }
    }

    /// Kinds that form an expression on their own.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Const | TokenKind::Roman | TokenKind::Hex
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    /// One line of the token table, e.g. `OP_AND: and`.
    pub fn table_row(&self) -> String {
        format!("{}: {}", self.kind, self.value)
    }
}
