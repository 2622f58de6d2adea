//! Parser state and entry point.
//!
//! This module contains the Parser struct, which owns the token sequence and
//! the cursor into it. Grammar productions live in `stmt` and `expr` and drive
//! the parser through `peek` and `match_token`.
//!
//! It maintains lookup tables for:
//! - Atom handlers, keyed by the token that starts the atom
//! - Binding powers of the binary operators

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl, END_OF_INPUT},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, AtomHandler, AtomLookup, BPLookup, BindingPower},
    stmt::parse_statement,
};

/// Recursive-descent parser over a fully scanned token sequence.
///
/// A parser is good for exactly one statement: `parse` consumes it.
pub struct Parser {
    /// The tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Handlers for tokens that can start an atom
    atom_lookup: AtomLookup,
    /// Binding powers of the binary operators
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser positioned at the first token, with its lookup
    /// tables populated.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            file,
            atom_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses a single assignment statement.
    ///
    /// Tokens after the terminating semicolon are left unconsumed.
    pub fn parse(mut self) -> Result<Node, Error> {
        match parse_statement(&mut self) {
            Ok(tree) => {
                let remaining = self.tokens.len() - self.pos;
                if remaining > 0 {
                    tracing::debug!(remaining, "tokens after the statement were not parsed");
                }
                tracing::debug!(file = %self.file, consumed = self.pos, "parsed statement");
                Ok(tree)
            }
            Err(error) => {
                tracing::debug!(file = %self.file, %error, "parse failed");
                Err(error)
            }
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `None` past the end.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// True iff the current token has the given kind.
    pub fn peek(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Consumes the current token if it has the expected kind and returns it
    /// as a leaf node.
    ///
    /// # Returns
    ///
    /// Returns Ok(Node) if the current token matches, otherwise an
    /// UnexpectedToken error naming the expected and the found kind.
    pub fn match_token(&mut self, expected_kind: TokenKind) -> Result<Node, Error> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == expected_kind => {
                let leaf = Node::leaf(token.clone());
                self.pos += 1;
                Ok(leaf)
            }
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.found(),
                },
                self.get_position(),
            )),
        }
    }

    /// Describes the current token for error messages.
    pub fn found(&self) -> String {
        match self.current_token_kind() {
            Some(kind) => kind.to_string(),
            None => String::from(END_OF_INPUT),
        }
    }

    /// Returns true once every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Number of tokens consumed so far.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the atom lookup table.
    pub fn get_atom_lookup(&self) -> &AtomLookup {
        &self.atom_lookup
    }

    /// Binding power of the current token, if it is a binary operator.
    pub fn current_binding_power(&self) -> Option<BindingPower> {
        self.current_token_kind()
            .and_then(|kind| self.binding_power_lookup.get(&kind).copied())
    }

    /// Registers a binary operator.
    ///
    /// # Arguments
    ///
    /// * `kind` - The operator token kind
    /// * `binding_power` - The precedence level it folds at
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a handler for a token that starts an atom.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler that parses the atom
    pub fn nud(&mut self, kind: TokenKind, nud_fn: AtomHandler) {
        self.atom_lookup.insert(kind, nud_fn);
    }

    /// Source position of the current token; past the end, the end of the
    /// last token.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos).or(self.tokens.last()) {
            Some(token) if self.pos < self.tokens.len() => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position(0, Rc::clone(&self.file)),
        }
    }
}

/// Parses a token sequence into a syntax tree.
///
/// This is the main entry point for parsing. It creates a fresh parser and
/// parses one `IDENT := <disjunction> ;` statement.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by `tokenize`
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Node, Error> {
    Parser::new(tokens, file).parse()
}
