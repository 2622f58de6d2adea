use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Disjunction,
    Conjunction,
}

pub type AtomHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical, or/xor share a level below and
    parser.led(TokenKind::OpOr, BindingPower::Disjunction);
    parser.led(TokenKind::OpXor, BindingPower::Disjunction);
    parser.led(TokenKind::OpAnd, BindingPower::Conjunction);

    // Grouping and negation
    parser.nud(TokenKind::LParen, parse_grouping_atom);
    parser.nud(TokenKind::OpNot, parse_negation_atom);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_operand_atom);
    parser.nud(TokenKind::Const, parse_operand_atom);
    parser.nud(TokenKind::Roman, parse_operand_atom);
    parser.nud(TokenKind::Hex, parse_operand_atom);
}

pub type AtomLookup = HashMap<TokenKind, AtomHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
