use crate::{ast::ast::{Node, NodeKind}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{lookups::{AtomHandler, BindingPower}, parser::Parser};

pub fn parse_disjunction(parser: &mut Parser) -> Result<Node, Error> {
    parse_left_assoc(parser, BindingPower::Disjunction, NodeKind::Disjunction, parse_conjunction)
}

pub fn parse_conjunction(parser: &mut Parser) -> Result<Node, Error> {
    parse_left_assoc(parser, BindingPower::Conjunction, NodeKind::Conjunction, parse_atom)
}

/// Parses `operand (op operand)*` for the operators registered at `bp`,
/// folding each step into `kind[left, op, right]`. A single operand is
/// returned unwrapped.
fn parse_left_assoc(
    parser: &mut Parser,
    bp: BindingPower,
    kind: NodeKind,
    operand: AtomHandler,
) -> Result<Node, Error> {
    let mut left = operand(parser)?;

    while parser.current_binding_power() == Some(bp) {
        let Some(operator_kind) = parser.current_token_kind() else {
            break;
        };
        let operator = parser.match_token(operator_kind)?;
        let right = operand(parser)?;

        left = Node::new(kind, vec![left, operator, right]);
    }

    Ok(left)
}

pub fn parse_atom(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_atom_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(expected_expression(parser)),
    }
}

/// `( <disjunction> )`
pub fn parse_grouping_atom(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.match_token(TokenKind::LParen)?;
    let inner = parse_disjunction(parser)?;
    let close = parser.match_token(TokenKind::RParen)?;

    Ok(Node::new(NodeKind::Atom, vec![open, inner, close]))
}

/// `not ( <disjunction> )`
pub fn parse_negation_atom(parser: &mut Parser) -> Result<Node, Error> {
    let not = parser.match_token(TokenKind::OpNot)?;
    let open = parser.match_token(TokenKind::LParen)?;
    let inner = parse_disjunction(parser)?;
    let close = parser.match_token(TokenKind::RParen)?;

    Ok(Node::new(NodeKind::Atom, vec![not, open, inner, close]))
}

/// Identifier, constant, Roman or hex literal.
pub fn parse_operand_atom(parser: &mut Parser) -> Result<Node, Error> {
    let leaf = match parser.current_token_kind() {
        Some(kind) if kind.is_operand() => parser.match_token(kind)?,
        _ => return Err(expected_expression(parser)),
    };

    Ok(Node::new(NodeKind::Atom, vec![Node::new(NodeKind::Operand, vec![leaf])]))
}

fn expected_expression(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::ExpectedExpression { found: parser.found() },
        parser.get_position(),
    )
}
