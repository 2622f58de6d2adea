use crate::{ast::ast::{Node, NodeKind}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_disjunction, parser::Parser};

/// `IDENT := <disjunction> ;`
pub fn parse_statement(parser: &mut Parser) -> Result<Node, Error> {
    let target = Node::new(NodeKind::Operand, vec![parser.match_token(TokenKind::Ident)?]);
    let assign = parser.match_token(TokenKind::Assign)?;
    let value = parse_disjunction(parser)?;
    let semicolon = parser.match_token(TokenKind::Semicolon)?;

    Ok(Node::new(NodeKind::Statement, vec![target, assign, value, semicolon]))
}
