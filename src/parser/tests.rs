//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Single statements with every operand kind
//! - Associativity and precedence of the binary operators
//! - Grouping and negation
//! - Syntax errors and where they are reported

use std::rc::Rc;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl, ErrorKind, END_OF_INPUT},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::{parse, Parser}};

fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source.to_string(), Some("test.bool".to_string())).unwrap();
    parse(tokens, Rc::new("test.bool".to_string()))
}

/// Compact s-expression view of a tree: `(F (E x) or (E y))`.
fn shape(node: &Node) -> String {
    match node.get_kind() {
        NodeKind::Leaf => node.label().to_string(),
        NodeKind::Operand => node.get_children()[0].label().to_string(),
        _ => {
            let children: Vec<String> = node.get_children().iter().map(shape).collect();
            format!("({} {})", node.label(), children.join(" "))
        }
    }
}

fn value_shape(source: &str) -> String {
    let tree = parse_source(source).unwrap();
    shape(&tree.get_children()[2])
}

#[test]
fn test_parse_single_identifier() {
    let tree = parse_source("x := a;").unwrap();

    assert_eq!(tree.get_kind(), NodeKind::Statement);
    assert_eq!(tree.get_children().len(), 4);
    assert_eq!(shape(&tree), "(S x := (E a) ;)");
}

#[test]
fn test_statement_children() {
    let tree = parse_source("result := true;").unwrap();
    let children = tree.get_children();

    assert_eq!(children[0].get_kind(), NodeKind::Operand);
    assert_eq!(children[0].get_children()[0].get_token().map(|t| t.kind), Some(TokenKind::Ident));
    assert_eq!(children[1].get_token().map(|t| t.kind), Some(TokenKind::Assign));
    assert_eq!(children[2].get_kind(), NodeKind::Atom);
    assert_eq!(children[3].get_token().map(|t| t.kind), Some(TokenKind::Semicolon));
}

#[test]
fn test_parse_operand_kinds() {
    assert_eq!(value_shape("x := false;"), "(E false)");
    assert_eq!(value_shape("x := 1a3;"), "(E 1a3)");
    assert_eq!(value_shape("x := MCM;"), "(E MCM)");
    assert_eq!(value_shape("x := y_2;"), "(E y_2)");
}

#[test]
fn test_disjunction_is_left_associative() {
    assert_eq!(
        value_shape("x := a or b or c;"),
        "(F (F (E a) or (E b)) or (E c))"
    );
}

#[test]
fn test_or_and_xor_share_precedence() {
    assert_eq!(
        value_shape("x := a xor b or c;"),
        "(F (F (E a) xor (E b)) or (E c))"
    );
    assert_eq!(
        value_shape("x := a or b xor c;"),
        "(F (F (E a) or (E b)) xor (E c))"
    );
}

#[test]
fn test_conjunction_is_left_associative() {
    assert_eq!(
        value_shape("x := a and b and c;"),
        "(T (T (E a) and (E b)) and (E c))"
    );
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        value_shape("x := a and b or c;"),
        "(F (T (E a) and (E b)) or (E c))"
    );
    assert_eq!(
        value_shape("x := a or b and c;"),
        "(F (E a) or (T (E b) and (E c)))"
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        value_shape("x := (a or b) and c;"),
        "(T (E ( (F (E a) or (E b)) )) and (E c))"
    );
}

#[test]
fn test_negation() {
    assert_eq!(value_shape("x := not (a);"), "(E not ( (E a) ))");
    assert_eq!(
        value_shape("x := not (not (true));"),
        "(E not ( (E not ( (E true) )) ))"
    );
}

#[test]
fn test_nested_scenario() {
    assert_eq!(
        value_shape("x := a and (b or not (c));"),
        "(T (E a) and (E ( (F (E b) or (E not ( (E c) ))) )))"
    );
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let tree = parse_source("x := a; y := b;").unwrap();
    assert_eq!(shape(&tree), "(S x := (E a) ;)");
}

#[test]
fn test_parser_cursor() {
    let tokens = tokenize("x := a or b;".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("shell".to_string()));

    assert!(parser.peek(TokenKind::Ident));
    assert!(!parser.peek(TokenKind::Assign));
    assert_eq!(parser.cursor(), 0);

    let leaf = parser.match_token(TokenKind::Ident).unwrap();
    assert_eq!(leaf.label(), "x");
    assert_eq!(parser.cursor(), 1);

    assert!(parser.match_token(TokenKind::Semicolon).is_err());
    assert_eq!(parser.cursor(), 1);
}

#[test]
fn test_only_operators_have_binding_power() {
    let tokens = tokenize("( not a true or IV xor 0 and".to_string(), None).unwrap();
    let count = tokens.len();
    let mut parser = Parser::new(tokens, Rc::new("shell".to_string()));

    for _ in 0..count {
        let kind = parser.current_token_kind().unwrap();
        let expected = match kind {
            TokenKind::OpOr | TokenKind::OpXor => Some(BindingPower::Disjunction),
            TokenKind::OpAnd => Some(BindingPower::Conjunction),
            _ => None,
        };
        assert_eq!(parser.current_binding_power(), expected, "{}", kind);
        parser.match_token(kind).unwrap();
    }
    assert_eq!(parser.current_binding_power(), None);
}

#[test]
fn test_peek_past_end() {
    let parser = Parser::new(vec![], Rc::new("shell".to_string()));

    assert!(parser.at_end());
    assert!(!parser.peek(TokenKind::Ident));
    assert_eq!(parser.found(), END_OF_INPUT);
}

#[test]
fn test_empty_input() {
    let error = parse_source("").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Ident,
            found: END_OF_INPUT.to_string(),
        }
    );
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_missing_expression() {
    let error = parse_source("x := ;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedExpression {
            found: "SEMICOLON".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source("x := a").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: END_OF_INPUT.to_string(),
        }
    );
    // End of the last token.
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_missing_assignment() {
    let error = parse_source("x a;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            found: "IDENT".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_target_must_be_identifier() {
    let error = parse_source("IV := a;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Ident,
            found: "ROMAN".to_string(),
        }
    );
}

#[test]
fn test_unclosed_group() {
    let error = parse_source("x := (a or b;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            found: "SEMICOLON".to_string(),
        }
    );
}

#[test]
fn test_negation_requires_parenthesis() {
    let error = parse_source("x := not a;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::LParen,
            found: "IDENT".to_string(),
        }
    );
}

#[test]
fn test_dangling_operator() {
    let error = parse_source("x := a and ;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedExpression {
            found: "SEMICOLON".to_string(),
        }
    );
}

#[test]
fn test_adjacent_operands() {
    let error = parse_source("x := a b;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: "IDENT".to_string(),
        }
    );
}
