use crate::ast::Node;
use crate::lexer::{Token, TokenKind};

use super::error::{Expected, ParseError};
use super::{Parser, MAX_NESTING_DEPTH};

pub(crate) fn parse_form(parser: &mut Parser) -> Result<Node, ParseError> {
    match parser.iter.next() {
        Some(Token {
            kind: TokenKind::Int(literal),
            start,
            ..
        }) => parse_number(literal, start),
        Some(Token {
            kind: TokenKind::Symbol(name),
            ..
        }) => Ok(Node::Symbol(name)),
        Some(Token {
            kind: TokenKind::LParen,
            start,
            ..
        }) => parse_list(parser, start),
        token => Err(parser.unexpected(Expected::Form, token)),
    }
}

fn parse_number(literal: std::rc::Rc<str>, offset: usize) -> Result<Node, ParseError> {
    // The tokenizer only produces ascii digits, so overflow is the only way to fail
    match literal.parse::<i64>() {
        Ok(value) => Ok(Node::Number(value)),
        Err(_) => Err(ParseError::IntegerOverflow { literal, offset }),
    }
}

/// Parses the elements of a list. The opening parenthesis at `start` must
/// already have been consumed.
pub(crate) fn parse_list(parser: &mut Parser, start: usize) -> Result<Node, ParseError> {
    if parser.depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::TooDeep { offset: start });
    }

    parser.depth += 1;
    let list = parse_list_elements(parser);
    parser.depth -= 1;
    list
}

fn parse_list_elements(parser: &mut Parser) -> Result<Node, ParseError> {
    let mut elements = Vec::new();

    parser.skip_whitespace();
    loop {
        if parser
            .iter
            .next_if(|token| token.kind == TokenKind::RParen)
            .is_some()
        {
            break;
        }

        elements.push(parse_form(parser)?);

        // Forms must be separated by whitespace, but whitespace before the
        // closing parenthesis is optional
        match parser.iter.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => break,
            Some(Token {
                kind: TokenKind::Whitespace,
                ..
            }) => {}
            token => return Err(parser.unexpected(Expected::SeparatorOrClose, token)),
        }
    }

    Ok(Node::List(elements))
}
