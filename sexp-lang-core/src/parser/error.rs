use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at offset {offset}: expected {expected}")]
    PrematureEndOfInput { expected: Expected, offset: usize },
    #[error("unexpected {} at offset {}: expected {}", .got.kind, .got.start, .expected)]
    UnexpectedToken { expected: Expected, got: Token },
    #[error("integer literal {literal} at offset {offset} does not fit in 64 bits")]
    IntegerOverflow { literal: Rc<str>, offset: usize },
    #[error("list at offset {offset} is nested more than {} levels deep", super::MAX_NESTING_DEPTH)]
    TooDeep { offset: usize },
}

#[derive(Debug, PartialEq)]
pub enum Expected {
    List,
    Form,
    SeparatorOrClose,
    EndOfInput,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::List => write!(f, "a list"),
            Expected::Form => write!(f, "a number, symbol or list"),
            Expected::SeparatorOrClose => write!(f, "whitespace or ')'"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl ParseError {
    /// `end_of_input` is reported when there is no token left.
    pub fn unexpected(expected: Expected, got: Option<Token>, end_of_input: usize) -> ParseError {
        match got {
            Some(got) => ParseError::UnexpectedToken { expected, got },
            None => ParseError::PrematureEndOfInput {
                expected,
                offset: end_of_input,
            },
        }
    }

    /// Byte offset into the input where parsing failed.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::PrematureEndOfInput { offset, .. } => *offset,
            ParseError::UnexpectedToken { got, .. } => got.start,
            ParseError::IntegerOverflow { offset, .. } => *offset,
            ParseError::TooDeep { offset } => *offset,
        }
    }
}
