pub mod error;
mod forms;

use crate::ast::Program;
use crate::lexer::{Token, TokenKind, Tokenizer};
pub use error::{Expected, ParseError};
use forms::parse_list;

/// Lists nested deeper than this are rejected, which bounds the recursion of
/// both the parser and the evaluator.
pub const MAX_NESTING_DEPTH: usize = 512;

pub struct Parser<'a> {
    pub iter: std::iter::Peekable<Tokenizer<'a>>,
    end_of_input: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        let end_of_input = tokenizer.input().len();
        let iter = tokenizer.peekable();
        Self {
            iter,
            end_of_input,
            depth: 0,
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.iter.next_if(|token| token.kind == TokenKind::Whitespace);
    }

    pub(crate) fn unexpected(&self, expected: Expected, got: Option<Token>) -> ParseError {
        ParseError::unexpected(expected, got, self.end_of_input)
    }

    /// Parses a single top-level list surrounded by optional whitespace. The
    /// first error aborts parsing; no partial tree is returned.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.skip_whitespace();

        let list = match self.iter.next() {
            Some(Token {
                kind: TokenKind::LParen,
                start,
                ..
            }) => parse_list(self, start)?,
            token => return Err(self.unexpected(Expected::List, token)),
        };

        self.skip_whitespace();
        if let Some(token) = self.iter.next() {
            return Err(ParseError::UnexpectedToken {
                expected: Expected::EndOfInput,
                got: token,
            });
        }

        let program = Program { forms: vec![list] };
        log::debug!("parsed program: {}", program);
        Ok(program)
    }
}

pub fn parse(input: &str) -> Result<Program, ParseError> {
    Parser::new(Tokenizer::new(input)).parse_program()
}
