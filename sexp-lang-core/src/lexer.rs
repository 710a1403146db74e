use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Illegal(Rc<str>),
    Int(Rc<str>),
    Symbol(Rc<str>),
    Whitespace,
    LParen,
    RParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Illegal(text) => write!(f, "illegal character '{}'", text),
            TokenKind::Int(text) => write!(f, "integer {}", text),
            TokenKind::Symbol(text) => write!(f, "symbol {}", text),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
        }
    }
}

/// `start` and `end` are byte offsets into the input, `end` exclusive.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

pub fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(
            ch,
            '-' | '+' | '!' | '>' | '<' | '?' | '$' | '@' | '*' | '`' | '±' | '^' | '§' | '/' | '\\'
        )
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn read_while(&mut self, start: usize, predicate: fn(char) -> bool) -> (&'a str, usize) {
        while self.iter.next_if(|(_, ch)| predicate(*ch)).is_some() {}

        let end = self.next_idx();
        (&self.input[start..end], end)
    }

    fn read_symbol(&mut self, start: usize) -> Token {
        let (text, end) = self.read_while(start, is_symbol_char);
        Token {
            kind: TokenKind::Symbol(text.into()),
            start,
            end,
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        let (text, end) = self.read_while(start, |ch| ch.is_ascii_digit());
        Token {
            kind: TokenKind::Int(text.into()),
            start,
            end,
        }
    }

    fn read_whitespace(&mut self, start: usize) -> Token {
        let (_, end) = self.read_while(start, is_whitespace);
        Token {
            kind: TokenKind::Whitespace,
            start,
            end,
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (idx, ch) = self.iter.next()?;
        let tok = match ch {
            '(' => Token {
                kind: TokenKind::LParen,
                start: idx,
                end: self.next_idx(),
            },
            ')' => Token {
                kind: TokenKind::RParen,
                start: idx,
                end: self.next_idx(),
            },
            c if is_whitespace(c) => self.read_whitespace(idx),
            c if c.is_ascii_digit() => self.read_number(idx),
            c if is_symbol_char(c) => self.read_symbol(idx),
            _ => Token {
                kind: TokenKind::Illegal(ch.to_string().into()),
                start: idx,
                end: self.next_idx(),
            },
        };
        Some(tok)
    }
}
