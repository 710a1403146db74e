use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    Integer(i64),
    Symbol(Rc<str>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueKind {
    Integer,
    Symbol,
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(name.into())
    }

    pub fn as_integer(&self) -> Result<i64, EvaluationError> {
        match self {
            Value::Integer(value) => Ok(*value),
            _ => Err(EvaluationError::TypeMismatch {
                expected: ValueKind::Integer,
                got: self.clone(),
            }),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Symbol(name) => write!(f, "{}", name),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "Integer"),
            ValueKind::Symbol => write!(f, "Symbol"),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Unbound symbol: {0}")]
    UnboundSymbol(Rc<str>),
    #[error("Type mismatch: expected {expected}, got {got:?}")]
    TypeMismatch { expected: ValueKind, got: Value },
    #[error("Cannot apply an empty list")]
    EmptyList,
    #[error("Program has no forms to evaluate")]
    EmptyProgram,
    #[error("Integer overflow in builtin function {function}")]
    IntegerOverflow { function: Rc<str> },
}
