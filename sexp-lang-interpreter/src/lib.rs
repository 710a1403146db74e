pub mod builtins;
pub mod evaluator;
pub mod object;
pub mod symbol_table;

use sexp_lang_core::parser::{self, ParseError};
use thiserror::Error;

use evaluator::Evaluator;
use object::{EvaluationError, Value};

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Parses `input` and evaluates it with the default built-in table.
pub fn run(input: &str) -> Result<Value, Error> {
    let program = parser::parse(input)?;
    Ok(Evaluator::new().eval_program(&program)?)
}
