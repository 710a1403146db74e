use sexp_lang_core::ast::Program;
use sexp_lang_interpreter::object::{EvaluationError, Value};

pub fn print_result(result: Result<Value, EvaluationError>) {
    match result {
        Ok(value) => println!("{}", value),
        Err(err) => println!("Error evaluating:\n{}", err),
    }
}

pub fn print_ast(program: &Program) {
    println!("{}", program);
}
