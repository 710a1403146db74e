mod printer;
mod reader;

use rustyline::error::ReadlineError;
use sexp_lang_interpreter::evaluator::Evaluator;

use reader::{ReadOutput, Reader};

use crate::Mode;

pub fn start(mode: Mode) -> Result<(), ReadlineError> {
    let mut reader = Reader::new()?;
    let evaluator = Evaluator::new();

    loop {
        match reader.read() {
            ReadOutput::Exit => break,
            ReadOutput::Clear => continue,
            ReadOutput::Value(program) => match mode {
                Mode::Ast => printer::print_ast(&program),
                Mode::Eval => printer::print_result(evaluator.eval_program(&program)),
            },
        }
    }
    Ok(())
}
