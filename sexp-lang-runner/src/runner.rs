use sexp_lang_core::parser;
use sexp_lang_interpreter::evaluator::Evaluator;
use sexp_lang_interpreter::Error;

use crate::Mode;

pub fn execute(source: &str, mode: Mode) -> Result<String, Error> {
    let program = parser::parse(source)?;
    match mode {
        Mode::Ast => Ok(program.to_string()),
        Mode::Eval => Ok(Evaluator::new().eval_program(&program)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::execute;
    use crate::Mode;

    #[test]
    fn test_execute() {
        let tests = vec![
            ("   (+ 1 2 999) ", Mode::Eval, Ok("1002")),
            ("(+ 1 (+ 2 3))", Mode::Eval, Ok("6")),
            ("  (+ 1\n  (+ 2 3))", Mode::Ast, Ok("(+ 1 (+ 2 3))")),
            ("(foo 1)", Mode::Ast, Ok("(foo 1)")),
            (
                "(foo 1)",
                Mode::Eval,
                Err("Evaluation error: Unbound symbol: foo"),
            ),
            (
                ")(",
                Mode::Ast,
                Err("Parse error: unexpected ')' at offset 0: expected a list"),
            ),
        ];

        for (input, mode, expected) in tests {
            let output = execute(input, mode).map_err(|err| err.to_string());
            assert_eq!(
                output,
                expected.map(str::to_owned).map_err(str::to_owned),
                "input: {:?}",
                input
            );
        }
    }
}
