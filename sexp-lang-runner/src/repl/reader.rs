use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sexp_lang_core::ast::Program;
use sexp_lang_core::parser;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(Program),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }

    pub fn read(&mut self) -> ReadOutput {
        let readline = self.rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::Clear; // Clear line
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::Exit;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                return ReadOutput::Exit;
            }
            Ok(line) => line,
        };

        if line.trim().is_empty() {
            return ReadOutput::Clear;
        }
        if let Err(err) = self.rl.add_history_entry(line.as_str()) {
            log::warn!("could not add history entry: {}", err);
        }

        match parser::parse(&line) {
            Ok(program) => ReadOutput::Value(program),
            Err(error) => {
                println!("Parse error: {}", error);
                ReadOutput::Clear
            }
        }
    }
}
