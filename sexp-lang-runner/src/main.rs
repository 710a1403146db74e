mod repl;
mod runner;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Mode {
    /// Evaluate the program and print its value
    Eval,
    /// Print the parsed syntax tree
    Ast,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t=Mode::Eval)]
    mode: Mode,
    /// Program to run, e.g. "(+ 1 2)". Starts a REPL when omitted
    source: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.source {
        None => match repl::start(cli.mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
        Some(source) => match runner::execute(&source, cli.mode) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        },
    }
}
