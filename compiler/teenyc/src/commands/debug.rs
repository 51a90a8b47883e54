//! Token dump.

use std::path::Path;
use std::process::ExitCode;

use teeny_lexer::lex;
use teeny_parse::CheckError;

use super::{location, read_or_report};

/// Print one line per token of `path`, through EOF.
pub fn lex_file(path: &Path) -> ExitCode {
    let Some(source) = read_or_report(path) else {
        return ExitCode::FAILURE;
    };

    match lex(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let span = err.span;
            eprintln!("{}", CheckError::from(err));
            eprintln!("{}", location(path, &source, span));
            ExitCode::FAILURE
        }
    }
}
