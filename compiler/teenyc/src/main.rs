//! Teeny command line.
//!
//! ```bash
//! teeny program.teeny                # check, stop at the first error
//! teeny program.teeny --all-errors   # check, report every syntax error
//! teeny program.teeny --tokens       # dump the token stream
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use teenyc::commands::{check_file, lex_file};

/// Tokenizer and grammar checker for Teeny programs
#[derive(Debug, Parser)]
#[command(name = "teeny", version)]
struct Cli {
    /// Source file to check
    file: PathBuf,

    /// Print the token stream instead of checking
    #[arg(long, conflicts_with = "all_errors")]
    tokens: bool,

    /// Keep checking after a syntax error and report all of them
    #[arg(long)]
    all_errors: bool,
}

fn main() -> ExitCode {
    teenyc::init_tracing();
    let cli = Cli::parse();

    if cli.tokens {
        lex_file(&cli.file)
    } else {
        check_file(&cli.file, cli.all_errors)
    }
}
