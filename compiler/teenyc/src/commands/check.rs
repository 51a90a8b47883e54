//! The default command: check a file against the grammar.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use teeny_parse::{check, check_all, CheckError};
use tracing::debug;

use super::{location, read_or_report};

/// Check `path`, printing `Parsing completed.` or every error found.
///
/// Stops at the first error unless `all_errors` is set.
pub fn check_file(path: &Path, all_errors: bool) -> ExitCode {
    let Some(source) = read_or_report(path) else {
        return ExitCode::FAILURE;
    };

    let errors = if all_errors {
        check_all(&source)
    } else {
        check(&source).err().into_iter().collect()
    };
    debug!(path = %path.display(), errors = errors.len(), "checked");

    if errors.is_empty() {
        println!("Parsing completed.");
        return ExitCode::SUCCESS;
    }
    eprint!("{}", render_errors(path, &source, &errors));
    ExitCode::FAILURE
}

/// Each error's message followed by its source location.
pub(crate) fn render_errors(path: &Path, source: &str, errors: &[CheckError]) -> String {
    let mut out = String::new();
    for err in errors {
        let _ = writeln!(out, "{err}");
        let _ = writeln!(out, "{}", location(path, source, err.span()));
    }
    out
}
