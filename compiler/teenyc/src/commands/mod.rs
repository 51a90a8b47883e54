//! CLI command implementations.
//!
//! Each command reads its input with [`read_file`], writes results to stdout
//! and diagnostics to stderr, and returns the process exit status.

mod check;
mod debug;

use std::io;
use std::path::Path;

use teeny_lexer::{LineOffsetTable, Span};
use thiserror::Error;

pub use check::check_file;
pub use debug::lex_file;

/// Failure to load a source file, worded for the user.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },
}

/// Read a source file from disk.
pub fn read_file(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path },
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8 { path },
            _ => ReadError::Io { path, source },
        }
    })
}

/// Read `path`, reporting failure on stderr.
fn read_or_report(path: &Path) -> Option<String> {
    match read_file(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("{err}");
            None
        }
    }
}

/// `  --> path:line:col` pointer for the start of `span`.
pub fn location(path: &Path, source: &str, span: Span) -> String {
    let table = LineOffsetTable::build(source);
    let (line, col) = table.offset_to_line_col(source, span.start);
    format!("  --> {}:{line}:{col}", path.display())
}
