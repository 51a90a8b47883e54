//! Parser tests.
//!
//! - `parser`: statement rules, lookahead window, fail-fast error reporting
//! - `logging`: what the parser traces
//! - `properties`: determinism and agreement between checking modes
