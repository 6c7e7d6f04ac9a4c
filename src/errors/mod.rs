//! Error types for the lexer.
//!
//! - `Error` pairs a failure with its position in the source
//! - `ErrorImpl` lists every failure, lexical and internal
//! - `ErrorClass` tells user-facing lexical errors apart from vocabulary defects
//! - `ErrorTip` carries a human readable suggestion

pub mod errors;

#[cfg(test)]
mod tests;
