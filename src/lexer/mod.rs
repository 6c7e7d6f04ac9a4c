//! Lexical analysis for l1.
//!
//! Converts source text into a sequence of line-annotated tokens:
//!
//! - Token kinds and the priority-ordered pattern table (`tokens`)
//! - The compiled matcher and keyword lookup (`vocabulary`)
//! - Offset to line conversion (`line_tracker`)
//! - The scanning loop and error reporting (`lexer`)

pub mod lexer;
pub mod line_tracker;
pub mod tokens;
pub mod vocabulary;
