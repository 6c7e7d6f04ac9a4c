#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use crate::lexer::lexer::{tokenize, tokenize_with, Scanner};
pub use crate::lexer::tokens::{Token, TokenKind};
pub use crate::lexer::vocabulary::Vocabulary;

/// Where something happened in the source: a byte offset and its 1-based line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
}

impl Position {
    /// Position for errors that do not point into any source text.
    pub fn null() -> Self {
        Position { offset: 0, line: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

/// Finds the line containing `offset`: its 1-based number, its text
/// (newline included) and the offset's column within it.
pub fn get_line_at_offset(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((index + 1, line.to_string(), offset - start));
        }

        start = end;
    }

    None
}

/// Formats `error` as a diagnostic pointing at the offending text:
///
/// ```text
/// Error: UnexpectedSymbol (Unexpected symbol: `@` at line 1)
/// -> sample.l1
///   |
/// 1 | Let x := @
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file_name);

    let position = error.get_position();
    if position.is_null() {
        let _ = writeln!(out, "{}", error);
        return out;
    }

    let Some((line, line_text, line_pos)) = get_line_at_offset(source, position.offset) else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_get_line_at_offset() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_offset(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_offset(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_offset(source, source.len()).is_none());
    }

    #[test]
    fn test_render_lexical_error() {
        let source = "Let x := 1.\nLet y := @\n";
        let error = Error::new(
            ErrorImpl::UnexpectedSymbol {
                text: "@".to_string(),
            },
            Position { offset: 21, line: 2 },
        );

        let rendered = render_error(&error, source, "sample.l1");
        let expected = "Error: UnexpectedSymbol (Unexpected symbol: `@` at line 2)\n\
                        -> sample.l1\n  \
                        |\n\
                        2 | Let y := @\n  \
                        | ---------^\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_strips_indentation() {
        let source = "Let f :=\n    1 # 2\n";
        let error = Error::new(
            ErrorImpl::UnexpectedSymbol {
                text: "#".to_string(),
            },
            Position { offset: 15, line: 2 },
        );

        let rendered = render_error(&error, source, "indent.l1");
        assert!(rendered.contains("2 | 1 # 2\n"));
        assert!(rendered.ends_with("  | --^\n"));
    }

    #[test]
    fn test_render_caret_counts_characters() {
        let source = "Let \u{fc} := @";
        let error = Error::new(
            ErrorImpl::UnexpectedSymbol {
                text: "@".to_string(),
            },
            Position { offset: 10, line: 1 },
        );

        let rendered = render_error(&error, source, "umlaut.l1");
        assert!(rendered.contains("1 | Let \u{fc} := @\n"));
        assert!(rendered.ends_with("  | ---------^\n"));
    }

    #[test]
    fn test_render_detached_error() {
        let error = Error::detached(ErrorImpl::KeywordNotIdentifier {
            lexeme: "End!".to_string(),
        });

        let rendered = render_error(&error, "", "vocabulary");
        assert!(rendered.starts_with("Error: KeywordNotIdentifier ("));
        assert!(rendered.ends_with("keyword \"End!\" does not match the identifier pattern\n"));
        assert!(!rendered.contains('^'));
    }

    #[test]
    fn test_null_position() {
        assert!(Position::null().is_null());
        assert!(!Position { offset: 0, line: 1 }.is_null());
    }
}
