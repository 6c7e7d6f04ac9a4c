//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorClass, ErrorImpl, ErrorTip};
use crate::Position;

fn at_line(line: usize) -> Position {
    Position { offset: 0, line }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            text: "@".to_string(),
        },
        Position { offset: 10, line: 3 },
    );

    assert_eq!(error.get_error_name(), "UnexpectedSymbol");
    assert_eq!(error.get_position().offset, 10);
    assert_eq!(error.line(), 3);
}

#[test]
fn test_lexical_and_internal_are_distinct() {
    let lexical = Error::new(
        ErrorImpl::UnexpectedSymbol {
            text: "@".to_string(),
        },
        at_line(1),
    );
    let ambiguous = Error::new(
        ErrorImpl::AmbiguousMatch {
            text: ">".to_string(),
            offset: 0,
            kinds: vec!["GREATER_THAN".to_string(), "ANYTHING_ELSE".to_string()],
        },
        at_line(1),
    );
    let unclassified = Error::new(
        ErrorImpl::UnclassifiedMatch {
            text: ">".to_string(),
            offset: 0,
        },
        at_line(1),
    );

    assert_eq!(lexical.class(), ErrorClass::Lexical);
    assert_eq!(ambiguous.class(), ErrorClass::Internal);
    assert_eq!(unclassified.class(), ErrorClass::Internal);
    assert!(lexical.is_lexical());
    assert!(!ambiguous.is_lexical());
}

#[test]
fn test_display_includes_line() {
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            text: "@".to_string(),
        },
        at_line(4),
    );

    assert_eq!(error.to_string(), "line 4: unexpected symbol: \"@\"");
}

#[test]
fn test_display_detached() {
    let error = Error::detached(ErrorImpl::MissingPattern {
        kind: "WHITESPACE".to_string(),
    });

    assert!(error.get_position().is_null());
    assert_eq!(error.to_string(), "vocabulary has no WHITESPACE pattern");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            text: "#".to_string(),
        },
        at_line(7),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected symbol: `#` at line 7"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_ambiguous_tip_names_patterns() {
    let error = Error::detached(ErrorImpl::AmbiguousMatch {
        text: "x".to_string(),
        offset: 4,
        kinds: vec!["IDENTIFIER".to_string(), "ANYTHING_ELSE".to_string()],
    });

    assert_eq!(
        error.get_tip().to_string(),
        "Patterns IDENTIFIER, ANYTHING_ELSE overlap, only one may match"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::detached(ErrorImpl::InvalidPattern {
        kind: "NUMBER".to_string(),
        message: "unclosed group".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_error_name(), "InvalidPattern");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_is_kind() {
    use std::error::Error as _;

    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            text: "@".to_string(),
        },
        at_line(1),
    );

    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "unexpected symbol: \"@\"");
}
