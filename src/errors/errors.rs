use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Whether an error comes from the scanned text or from a broken vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// An error that is not tied to any place in the source text.
    pub fn detached(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn class(&self) -> ErrorClass {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { .. } => ErrorClass::Lexical,
            ErrorImpl::UnclassifiedMatch { .. }
            | ErrorImpl::AmbiguousMatch { .. }
            | ErrorImpl::InvalidPattern { .. }
            | ErrorImpl::MissingPattern { .. }
            | ErrorImpl::KeywordNotIdentifier { .. } => ErrorClass::Internal,
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.class() == ErrorClass::Lexical
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ErrorImpl::UnclassifiedMatch { .. } => "UnclassifiedMatch",
            ErrorImpl::AmbiguousMatch { .. } => "AmbiguousMatch",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::MissingPattern { .. } => "MissingPattern",
            ErrorImpl::KeywordNotIdentifier { .. } => "KeywordNotIdentifier",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { text } => ErrorTip::Suggestion(format!(
                "Unexpected symbol: `{}` at line {}",
                text, self.position.line
            )),
            ErrorImpl::UnclassifiedMatch { .. } => ErrorTip::Suggestion(String::from(
                "A match was produced by no token pattern, check the vocabulary",
            )),
            ErrorImpl::AmbiguousMatch { kinds, .. } => ErrorTip::Suggestion(format!(
                "Patterns {} overlap, only one may match",
                kinds.join(", ")
            )),
            ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
            ErrorImpl::MissingPattern { kind } => {
                ErrorTip::Suggestion(format!("Add a pattern for `{}` to the vocabulary", kind))
            }
            ErrorImpl::KeywordNotIdentifier { lexeme } => ErrorTip::Suggestion(format!(
                "Keyword `{}` must be spelled like an identifier",
                lexeme
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.is_null() {
            write!(f, "{}", self.internal_error)
        } else {
            write!(f, "line {}: {}", self.position.line, self.internal_error)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected symbol: {text:?}")]
    UnexpectedSymbol { text: String },
    #[error("match {text:?} at offset {offset} has no token kind")]
    UnclassifiedMatch { text: String, offset: usize },
    #[error("match {text:?} at offset {offset} has several token kinds: {kinds:?}")]
    AmbiguousMatch {
        text: String,
        offset: usize,
        kinds: Vec<String>,
    },
    #[error("invalid pattern for {kind}: {message}")]
    InvalidPattern { kind: String, message: String },
    #[error("vocabulary has no {kind} pattern")]
    MissingPattern { kind: String },
    #[error("keyword {lexeme:?} does not match the identifier pattern")]
    KeywordNotIdentifier { lexeme: String },
}
