use lazy_static::lazy_static;
use tracing::{debug, error, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    line_tracker::LineTracker,
    tokens::{PatternKind, Token, TokenKind},
    vocabulary::Vocabulary,
};

lazy_static! {
    static ref STANDARD_VOCABULARY: Result<Vocabulary, Error> = Vocabulary::standard();
}

/// Scans source text against a borrowed [`Vocabulary`].
///
/// A `Scanner` holds no per-scan state and can be reused; every call to
/// [`Scanner::scan`] gets a fresh [`Lexer`] and line tracker.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Scanner<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Scanner<'v> {
        Scanner { vocabulary }
    }

    pub fn scan(&self, source: &str) -> Result<Vec<Token>, Error> {
        debug!(bytes = source.len(), "scan started");

        let mut lex = Lexer::new(source);

        for captures in self.vocabulary.matcher().captures_iter(source) {
            let (kind, whole) = match self.vocabulary.classify(&captures) {
                Ok(classified) => classified,
                Err(defect) => {
                    let offset = captures
                        .get(0)
                        .map_or(lex.lines.scanned_up_to(), |m| m.start());
                    error!(offset, "token vocabulary defect: {}", defect);
                    return Err(lex.error_at(defect, offset));
                }
            };

            match kind {
                PatternKind::Whitespace => continue,
                PatternKind::AnythingElse => {
                    let err = lex.error_at(
                        ErrorImpl::UnexpectedSymbol {
                            text: whole.as_str().to_string(),
                        },
                        whole.start(),
                    );
                    warn!(line = err.line(), "scan aborted: {}", err);
                    return Err(err);
                }
                PatternKind::Token(declared) => {
                    let kind = if declared == TokenKind::Identifier {
                        self.vocabulary.resolve_identifier(whole.as_str())
                    } else {
                        declared
                    };
                    let line = lex.lines.advance_to(whole.start());
                    lex.push(MK_TOKEN!(kind, whole.as_str().to_string(), line));
                }
            }
        }

        debug!(tokens = lex.tokens.len(), "scan finished");
        Ok(lex.tokens)
    }
}

/// State of one scan: the tokens produced so far and where the line
/// tracker stands.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    tokens: Vec<Token>,
    lines: LineTracker<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            tokens: vec![],
            lines: LineTracker::new(source),
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(line = token.line, kind = %token.kind, lexeme = %token.lexeme, "token");
        self.tokens.push(token);
    }

    fn error_at(&mut self, error_impl: ErrorImpl, offset: usize) -> Error {
        let line = self.lines.advance_to(offset);
        Error::new(error_impl, Position { offset, line })
    }
}

/// Scans `source` with `vocabulary`.
pub fn tokenize_with(vocabulary: &Vocabulary, source: &str) -> Result<Vec<Token>, Error> {
    Scanner::new(vocabulary).scan(source)
}

/// Scans `source` with the standard l1 vocabulary, compiled on first use.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let vocabulary = STANDARD_VOCABULARY.as_ref().map_err(Clone::clone)?;
    tokenize_with(vocabulary, source)
}
