use std::collections::HashMap;

use regex::{Captures, Match, Regex};

use crate::errors::errors::{Error, ErrorImpl};

use super::tokens::{PatternKind, TokenKind, KEYWORDS, TOKEN_PATTERNS};

/// A compiled token vocabulary: the ordered pattern table folded into one
/// alternation of named groups, plus the keyword table.
///
/// Built once and then only read, so one value can back any number of scans,
/// including concurrent ones.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    matcher: Regex,
    kinds: Vec<PatternKind>,
    keywords: HashMap<String, TokenKind>,
}

impl Vocabulary {
    /// Compiles `patterns` in the given order and inverts `keywords` into a
    /// lookup table.
    ///
    /// Patterns must never match the empty string; this is a property of the
    /// table and is not re-checked while scanning.
    pub fn new(
        patterns: &[(PatternKind, &str)],
        keywords: &[(TokenKind, &str)],
    ) -> Result<Vocabulary, Error> {
        for required in [
            PatternKind::Token(TokenKind::Identifier),
            PatternKind::Whitespace,
            PatternKind::AnythingElse,
        ] {
            if !patterns.iter().any(|(kind, _)| *kind == required) {
                return Err(Error::detached(ErrorImpl::MissingPattern {
                    kind: required.name().to_string(),
                }));
            }
        }

        let mut alternatives = Vec::with_capacity(patterns.len());
        for (kind, pattern) in patterns {
            Regex::new(pattern).map_err(|err| {
                Error::detached(ErrorImpl::InvalidPattern {
                    kind: kind.name().to_string(),
                    message: err.to_string(),
                })
            })?;
            alternatives.push(format!("(?P<{}>{})", kind.name(), pattern));
        }

        let matcher = Regex::new(&alternatives.join("|")).map_err(|err| {
            Error::detached(ErrorImpl::InvalidPattern {
                kind: String::from("<combined>"),
                message: err.to_string(),
            })
        })?;

        let identifier = patterns
            .iter()
            .find(|(kind, _)| *kind == PatternKind::Token(TokenKind::Identifier))
            .map(|(_, pattern)| format!("^(?:{})$", pattern))
            .unwrap_or_default();
        let identifier = Regex::new(&identifier).map_err(|err| {
            Error::detached(ErrorImpl::InvalidPattern {
                kind: TokenKind::Identifier.name().to_string(),
                message: err.to_string(),
            })
        })?;

        let mut lookup = HashMap::with_capacity(keywords.len());
        for (kind, lexeme) in keywords {
            if !identifier.is_match(lexeme) {
                return Err(Error::detached(ErrorImpl::KeywordNotIdentifier {
                    lexeme: lexeme.to_string(),
                }));
            }
            lookup.insert(lexeme.to_string(), *kind);
        }

        Ok(Vocabulary {
            matcher,
            kinds: patterns.iter().map(|(kind, _)| *kind).collect(),
            keywords: lookup,
        })
    }

    /// The l1 vocabulary.
    pub fn standard() -> Result<Vocabulary, Error> {
        Vocabulary::new(TOKEN_PATTERNS, KEYWORDS)
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    pub fn kinds(&self) -> &[PatternKind] {
        &self.kinds
    }

    /// Names the single pattern that produced `captures`, along with the
    /// whole match.
    pub fn classify<'h>(
        &self,
        captures: &Captures<'h>,
    ) -> Result<(PatternKind, Match<'h>), ErrorImpl> {
        let whole = captures.get(0);
        let text = whole.map(|m| m.as_str().to_string()).unwrap_or_default();
        let offset = whole.map(|m| m.start()).unwrap_or_default();

        let mut matched = self
            .kinds
            .iter()
            .filter(|kind| captures.name(kind.name()).is_some());

        match (matched.next(), matched.next(), whole) {
            (Some(kind), None, Some(whole)) => Ok((*kind, whole)),
            (None, _, _) | (Some(_), None, None) => {
                Err(ErrorImpl::UnclassifiedMatch { text, offset })
            }
            (Some(first), Some(second), _) => {
                let mut kinds = vec![first.name().to_string(), second.name().to_string()];
                kinds.extend(matched.map(|kind| kind.name().to_string()));
                Err(ErrorImpl::AmbiguousMatch {
                    text,
                    offset,
                    kinds,
                })
            }
        }
    }

    /// Keyword promotion for an identifier-shaped lexeme.
    pub fn resolve_identifier(&self, lexeme: &str) -> TokenKind {
        self.keywords
            .get(lexeme)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }
}
