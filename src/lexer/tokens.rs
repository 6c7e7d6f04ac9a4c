use std::fmt::Display;

/// Every kind a [`Token`] can carry, keywords included.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,

    BeDefinedAs, // :=
    ThinArrow,   // ->
    Colon,
    Comma,
    Dot,

    LeftParentheses,
    RightParentheses,
    LeftBracket,
    RightBracket,

    NumericNegation, // -
    LogicalNegation, // !
    Exponentiation,  // **
    MultipliedBy,
    DividedBy,
    Modulus,
    Plus,

    GreaterThan,
    GreaterThanEquals,
    LessThan,
    LessThanEquals,
    Equals,
    NotEquals,

    // Reserved
    NumberType,
    BooleanType,
    StringType,
    ArrayType,
    FunctionType,
    Let,
    True,
    False,
    And,
    Or,
    If,
    Then,
    Else,
    End,
}

impl TokenKind {
    /// Canonical SCREAMING_CASE name, also used as the regex group name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::BeDefinedAs => "BE_DEFINED_AS",
            TokenKind::ThinArrow => "THIN_ARROW",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::LeftParentheses => "LEFT_PARENTHESES",
            TokenKind::RightParentheses => "RIGHT_PARENTHESES",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::NumericNegation => "NUMERIC_NEGATION",
            TokenKind::LogicalNegation => "LOGICAL_NEGATION",
            TokenKind::Exponentiation => "EXPONENTIATION",
            TokenKind::MultipliedBy => "MULTIPLIED_BY",
            TokenKind::DividedBy => "DIVIDED_BY",
            TokenKind::Modulus => "MODULUS",
            TokenKind::Plus => "PLUS",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterThanEquals => "GREATER_THAN_EQUALS",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessThanEquals => "LESS_THAN_EQUALS",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::NumberType => "NUMBER_TYPE",
            TokenKind::BooleanType => "BOOLEAN_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::ArrayType => "ARRAY_TYPE",
            TokenKind::FunctionType => "FUNCTION_TYPE",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
        }
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(kind, _)| kind == self)
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::NumberType
                | TokenKind::BooleanType
                | TokenKind::StringType
                | TokenKind::ArrayType
                | TokenKind::FunctionType
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a single alternative of the combined matcher classifies its match as.
///
/// `Whitespace` and `AnythingElse` are sentinels: the scanner drops the
/// former and turns the latter into a lexical error, so neither ever shows
/// up in a token sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PatternKind {
    Token(TokenKind),
    Whitespace,
    AnythingElse,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Token(kind) => kind.name(),
            PatternKind::Whitespace => "WHITESPACE",
            PatternKind::AnythingElse => "ANYTHING_ELSE",
        }
    }
}

impl Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The l1 token table. Order is priority: at a given offset the first entry
/// that matches wins, so every multi-character operator sits above the
/// shorter operator it starts with. No pattern may match the empty string.
pub const TOKEN_PATTERNS: &[(PatternKind, &str)] = &[
    (PatternKind::Token(TokenKind::Identifier), r"[a-zA-Z_][a-zA-Z_0-9]*"),
    (PatternKind::Token(TokenKind::BeDefinedAs), r":="),
    (PatternKind::Token(TokenKind::LeftParentheses), r"\("),
    (PatternKind::Token(TokenKind::RightParentheses), r"\)"),
    (PatternKind::Token(TokenKind::LeftBracket), r"\["),
    (PatternKind::Token(TokenKind::RightBracket), r"\]"),
    (PatternKind::Token(TokenKind::Number), r"[0-9]+(?:\.[0-9]+)?"),
    (PatternKind::Token(TokenKind::ThinArrow), r"->"),
    (PatternKind::Token(TokenKind::NumericNegation), r"-"),
    (PatternKind::Token(TokenKind::NotEquals), r"!="),
    (PatternKind::Token(TokenKind::LogicalNegation), r"!"),
    (PatternKind::Token(TokenKind::Exponentiation), r"\*\*"),
    (PatternKind::Token(TokenKind::MultipliedBy), r"\*"),
    (PatternKind::Token(TokenKind::DividedBy), r"/"),
    (PatternKind::Token(TokenKind::Modulus), r"%"),
    (PatternKind::Token(TokenKind::Plus), r"\+"),
    (PatternKind::Token(TokenKind::GreaterThanEquals), r">="),
    (PatternKind::Token(TokenKind::GreaterThan), r">"),
    (PatternKind::Token(TokenKind::LessThanEquals), r"<="),
    (PatternKind::Token(TokenKind::LessThan), r"<"),
    (PatternKind::Token(TokenKind::Equals), r"="),
    (PatternKind::Token(TokenKind::String), r#""(?:\\"|[^"])*""#),
    (PatternKind::Token(TokenKind::Comma), r","),
    (PatternKind::Token(TokenKind::Colon), r":"),
    (PatternKind::Token(TokenKind::Dot), r"\."),
    (PatternKind::Whitespace, WHITESPACE),
    (PatternKind::AnythingElse, ANYTHING_ELSE),
];

/// ECMAScript whitespace and line terminators, byte-order mark included.
/// Unicode `\s` differs (it takes U+0085 and leaves out U+FEFF).
const WHITESPACE: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";
const ANYTHING_ELSE: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

/// Reserved words. Each lexeme is identifier-shaped and only becomes a
/// keyword through lookup after an IDENTIFIER match.
pub const KEYWORDS: &[(TokenKind, &str)] = &[
    (TokenKind::NumberType, "Number"),
    (TokenKind::BooleanType, "Boolean"),
    (TokenKind::StringType, "String"),
    (TokenKind::ArrayType, "Array"),
    (TokenKind::FunctionType, "Function"),
    (TokenKind::Let, "Let"),
    (TokenKind::True, "True"),
    (TokenKind::False, "False"),
    (TokenKind::And, "And"),
    (TokenKind::Or, "Or"),
    (TokenKind::If, "If"),
    (TokenKind::Then, "Then"),
    (TokenKind::Else, "Else"),
    (TokenKind::End, "End"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.line, self.kind, self.lexeme)
    }
}
