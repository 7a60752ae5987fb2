use super::interner::{StringId, StringInterner};
use serde::{Deserialize, Serialize};

/// A single token from the source text
///
/// Text payloads are indices into the [`StringInterner`] owned by the
/// stream that produced the token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Number literal, e.g. `1.5` or `-2`
    Number(f64),
    /// Backtick string; the stored text excludes the backticks
    String(StringId),
    /// Bracket tag; the stored text includes the brackets
    Tag(StringId),
}

/// Discriminant of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Number literal
    Number,
    /// Backtick-delimited string
    String,
    /// Bracket-delimited tag
    Tag,
}

impl Token {
    /// Kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::Tag(_) => TokenKind::Tag,
        }
    }

    /// Numeric value, if this is a number token
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String text resolved through `interner`, if this is a string token
    pub fn as_string<'a>(&self, interner: &'a StringInterner) -> Option<&'a str> {
        match self {
            Token::String(id) => interner.get(*id).ok(),
            _ => None,
        }
    }

    /// Tag text (brackets included) resolved through `interner`, if this is a tag token
    pub fn as_tag<'a>(&self, interner: &'a StringInterner) -> Option<&'a str> {
        match self {
            Token::Tag(id) => interner.get(*id).ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Tag => write!(f, "tag"),
        }
    }
}

/// Resolved token payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TokenValue<'a> {
    /// Number literal
    Number(f64),
    /// String text without backticks
    String(&'a str),
    /// Tag text with brackets
    Tag(&'a str),
}

impl TokenValue<'_> {
    /// Kind of the underlying token
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Tag(_) => TokenKind::Tag,
        }
    }
}

impl std::fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::String(s) => write!(f, "`{}`", s),
            TokenValue::Tag(t) => write!(f, "{}", t),
        }
    }
}

/// A token paired with the interner holding its text
#[derive(Debug, Clone, Copy)]
pub struct TokenView<'a> {
    token: &'a Token,
    interner: &'a StringInterner,
}

impl<'a> TokenView<'a> {
    pub(crate) fn new(token: &'a Token, interner: &'a StringInterner) -> Self {
        TokenView { token, interner }
    }

    /// The raw token
    pub fn token(&self) -> &'a Token {
        self.token
    }

    /// Kind of the token
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// Numeric value, present only for number tokens
    pub fn as_number(&self) -> Option<f64> {
        self.token.as_number()
    }

    /// String text, present only for string tokens
    pub fn as_string(&self) -> Option<&'a str> {
        self.token.as_string(self.interner)
    }

    /// Tag text including brackets, present only for tag tokens
    pub fn as_tag(&self) -> Option<&'a str> {
        self.token.as_tag(self.interner)
    }

    /// Resolved payload
    ///
    /// Text tokens always resolve here: a stream only hands out views over
    /// its own interner, and every id it stores was returned by that interner.
    pub fn value(&self) -> TokenValue<'a> {
        match *self.token {
            Token::Number(n) => TokenValue::Number(n),
            Token::String(id) => TokenValue::String(self.interner.get(id).unwrap_or_default()),
            Token::Tag(id) => TokenValue::Tag(self.interner.get(id).unwrap_or_default()),
        }
    }
}
