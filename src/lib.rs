//! # toyscript - tokenizer for toy scripts
//!
//! Toy scripts are small configuration files made of three kinds of tokens:
//!
//! - **Numbers**: `20211222`, `1.5`, `-2`
//! - **Strings**: backtick-delimited, `` `hello, world!` ``
//! - **Tags**: bracket-delimited, `[toy project test]`
//!
//! separated by whitespace. `//` and `/* */` comments are removed before
//! scanning.
//!
//! ## Quick Start
//!
//! ```rust
//! use toyscript::{TokenKind, Tokenizer};
//!
//! let script = "[version] 20211222\n[message] `hello, world!` // greeting\n";
//! let tokens = Tokenizer::from_source(script);
//!
//! assert!(tokens.error_reason().is_none());
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Tag, TokenKind::Number, TokenKind::Tag, TokenKind::String]
//! );
//! assert_eq!(tokens.iter().nth(3).unwrap().as_string(), Some("hello, world!"));
//! ```
//!
//! ## Error Handling
//!
//! Reading a script from disk can fail and returns [`Error::SourceUnreadable`].
//! Once the text is loaded, construction always succeeds: a malformed script
//! stops the scan at the first bad character and the reason is available
//! from [`TokenStream::error_reason`], alongside the tokens read before it.
//!
//! ```rust
//! use toyscript::Tokenizer;
//!
//! let tokens = Tokenizer::from_source("[test obj] 1.5 -2 1.0.");
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens.error_reason().is_some());
//! ```

/// Version of the toyscript crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{
    strip_comments, Position, StringId, StringInterner, Token, TokenKind, TokenStream, TokenValue,
    TokenView, TokenizerOptions,
};

/// Type alias for the token stream, which tokenizes its source on construction.
pub type Tokenizer = TokenStream;
