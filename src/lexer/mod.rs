//! Lexical analysis for toy scripts
//!
//! Converts script text into a flat sequence of number, string and tag tokens.

mod comments;
mod interner;
mod number;
mod position;
mod scanner;
mod string;
mod tag;
mod token;
mod token_stream;

pub use comments::strip_comments;
pub use interner::{StringId, StringInterner};
pub use number::NumberScanner;
pub use position::Position;
pub use scanner::{is_separator, scan, Step, TokenScanner, TokenSink};
pub use string::StringScanner;
pub use tag::{is_tag_char, TagScanner};
pub use token::{Token, TokenKind, TokenValue, TokenView};
pub use token_stream::{Iter, TokenStream, TokenizerOptions};
