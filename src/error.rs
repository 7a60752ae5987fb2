//! Error types for the toy tokenizer

use crate::lexer::{Position, TokenKind};
use std::path::PathBuf;
use thiserror::Error;

/// Tokenizer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Source errors
    /// Script file could not be opened or read
    ///
    /// **Triggered by:** A missing path, a directory, or a permission failure
    /// **Recovery:** Construction fails outright; no token sequence exists
    #[error("can not read script! invalid path: {}: {reason}", path.display())]
    SourceUnreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// Source exceeds the configured size limit
    #[error("script is too large: {len} bytes (limit: {limit} bytes)")]
    SourceTooLarge {
        /// Size of the rejected source
        len: usize,
        /// Configured limit
        limit: usize,
    },

    // Scan errors
    /// A number literal used its decimal point twice
    ///
    /// **Triggered by:** `1.0.`, `3.1.4`
    #[error("number dot is only used once: `{literal}` at {at}")]
    DuplicateDecimalPoint {
        /// Literal text up to and including the second dot
        literal: String,
        /// Position of the second dot
        at: Position,
    },

    /// A tag contained a character outside `[A-Za-z0-9 _-]`
    ///
    /// **Triggered by:** `[toy project tes)t]`
    #[error("invalid tag character '{}' in `{tag}` at {at}", character.escape_debug())]
    InvalidTagCharacter {
        /// Offending character
        character: char,
        /// Tag text accumulated before the offending character
        tag: String,
        /// Position of the offending character
        at: Position,
    },

    /// A character that starts no token and is not a separator
    #[error("invalid token found '{}' (U+{:04X}) at {at}", character.escape_debug(), *character as u32)]
    InvalidToken {
        /// Offending character
        character: char,
        /// Position of the offending character
        at: Position,
    },

    /// Input ended in the middle of a token
    ///
    /// **Triggered by:** An opening backtick or bracket without its closing delimiter
    #[error("{kind} token not closed before end of input (opened at {at})")]
    UnterminatedToken {
        /// Kind of the unfinished token
        kind: TokenKind,
        /// Position of the opening delimiter
        at: Position,
    },

    // Lookup errors
    /// Interner index that was never assigned
    #[error("string index {index} out of range (interned: {len})")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of interned strings
        len: usize,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The scan halted; only a partial token sequence exists
    Fatal,
    /// The caller may retry with a different source or index
    Recoverable,
}

impl Error {
    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::DuplicateDecimalPoint { .. } => ErrorSeverity::Fatal,
            Error::InvalidTagCharacter { .. } => ErrorSeverity::Fatal,
            Error::InvalidToken { .. } => ErrorSeverity::Fatal,
            Error::UnterminatedToken { .. } => ErrorSeverity::Fatal,

            Error::SourceUnreadable { .. } => ErrorSeverity::Recoverable,
            Error::SourceTooLarge { .. } => ErrorSeverity::Recoverable,
            Error::OutOfRange { .. } => ErrorSeverity::Recoverable,
        }
    }

    /// Position in the stripped source where a scan error occurred
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::DuplicateDecimalPoint { at, .. }
            | Error::InvalidTagCharacter { at, .. }
            | Error::InvalidToken { at, .. }
            | Error::UnterminatedToken { at, .. } => Some(*at),
            _ => None,
        }
    }
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, Error>;
