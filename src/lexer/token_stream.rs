//! Tokenized view of a toy script
//!
//! A [`TokenStream`] scans its whole source while it is being constructed and
//! is read-only afterwards. Scan failures do not fail construction: they are
//! kept as a diagnostic next to the tokens produced before the failure.
//! Only problems reading the source itself are returned as errors.

use super::comments::strip_comments;
use super::interner::StringInterner;
use super::scanner::{scan, TokenSink};
use super::token::{Token, TokenView};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how a source is prepared and scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Remove `//` and `/* */` comments before scanning (default: true)
    pub strip_comments: bool,
    /// Reject sources larger than this many bytes (default: unlimited)
    pub max_source_bytes: Option<usize>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            strip_comments: true,
            max_source_bytes: None,
        }
    }
}

impl TokenizerOptions {
    fn check_size(&self, len: usize) -> Result<()> {
        match self.max_source_bytes {
            Some(limit) if len > limit => Err(Error::SourceTooLarge { len, limit }),
            _ => Ok(()),
        }
    }
}

/// Tokens of one script together with the strings they reference
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// Source text after comment stripping
    plain: String,
    /// Tokens in source order
    tokens: Vec<Token>,
    /// Text of string and tag tokens
    interner: StringInterner,
    /// First scan failure, if any
    error: Option<Error>,
    /// Rendered form of `error`
    error_reason: String,
}

impl TokenStream {
    /// Reads and tokenizes the script at `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_options(path, &TokenizerOptions::default())
    }

    /// Reads and tokenizes the script at `path` with explicit options
    pub fn from_path_with_options(path: impl AsRef<Path>, options: &TokenizerOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes_with_options(bytes, options)
    }

    /// Tokenizes an already loaded script
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD, which is only
    /// accepted inside strings.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::tokenize(decode(bytes), &TokenizerOptions::default())
    }

    /// Tokenizes an already loaded script with explicit options
    pub fn from_bytes_with_options(bytes: Vec<u8>, options: &TokenizerOptions) -> Result<Self> {
        options.check_size(bytes.len())?;
        Ok(Self::tokenize(decode(bytes), options))
    }

    /// Tokenizes script text
    pub fn from_source(source: &str) -> Self {
        Self::tokenize(source.to_owned(), &TokenizerOptions::default())
    }

    /// Tokenizes script text with explicit options
    pub fn from_source_with_options(source: &str, options: &TokenizerOptions) -> Result<Self> {
        options.check_size(source.len())?;
        Ok(Self::tokenize(source.to_owned(), options))
    }

    fn tokenize(source: String, options: &TokenizerOptions) -> Self {
        let plain = if options.strip_comments {
            strip_comments(&source)
        } else {
            source
        };
        tracing::debug!(bytes = plain.len(), "tokenizing script");

        let mut sink = TokenSink::default();
        let error = match scan(&plain, &mut sink) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, tokens = sink.tokens.len(), "scan halted");
                Some(e)
            }
        };
        tracing::debug!(tokens = sink.tokens.len(), strings = sink.interner.len(), "tokenized script");

        let error_reason = error.as_ref().map(ToString::to_string).unwrap_or_default();
        let TokenSink { tokens, interner } = sink;

        TokenStream {
            plain,
            tokens,
            interner,
            error,
            error_reason,
        }
    }

    /// Tokens in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates the tokens together with their resolved text
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tokens: self.tokens.iter(),
            interner: &self.interner,
        }
    }

    /// Number of tokens produced
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true when no tokens were produced
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Strings referenced by string and tag tokens
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Source text after comment stripping
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Human-readable reason the scan stopped early, if it did
    pub fn error_reason(&self) -> Option<&str> {
        if self.error_reason.is_empty() {
            None
        } else {
            Some(&self.error_reason)
        }
    }

    /// The error that stopped the scan, if any
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns true when the whole source was tokenized
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Iterator over the tokens of a [`TokenStream`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tokens: std::slice::Iter<'a, Token>,
    interner: &'a StringInterner,
}

impl<'a> Iterator for Iter<'a> {
    type Item = TokenView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let interner = self.interner;
        self.tokens.next().map(|t| TokenView::new(t, interner))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let interner = self.interner;
        self.tokens.next_back().map(|t| TokenView::new(t, interner))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = TokenView<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
