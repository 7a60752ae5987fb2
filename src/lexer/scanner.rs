//! Dispatch loop driving the number, string and tag scanners
//!
//! Every character of the source either continues the active scanner, starts
//! a new one, or is a separator. Candidates are probed in a fixed order and
//! the first one that accepts a character owns the token until it reports
//! that it is done.

use super::interner::StringInterner;
use super::number::NumberScanner;
use super::position::Position;
use super::string::StringScanner;
use super::tag::TagScanner;
use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Outcome of feeding one character to an active scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The character was consumed; keep feeding this scanner
    Continue,
    /// The scanner is finished; the character must be dispatched again
    Done,
}

/// Output shared by all scanners during a scan
#[derive(Debug, Default)]
pub struct TokenSink {
    pub(crate) tokens: Vec<Token>,
    pub(crate) interner: StringInterner,
}

impl TokenSink {
    /// Tokens emitted so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Text of the string and tag tokens emitted so far
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub(crate) fn push_number(&mut self, value: f64) {
        tracing::trace!(value, "number token");
        self.tokens.push(Token::Number(value));
    }

    pub(crate) fn push_string(&mut self, text: String) {
        tracing::trace!(text = %text, "string token");
        let id = self.interner.set(text);
        self.tokens.push(Token::String(id));
    }

    pub(crate) fn push_tag(&mut self, text: String) {
        tracing::trace!(text = %text, "tag token");
        let id = self.interner.set(text);
        self.tokens.push(Token::Tag(id));
    }
}

/// State machine recognizing one kind of token
pub trait TokenScanner {
    /// Kind of token this scanner emits
    fn kind(&self) -> TokenKind;

    /// Claims `c` as the first character of a token
    ///
    /// Returns false, leaving the scanner untouched, when `c` cannot start
    /// this kind of token.
    fn try_start(&mut self, c: char) -> bool;

    /// Feeds the next character of a claimed token
    ///
    /// `at` is the position of `c`. Errors abort the whole scan.
    fn feed(&mut self, c: char, at: Position, sink: &mut TokenSink) -> Result<Step>;

    /// Ends the token at end of input
    ///
    /// `start` is the position of the token's first character.
    fn finish(&mut self, start: Position, sink: &mut TokenSink) -> Result<()>;
}

/// Characters that separate tokens
pub fn is_separator(c: char) -> bool {
    matches!(c, '\0' | ' ' | '\t' | '\r' | '\n')
}

/// The closed set of candidate scanners
#[derive(Debug, Default)]
struct ScannerSet {
    number: NumberScanner,
    string: StringScanner,
    tag: TagScanner,
}

impl ScannerSet {
    /// Probe order; the first scanner accepting a character wins
    const PRIORITY: [TokenKind; 3] = [TokenKind::Number, TokenKind::String, TokenKind::Tag];

    fn get_mut(&mut self, kind: TokenKind) -> &mut dyn TokenScanner {
        match kind {
            TokenKind::Number => &mut self.number,
            TokenKind::String => &mut self.string,
            TokenKind::Tag => &mut self.tag,
        }
    }

    fn probe(&mut self, c: char) -> Option<TokenKind> {
        Self::PRIORITY
            .into_iter()
            .find(|&kind| self.get_mut(kind).try_start(c))
    }
}

/// Scans `source` into `sink`, stopping at the first error
///
/// Tokens emitted before a failure stay in `sink`.
pub fn scan(source: &str, sink: &mut TokenSink) -> Result<()> {
    let mut scanners = ScannerSet::default();
    let mut active: Option<(TokenKind, Position)> = None;
    let mut pos = Position::start();

    for c in source.chars() {
        if let Some((kind, _)) = active {
            match scanners.get_mut(kind).feed(c, pos, sink)? {
                Step::Continue => {
                    pos.advance(c);
                    continue;
                }
                Step::Done => active = None,
            }
        }

        if let Some(kind) = scanners.probe(c) {
            tracing::trace!(%kind, %pos, "scanner started");
            active = Some((kind, pos));
        } else if !is_separator(c) {
            return Err(Error::InvalidToken { character: c, at: pos });
        }

        pos.advance(c);
    }

    if let Some((kind, start)) = active {
        scanners.get_mut(kind).finish(start, sink)?;
    }

    Ok(())
}
