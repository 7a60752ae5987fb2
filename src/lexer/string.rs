use super::position::Position;
use super::scanner::{Step, TokenScanner, TokenSink};
use super::token::TokenKind;
use crate::error::{Error, Result};

/// Scanner for backtick-delimited strings
///
/// A backslash directly before a backtick keeps the string open. The
/// backslash itself stays in the text; nothing is unescaped.
#[derive(Debug, Default)]
pub struct StringScanner {
    buffer: String,
    closed: bool,
}

impl StringScanner {
    fn clear(&mut self) {
        self.buffer.clear();
        self.closed = false;
    }

    fn is_escaped(&self) -> bool {
        self.buffer.ends_with('\\')
    }
}

impl TokenScanner for StringScanner {
    fn kind(&self) -> TokenKind {
        TokenKind::String
    }

    fn try_start(&mut self, c: char) -> bool {
        c == '`'
    }

    fn feed(&mut self, c: char, _at: Position, sink: &mut TokenSink) -> Result<Step> {
        // The character after the closing backtick belongs to the next token
        if self.closed {
            self.clear();
            return Ok(Step::Done);
        }

        if c == '`' && !self.is_escaped() {
            sink.push_string(std::mem::take(&mut self.buffer));
            self.closed = true;
            return Ok(Step::Continue);
        }

        self.buffer.push(c);
        Ok(Step::Continue)
    }

    fn finish(&mut self, start: Position, _sink: &mut TokenSink) -> Result<()> {
        let closed = self.closed;
        self.clear();
        if closed {
            Ok(())
        } else {
            Err(Error::UnterminatedToken {
                kind: self.kind(),
                at: start,
            })
        }
    }
}
