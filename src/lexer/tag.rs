use super::position::Position;
use super::scanner::{Step, TokenScanner, TokenSink};
use super::token::TokenKind;
use crate::error::{Error, Result};

/// Scanner for bracket tags such as `[toy project test]`
///
/// The emitted text keeps both brackets.
#[derive(Debug, Default)]
pub struct TagScanner {
    buffer: String,
    closed: bool,
}

impl TagScanner {
    fn clear(&mut self) {
        self.buffer.clear();
        self.closed = false;
    }

    fn is_escaped(&self) -> bool {
        self.buffer.ends_with('\\')
    }
}

/// Characters allowed between the brackets of a tag
pub fn is_tag_char(c: char) -> bool {
    matches!(c, ' ' | '_' | '-') || c.is_ascii_alphanumeric()
}

impl TokenScanner for TagScanner {
    fn kind(&self) -> TokenKind {
        TokenKind::Tag
    }

    fn try_start(&mut self, c: char) -> bool {
        if c == '[' {
            self.buffer.push(c);
            return true;
        }
        false
    }

    fn feed(&mut self, c: char, at: Position, sink: &mut TokenSink) -> Result<Step> {
        if self.closed {
            self.clear();
            return Ok(Step::Done);
        }

        if c == ']' && !self.is_escaped() {
            self.buffer.push(c);
            sink.push_tag(std::mem::take(&mut self.buffer));
            self.closed = true;
            return Ok(Step::Continue);
        }

        if !is_tag_char(c) {
            let tag = std::mem::take(&mut self.buffer);
            self.clear();
            return Err(Error::InvalidTagCharacter {
                character: c,
                tag,
                at,
            });
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
