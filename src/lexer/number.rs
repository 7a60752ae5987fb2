use super::position::Position;
use super::scanner::{Step, TokenScanner, TokenSink};
use super::token::TokenKind;
use crate::error::{Error, Result};

/// Scanner for number literals: an optional sign, digits, at most one `.`
#[derive(Debug, Default)]
pub struct NumberScanner {
    buffer: String,
    seen_dot: bool,
}

impl NumberScanner {
    fn clear(&mut self) {
        self.buffer.clear();
        self.seen_dot = false;
    }

    fn emit(&mut self, sink: &mut TokenSink) {
        // Bare signs and other partial literals fall back to zero
        let value = self.buffer.parse::<f64>().unwrap_or(0.0);
        sink.push_number(value);
        self.clear();
    }
}

impl TokenScanner for NumberScanner {
    fn kind(&self) -> TokenKind {
        TokenKind::Number
    }

    fn try_start(&mut self, c: char) -> bool {
        if c.is_ascii_digit() || c == '-' || c == '+' {
            self.buffer.push(c);
            return true;
        }
        false
    }

    fn feed(&mut self, c: char, at: Position, sink: &mut TokenSink) -> Result<Step> {
        if c.is_ascii_digit() {
            self.buffer.push(c);
            return Ok(Step::Continue);
        }

        if c == '.' {
            if self.seen_dot {
                self.buffer.push(c);
                let literal = std::mem::take(&mut self.buffer);
                self.clear();
                return Err(Error::DuplicateDecimalPoint { literal, at });
            }
            self.buffer.push(c);
            self.seen_dot = true;
            return Ok(Step::Continue);
        }

        self.emit(sink);
        Ok(Step::Done)
    }

    fn finish(&mut self, _start: Position, sink: &mut TokenSink) -> Result<()> {
        self.emit(sink);
        Ok(())
    }
}
