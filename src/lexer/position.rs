use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a character in the comment-stripped source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Position of the first character of a source
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }

    /// Moves past `c`
    pub(crate) fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
