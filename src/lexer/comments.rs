//! Comment removal applied to a script before it is tokenized
//!
//! `//` comments run to the end of their line; `/* */` comments may span
//! lines and end at the first `*/`. Line comments are removed first.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\r\n]*").unwrap();
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// Removes line and block comments from `source`
pub fn strip_comments(source: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(source, "");
    BLOCK_COMMENT.replace_all(&without_lines, "").into_owned()
}
