// file: src/prompt/answer.rs
// version: 1.0.0
// guid: 1ac734d1-0dd9-4d81-b60e-6f223dcada22

//! Normalization of the yes/no/maybe confirmation answer

use crate::Result;
use std::io::BufRead;

/// A normalized answer to the display confirmation question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Maybe,
    /// Anything else, carrying the normalized input for the warning message
    Other(String),
}

impl Answer {
    /// Read a single line from the reader and normalize it
    ///
    /// Blocks until a line or end-of-stream arrives. End-of-stream yields an
    /// empty answer, which lands in [`Answer::Other`].
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Ok(Self::from(line.as_str()))
    }
}

impl From<&str> for Answer {
    /// Trim surrounding whitespace, uppercase, and match against the three
    /// recognized answers
    fn from(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "YES" => Answer::Yes,
            "NO" => Answer::No,
            "MAYBE" => Answer::Maybe,
            _ => Answer::Other(normalized),
        }
    }
}
