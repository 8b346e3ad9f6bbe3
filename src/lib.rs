// file: src/lib.rs
// version: 1.0.0
// guid: 24c3b0e5-6389-49b6-b06f-557e8b4c5dd0

//! # Hello Prompt
//!
//! Interactive file prompt demo. The binary echoes its two positional
//! arguments, verifies that the given file exists, asks a single
//! yes/no/maybe question on standard input and, on a Yes, prints the
//! file's contents line by line.

pub mod cli;
pub mod error;
pub mod logging;
pub mod prompt;

pub use error::{PromptError, Result};
