// file: src/error.rs
// version: 1.0.0
// guid: 038937d8-f30a-43da-bf97-eeeaf3d6de7f

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, PromptError>;

/// Error types for the interactive file prompt
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("File '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl PromptError {
    /// Get the process exit code for this error
    ///
    /// A missing file is the only explicitly handled failure; everything
    /// else terminates with the same generic code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::FileNotFound(_) => 1,
            PromptError::Io(_) | PromptError::Logging(_) => 1,
        }
    }
}
