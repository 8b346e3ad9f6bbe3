// file: src/prompt/mod.rs
// version: 1.0.0
// guid: 405d2d48-ac95-408d-a739-47462d74d1d3

//! Prompt domain types
//!
//! Holds the normalized [`Answer`] read from standard input and the
//! [`PromptOutcome`] of a completed interaction.

pub mod answer;

pub use answer::Answer;

/// How a successful prompt interaction ended
///
/// Errors (missing file, failed read) are not outcomes; they travel through
/// [`crate::PromptError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The file contents were printed
    ContentDisplayed,
    /// The user declined and the contents were skipped
    Skipped,
    /// The user could not decide
    Undecided,
    /// The answer was not recognized and was treated as a decline
    UnrecognizedAnswer,
}

impl PromptOutcome {
    /// Get the process exit code for this outcome
    ///
    /// Indecision signals with code 2; every other outcome, including the
    /// unrecognized-answer fallback, is a normal completion.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptOutcome::ContentDisplayed
            | PromptOutcome::Skipped
            | PromptOutcome::UnrecognizedAnswer => 0,
            PromptOutcome::Undecided => 2,
        }
    }
}
