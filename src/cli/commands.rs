// file: src/cli/commands.rs
// version: 1.0.0
// guid: 17e4433a-e244-46dd-b500-be9267e55db8

//! Command implementations for the CLI

use crate::prompt::{Answer, PromptOutcome};
use crate::{PromptError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Run the interactive file prompt
///
/// Echoes the arguments, verifies that `file_path` exists, asks the
/// yes/no/maybe question on stdin and prints the file's contents on a Yes.
/// The existence check happens before the question is ever issued.
pub fn run_prompt(text: &str, file_path: &Path) -> Result<PromptOutcome> {
    debug!(text, path = %file_path.display(), "starting interactive prompt");

    println!("[hello] Hello from Rust!");
    println!("[info] Text argument : {text}");
    println!("[info] File argument : {}", file_path.display());

    if !file_path.exists() {
        return Err(PromptError::FileNotFound(file_path.to_path_buf()));
    }
    debug!(path = %file_path.display(), "file exists, asking for display confirmation");

    println!("QUESTION: Display the file content? (Yes/No/Maybe)");
    io::stdout().flush()?;

    let answer = Answer::read_from(io::stdin().lock())?;
    debug!(?answer, "answer received");

    match answer {
        Answer::Yes => {
            let contents = fs::read_to_string(file_path)?;
            debug!(bytes = contents.len(), "displaying file contents");
            println!("[content]");
            for line in indented_lines(&contents) {
                println!("{line}");
            }
            Ok(PromptOutcome::ContentDisplayed)
        }
        Answer::No => {
            println!("[skip] Content display skipped.");
            Ok(PromptOutcome::Skipped)
        }
        Answer::Maybe => {
            println!("MAYBE_SELECTED - user could not decide.");
            Ok(PromptOutcome::Undecided)
        }
        Answer::Other(raw) => {
            println!("[warn] Unexpected answer '{raw}'. Treating as NO.");
            Ok(PromptOutcome::UnrecognizedAnswer)
        }
    }
}

/// Prefix every line of the contents with two spaces, in original order
fn indented_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents.lines().map(|line| format!("  {line}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_run_prompt_missing_file() {
        // Arrange
        let path = PathBuf::from("/nonexistent/hello-prompt-test.txt");

        // Act
        let result = run_prompt("hi", &path);

        // Assert
        // Fails before stdin is touched, so this is safe to call in a test
        assert!(matches!(result, Err(PromptError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn test_indented_lines_prefixes_each_line() {
        let lines: Vec<String> = indented_lines("a\nb\n").collect();
        assert_eq!(lines, vec!["  a", "  b"]);
    }

    #[test]
    fn test_indented_lines_preserves_order() {
        let lines: Vec<String> = indented_lines("first\nsecond\nthird").collect();
        assert_eq!(lines, vec!["  first", "  second", "  third"]);
    }

    #[test]
    fn test_indented_lines_handles_crlf() {
        let lines: Vec<String> = indented_lines("a\r\nb\r\n").collect();
        assert_eq!(lines, vec!["  a", "  b"]);
    }

    #[test]
    fn test_indented_lines_keeps_interior_blank_lines() {
        let lines: Vec<String> = indented_lines("a\n\nb").collect();
        assert_eq!(lines, vec!["  a", "  ", "  b"]);
    }

    #[test]
    fn test_indented_lines_empty_contents() {
        assert_eq!(indented_lines("").count(), 0);
    }
}
