// file: src/cli/args.rs
// version: 1.0.0
// guid: 58597557-8337-45b1-a78f-3e961e71aadf

//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hello-prompt")]
#[command(about = "Demo prompt script")]
pub struct Cli {
    /// Arbitrary text echoed back at startup
    pub text: String,

    /// File offered for display
    pub file_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::parse_from(["hello-prompt", "hi", "notes.txt"]);
        assert_eq!(cli.text, "hi");
        assert_eq!(cli.file_path, PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_both_arguments_are_required() {
        assert!(Cli::try_parse_from(["hello-prompt"]).is_err());
        assert!(Cli::try_parse_from(["hello-prompt", "hi"]).is_err());
    }
}
