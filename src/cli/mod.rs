// file: src/cli/mod.rs
// version: 1.0.0
// guid: 5dca45fb-2d1f-4ddc-8632-47db5cdbf24d

//! Command line interface for the file prompt

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::run_prompt;
