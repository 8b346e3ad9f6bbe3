// file: src/logging/mod.rs
// version: 1.0.0
// guid: 7aeea9cd-3e36-45d0-9d5a-807a6d1b2979

//! Logging system for the file prompt

pub mod logger;

pub use logger::init_logger;
