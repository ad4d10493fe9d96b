//! Utility modules for the CLI
//!
//! - `io`: logging and terminal input

pub mod io;

pub use io::{Prompt, TerminalPrompt};
