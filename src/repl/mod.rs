//! REPL Module
//!
//! Line-oriented command interface on top of [`ApiClient`](crate::ApiClient).
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - page forward and back through location areas
//! - `explore <location>` - list the pokemon found in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

pub mod commands;
pub mod input;
pub mod session;

pub use commands::{Command, CommandSpec, COMMANDS};
pub use input::clean_input;
pub use session::{Flow, Repl, PROMPT};
