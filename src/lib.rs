//! Pokedex CLI - An interactive Pokedex backed by PokeAPI
//!
//! Fetches location areas and species data over HTTP, keeping raw responses
//! in a time-bounded cache that a background task reaps on a fixed interval.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::ApiClient;
pub use repl::Repl;
pub use tasks::spawn_reap_task;
