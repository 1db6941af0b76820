//! PokeAPI Module
//!
//! Cached HTTP access to PokeAPI plus the catch mechanics.

pub mod catch;
pub mod client;

pub use catch::{catch_chance, CatchOutcome};
pub use client::ApiClient;
