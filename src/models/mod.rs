//! Models Module
//!
//! PokeAPI response shapes and the caught-pokemon collection.

pub mod pokemon;
pub mod responses;

pub use pokemon::{Pokedex, Pokemon, DISPLAY_STATS};
pub use responses::*;
