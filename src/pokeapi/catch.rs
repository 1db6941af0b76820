//! Catch Module
//!
//! Odds of catching a species and the outcome of a throw.

/// Numerator of the catch formula; a species with this much base experience
/// is always caught.
pub const CATCH_THRESHOLD: f64 = 36.0;

/// Result of one thrown Pokeball. Both variants are ordinary outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// The roll succeeded. `newly_added` is false when the species was
    /// already in the pokedex.
    Caught { newly_added: bool },
    Escaped,
}

/// Probability of a catch for a species with `base_experience`.
///
/// Unknown or zero experience is treated as a guaranteed catch.
pub fn catch_chance(base_experience: Option<u32>) -> f64 {
    match base_experience {
        Some(exp) if exp > 0 => CATCH_THRESHOLD / f64::from(exp),
        _ => 1.0,
    }
}

/// A catch succeeds when the chance beats a roll drawn from [0, 1).
pub fn is_caught(chance: f64, roll: f64) -> bool {
    chance > roll
}
