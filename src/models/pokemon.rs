//! Caught Pokemon and the Pokedex collection

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::models::PokemonDetail;

/// Stats shown by `inspect`, in display order.
pub const DISPLAY_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

// == Pokemon ==
/// A species as recorded in the pokedex at the moment it was first caught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Base stat value keyed by stat name
    pub stats: HashMap<String, u32>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl Pokemon {
    /// Value of a named stat, zero if the API did not report it.
    pub fn stat(&self, name: &str) -> u32 {
        self.stats.get(name).copied().unwrap_or(0)
    }
}

impl From<PokemonDetail> for Pokemon {
    fn from(detail: PokemonDetail) -> Self {
        let stats = detail
            .stats
            .into_iter()
            .map(|s| (s.stat.name, s.base_stat))
            .collect();

        let mut slots = detail.types;
        slots.sort_by_key(|t| t.slot);
        let types = slots.into_iter().map(|t| t.kind.name).collect();

        Self {
            name: detail.name,
            height: detail.height,
            weight: detail.weight,
            stats,
            types,
        }
    }
}

// == Pokedex ==
/// The species caught this session, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pokemon` unless a species with the same name is already held.
    ///
    /// Returns true if it was added. The first catch wins.
    pub fn insert_if_absent(&mut self, pokemon: Pokemon) -> bool {
        match self.caught.entry(pokemon.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(pokemon);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught species names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.caught.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
