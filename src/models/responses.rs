//! Response DTOs for PokeAPI
//!
//! Defines the JSON shapes we decode from the remote API. Only the fields the
//! client reads are required; the rest default when absent.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// == Location Areas ==

/// One page of `GET /location-area`.
///
/// `next` and `previous` are absolute URLs, null at either end of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaList {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncounterVersionDetail {
    pub version: NamedResource,
    #[serde(default)]
    pub max_chance: u32,
}

// == Pokemon ==

/// Body of `GET /pokemon/{name}`.
///
/// `base_experience` is null for some alternate forms.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
