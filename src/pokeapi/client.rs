//! PokeAPI Client
//!
//! Fetch-with-cache wrapper around the remote API. Owns the location paging
//! cursors and the pokedex of caught species.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use reqwest::Client;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaList, Pokedex, Pokemon, PokemonDetail};
use crate::pokeapi::catch::{catch_chance, is_caught, CatchOutcome};

/// Client for PokeAPI with a response cache and session state.
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
    next_page: Option<String>,
    prev_page: Option<String>,
    pokedex: Pokedex,
    rng: Box<dyn RngCore + Send>,
}

impl ApiClient {
    /// Builds a client from configuration and starts its cache reaper.
    ///
    /// Must be called inside a tokio runtime. Catch rolls use an
    /// entropy-seeded RNG unless replaced with [`ApiClient::with_rng`].
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            next_page: Some(format!("{base_url}/location-area")),
            prev_page: None,
            base_url,
            cache: Cache::new(config.reap_interval()),
            pokedex: Pokedex::new(),
            rng: Box::new(StdRng::from_entropy()),
        })
    }

    /// Replaces the source of catch rolls.
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// Only successful responses are cached, keyed by the full URL. A
    /// non-success status yields [`PokedexError::Remote`]; connection
    /// failures yield [`PokedexError::Transport`].
    pub async fn fetch_with_cache(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(PokedexError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let body = body.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    // == Locations ==
    /// Fetches the location page at `url` and moves the cursors to its
    /// neighbours. Returns the location names on the page.
    pub async fn fetch_location(&mut self, url: &str) -> Result<Vec<String>> {
        let body = self.fetch_with_cache(url).await?;
        let page: LocationAreaList = serde_json::from_slice(&body)?;

        self.next_page = page.next.filter(|u| !u.is_empty());
        self.prev_page = page.previous.filter(|u| !u.is_empty());

        Ok(page.results.into_iter().map(|l| l.name).collect())
    }

    /// Advances one page. `None` means there is no next page.
    pub async fn next_page(&mut self) -> Result<Option<Vec<String>>> {
        match self.next_page.clone() {
            Some(url) => self.fetch_location(&url).await.map(Some),
            None => Ok(None),
        }
    }

    /// Goes back one page. `None` means we are on the first page.
    pub async fn previous_page(&mut self) -> Result<Option<Vec<String>>> {
        match self.prev_page.clone() {
            Some(url) => self.fetch_location(&url).await.map(Some),
            None => Ok(None),
        }
    }

    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn prev_page_url(&self) -> Option<&str> {
        self.prev_page.as_deref()
    }

    /// Names of the pokemon that can be encountered in `location`.
    pub async fn explore_location(&self, location: &str) -> Result<Vec<String>> {
        let url = format!("{}/location-area/{location}", self.base_url);
        let body = self.fetch_with_cache(&url).await?;
        let detail: LocationAreaDetail = serde_json::from_slice(&body)?;

        Ok(detail
            .pokemon_encounters
            .into_iter()
            .map(|e| e.pokemon.name)
            .collect())
    }

    // == Pokemon ==
    /// Throws one Pokeball at `name`.
    ///
    /// The roll happens even for species already caught; only a first
    /// successful catch is recorded.
    pub async fn catch_pokemon(&mut self, name: &str) -> Result<CatchOutcome> {
        let url = format!("{}/pokemon/{name}", self.base_url);
        let body = self.fetch_with_cache(&url).await?;
        let detail: PokemonDetail = serde_json::from_slice(&body)?;

        let chance = catch_chance(detail.base_experience);
        let roll: f64 = self.rng.gen();
        debug!(pokemon = name, chance, roll, "catch roll");

        if !is_caught(chance, roll) {
            return Ok(CatchOutcome::Escaped);
        }

        let newly_added = self.pokedex.insert_if_absent(Pokemon::from(detail));
        if newly_added {
            info!(pokemon = name, total = self.pokedex.len(), "added to pokedex");
        }
        Ok(CatchOutcome::Caught { newly_added })
    }

    pub fn inspect_pokemon(&self, name: &str) -> Result<&Pokemon> {
        self.pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))
    }

    /// Caught species names, alphabetically.
    pub fn check_pokedex(&self) -> Result<Vec<&str>> {
        if self.pokedex.is_empty() {
            return Err(PokedexError::EmptyPokedex);
        }
        Ok(self.pokedex.names())
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Stops the cache reaper. The client stays usable; entries just stop expiring.
    pub fn shutdown(&self) {
        self.cache.stop();
    }
}
