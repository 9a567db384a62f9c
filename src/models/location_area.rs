//! Location area models: the paginated listing and a single area's encounters.

use serde::{Deserialize, Serialize};

/// A named link to another PokeAPI resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,

    /// Resource URL, absent in some embedded references
    pub url: Option<String>,
}

/// One page of the `location-area` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LocationAreaList {
    /// Total number of location areas across all pages
    pub count: usize,

    /// URL of the next page, `None` on the last page
    pub next: Option<String>,

    /// URL of the previous page, `None` on the first page
    pub previous: Option<String>,

    pub results: Vec<NamedResource>,
}

impl LocationAreaList {
    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Names of the areas on this page, in API order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|area| area.name.as_str())
    }
}

/// A Pokemon that can be encountered in a location area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A single location area with its encounter table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LocationAreaDetail {
    pub id: u32,
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationAreaDetail {
    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Names of the Pokemon encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
