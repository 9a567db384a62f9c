//! Data models for PokeAPI responses.
//!
//! Only the fields the REPL displays are modelled; everything else in the
//! response bodies is ignored during deserialization.

pub mod location_area;

pub use location_area::{LocationAreaDetail, LocationAreaList, NamedResource, PokemonEncounter};
