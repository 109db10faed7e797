//! Species provider payloads
//!
//! These types mirror the JSON returned by the provider's `/pokemon` list and
//! `/pokemon/{name}` endpoints. Only the fields the app reads are declared;
//! everything else is ignored by serde.


use serde::Deserialize;
use typedex_chart::Type;

use crate::ParseError;
use crate::species::{BaseStat, Species, SpeciesRef};

/// How many moves are kept per species
pub const DEFAULT_MOVES_LIMIT: usize = 8;

/// `/pokemon?limit=N` response
#[derive(Debug, Clone, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<ListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ListEntry {
    name: String,
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedResource {
    name: String,
}

/// `/pokemon/{name}` response
#[derive(Debug, Clone, Deserialize)]
struct SpeciesResponse {
    id: u32,
    name: String,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    stats: Vec<StatSlot>,
    #[serde(default)]
    moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
    #[serde(default)]
    other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct MoveSlot {
    #[serde(rename = "move")]
    kind: NamedResource,
}

/// Parse a species list response, in provider order
///
/// Ids come from each entry's resource URL, since alternate forms follow the
/// national dex with ids from 10001 up.
pub fn parse_species_list(json: &str) -> Result<Vec<SpeciesRef>, ParseError> {
    let response: ListResponse = serde_json::from_str(json)?;
    response
        .results
        .into_iter()
        .map(|entry| match id_from_url(&entry.url) {
            Some(id) => Ok(SpeciesRef {
                id,
                name: entry.name,
            }),
            None => Err(ParseError::InvalidUrl(entry.url, entry.name)),
        })
        .collect()
}

/// ".../pokemon/10001/" -> 10001
fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Parse a species response, keeping at most `moves_limit` moves
pub fn parse_species(json: &str, moves_limit: usize) -> Result<Species, ParseError> {
    let response: SpeciesResponse = serde_json::from_str(json)?;
    species_from_response(response, moves_limit)
}

fn species_from_response(
    response: SpeciesResponse,
    moves_limit: usize,
) -> Result<Species, ParseError> {
    let types = response
        .types
        .iter()
        .map(|slot| {
            slot.kind
                .name
                .parse::<Type>()
                .map_err(|_| ParseError::InvalidType(slot.kind.name.clone(), response.name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match types.len() {
        0 => return Err(ParseError::MissingTypes(response.name)),
        1 | 2 => {}
        n => return Err(ParseError::TooManyTypes(response.name, n)),
    }

    // Artwork first, plain sprite as fallback
    let image = response
        .sprites
        .other
        .official_artwork
        .front_default
        .filter(|url| !url.is_empty())
        .or(response.sprites.front_default);

    let stats = response
        .stats
        .into_iter()
        .map(|slot| BaseStat {
            name: slot.stat.name,
            value: slot.base_stat,
        })
        .collect();

    let moves = response
        .moves
        .into_iter()
        .take(moves_limit)
        .map(|slot| display_move_name(&slot.kind.name))
        .collect();

    Ok(Species {
        id: response.id,
        name: response.name,
        types,
        image,
        stats,
        moves,
    })
}

/// "swords-dance" -> "swords dance"; only the first dash is replaced
fn display_move_name(name: &str) -> String {
    name.replacen('-', " ", 1)
}
