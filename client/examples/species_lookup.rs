//! Species Lookup Example
//!
//! Fetches a species from the provider and prints its stats and type matchups.
//! Set TYPEDEX_API_URL to point at another provider.
//!
//! Usage: cargo run --example species_lookup -- garchomp

use std::env;

use anyhow::{Context, Result};
use typedex_client::{ClientConfig, FetchError, SpeciesClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let term = env::args()
        .nth(1)
        .context("Usage: species_lookup NAME")?;
    let client = SpeciesClient::new(ClientConfig::from_env())?;

    let species = match client.fetch_species(&term).await {
        Ok(species) => species,
        Err(e) if e.is_not_found() => {
            let suggestions = client.search_indexed(&term).await.unwrap_or_default();
            println!("No species named {:?}", term);
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for s in suggestions {
                    println!("  #{} {}", s.id, s.name);
                }
            }
            return Ok(());
        }
        Err(e @ FetchError::Unavailable(_)) => {
            println!("Species provider unavailable: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let types: Vec<String> = species.types.iter().map(|t| t.to_string()).collect();
    println!("#{} {} [{}]", species.id, species.name, types.join("/"));
    if let Some(image) = &species.image {
        println!("{}", image);
    }

    println!("\nBase stats ({} total)", species.base_stat_total());
    for stat in &species.stats {
        println!("  {:<16} {:>3}", stat.name, stat.value);
    }

    if !species.moves.is_empty() {
        println!("\nMoves: {}", species.moves.join(", "));
    }

    let defense = species.defense();
    println!("\nWeak to:");
    for t in &defense.weaknesses {
        println!("  {:<10} x{}", t, defense.multiplier(*t));
    }
    println!("Resists:");
    for t in &defense.resistances {
        println!("  {:<10} x{}", t, defense.multiplier(*t));
    }
    if !defense.immunities.is_empty() {
        let immune: Vec<String> = defense.immunities.iter().map(|t| t.to_string()).collect();
        println!("Immune to: {}", immune.join(", "));
    }

    let offense = species.offense();
    let hits: Vec<String> = offense
        .super_effective
        .iter()
        .map(|t| t.to_string())
        .collect();
    println!("\nSame-type attacks hit hard: {}", hits.join(", "));

    Ok(())
}
