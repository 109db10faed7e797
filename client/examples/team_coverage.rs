//! Team Coverage Example
//!
//! Builds a team from up to six species names and reports shared weaknesses.
//!
//! Usage: cargo run --example team_coverage -- gyarados lapras vaporeon garchomp

use std::env;

use anyhow::Result;
use typedex_chart::Type;
use typedex_client::{ClientConfig, SpeciesClient};
use typedex_team::{NewMember, TeamError, TeamStore};

fn list(types: &[Type]) -> String {
    if types.is_empty() {
        return "none".to_string();
    }
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = SpeciesClient::new(ClientConfig::from_env())?;
    let mut team = TeamStore::new();

    for name in env::args().skip(1) {
        let species = match client.fetch_species(&name).await {
            Ok(species) => species,
            Err(e) => {
                println!("Skipping {}: {}", name, e);
                continue;
            }
        };

        match team.add(NewMember::from(&species)) {
            Ok(_) => println!("Added {}", species.name),
            Err(TeamError::Full(max)) => {
                println!("Team already has {} members, ignoring the rest", max);
                break;
            }
            Err(e) => println!("Skipping {}: {}", species.name, e),
        }
    }

    let Some(coverage) = team.coverage() else {
        println!("Team is empty");
        return Ok(());
    };

    println!("\n{:<10} {:>5} {:>7}", "Type", "Weak", "Resist");
    for t in Type::ALL {
        println!(
            "{:<10} {:>5} {:>7}",
            t,
            coverage.weak_count(t),
            coverage.resist_count(t)
        );
    }

    println!("\nThreats: {}", list(&coverage.threats()));
    println!("Covered: {}", list(&coverage.covered()));

    Ok(())
}
