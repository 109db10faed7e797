//! Versus Example
//!
//! Compares two species side by side: base stats and type advantage.
//!
//! Usage: cargo run --example versus -- pikachu gyarados

use std::env;

use anyhow::{Context, Result};
use typedex_client::{ClientConfig, SpeciesClient, Versus};
use typedex_species::Outcome;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let left = args.next().context("Usage: versus LEFT RIGHT")?;
    let right = args.next().context("Usage: versus LEFT RIGHT")?;

    let client = SpeciesClient::new(ClientConfig::from_env())?;
    let (left, right) = tokio::try_join!(client.fetch_species(&left), client.fetch_species(&right))?;

    let versus = Versus::new(&left, &right);
    println!("{:>16} {:^12} {:<16}", left.name, "vs", right.name);
    for stat in versus.stat_diffs() {
        println!(
            "{:>16} {:^12} {:<16} ({:+})",
            stat.left,
            stat.name,
            stat.right,
            stat.diff()
        );
    }

    println!();
    match versus.outcome() {
        Outcome::Left => println!("{} has the type advantage over {}", left.name, right.name),
        Outcome::Right => println!("{} has the type advantage over {}", right.name, left.name),
        Outcome::Both => println!("{} and {} can both hit each other hard", left.name, right.name),
        Outcome::Neutral => println!("Neither has a type advantage"),
    }

    Ok(())
}
