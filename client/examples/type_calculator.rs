//! Type Calculator Example
//!
//! Prints the defensive and offensive profile for one or two types.
//!
//! Usage: cargo run --example type_calculator -- ghost dark

use std::env;

use anyhow::{Context, Result};
use typedex_chart::{DefenseTiers, Type, Typing, analyze_defense, analyze_offense};

fn names(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let labels: Vec<String> = env::args().skip(1).collect();
    let typing = Typing::parse(&labels).context("Usage: type_calculator TYPE [TYPE]")?;
    let types = typing.types();

    println!("=== {} ===\n", typing);

    let defense = analyze_defense(&types);
    println!("Defense");
    for (label, tier) in DefenseTiers::from_profile(&defense).sections() {
        println!("  {:>6}  {}", label, names(tier));
    }

    let offense = analyze_offense(&types);
    println!("\nOffense");
    println!("  super effective     {}", names(&offense.super_effective));
    println!("  not very effective  {}", names(&offense.not_very_effective));
    println!("  no effect           {}", names(&offense.no_effect));

    Ok(())
}
