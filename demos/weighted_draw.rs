//! Weighted vs inverse-weighted drawing over a small fixed collection.
//!
//! Draws 1000 samples each way from four items with very uneven weights,
//! prints the selection frequencies, then runs an iterative rebalance:
//! every round the proportional pick loses a unit of weight and the
//! inverse pick gains one, pulling the weights toward each other.

use std::collections::HashMap;

use fukubiki::{
    inverse_weighted_sample_by_with_rng, inverse_weighted_sample_n_by_with_rng,
    weighted_sample_by_with_rng, weighted_sample_n_by_with_rng,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug)]
struct Thing {
    name: &'static str,
    weight: f64,
}

fn summarize(names: &[&'static str]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &name in names {
        *counts.entry(name).or_default() += 1;
    }
    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by_key(|&(_, n)| n);
    pairs
        .iter()
        .map(|(name, n)| format!("{name}: {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const SAMPLES: usize = 1_000;

    let mut things = vec![
        Thing { name: "foo", weight: 1.0 },
        Thing { name: "bar", weight: 2.0 },
        Thing { name: "baz", weight: 199.0 },
        Thing { name: "bat", weight: 198.0 },
    ];

    println!("input weights:");
    for t in &things {
        println!("  {}: {}", t.name, t.weight);
    }
    println!();

    let mut rng = ChaCha8Rng::seed_from_u64(0xf00d);

    let picked =
        weighted_sample_n_by_with_rng(&things, |t| t.weight, SAMPLES, &mut rng)?;
    let names: Vec<&'static str> = picked.iter().map(|t| t.name).collect();
    println!("{SAMPLES}x weighted samples:");
    println!("  {}", summarize(&names));
    println!();

    let picked =
        inverse_weighted_sample_n_by_with_rng(&things, |t| t.weight, SAMPLES, &mut rng)?;
    let names: Vec<&'static str> = picked.iter().map(|t| t.name).collect();
    println!("{SAMPLES}x inverse weighted samples:");
    println!("  {}", summarize(&names));
    println!();

    // Rebalance: tax the proportional pick, subsidize the inverse pick.
    // The decrement is skipped at weight 1 so every weight stays positive.
    let indices: Vec<usize> = (0..things.len()).collect();
    for _ in 0..SAMPLES {
        let taxed =
            *weighted_sample_by_with_rng(&indices, |&i| things[i].weight, &mut rng)?;
        if things[taxed].weight > 1.0 {
            things[taxed].weight -= 1.0;
        }
        let subsidized =
            *inverse_weighted_sample_by_with_rng(&indices, |&i| things[i].weight, &mut rng)?;
        things[subsidized].weight += 1.0;
    }

    println!("{SAMPLES}x iterative rebalance:");
    for t in &things {
        println!("  {}: {}", t.name, t.weight);
    }

    Ok(())
}
