use std::collections::HashMap;

use anyhow::Result;
use brick_mix::prelude::*;
use brick_mix_examples::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let mut dist = WeightedDistribution::new();
    dist.add_item("3001", "Brick 2x4", 1.0);
    dist.add_item("3003", "Brick 2x2", 0.5);
    dist.add_item("3024", "Plate 1x1", 0.25);

    // Draw a reproducible sample and compare against the analytic estimate.
    let total = 10_000;
    let drawn = dist.sample(total, Some(2025));

    let mut observed: HashMap<&str, usize> = HashMap::new();
    for item in &drawn {
        *observed.entry(item.id.as_str()).or_default() += 1;
    }

    let expected = dist.expected_counts(total);
    println!("{total} draws, seed 2025:");
    for item in &dist.items {
        println!(
            "  {:>5} {:<12} observed {:>5} expected {:>5}",
            item.id,
            item.name,
            observed.get(item.id.as_str()).copied().unwrap_or(0),
            expected.get(&item.id).copied().unwrap_or(0),
        );
    }

    Ok(())
}
