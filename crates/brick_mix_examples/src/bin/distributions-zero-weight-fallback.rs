use std::collections::HashMap;

use anyhow::Result;
use brick_mix::prelude::*;
use brick_mix_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    init_tracing();

    // Every weight zeroed: weighted sampling is undefined, so draws fall
    // back to a uniform pick across the items instead of failing.
    let mut dist = WeightedDistribution::new();
    dist.add_item("4", "Red", 0.0);
    dist.add_item("1", "Blue", 0.0);
    dist.add_item("2", "Green", 0.0);

    assert!(dist.normalized_weights().is_empty());

    // Thread one explicit stream through the draw instead of a per-call seed.
    let mut rng = StdRng::seed_from_u64(11);
    let drawn = dist.sample_with(9_000, &mut rng);
    let mut observed: HashMap<&str, usize> = HashMap::new();
    for item in &drawn {
        *observed.entry(item.name.as_str()).or_default() += 1;
    }

    println!("uniform fallback over {} draws:", drawn.len());
    for item in &dist.items {
        println!(
            "  {:<6} {:>5}",
            item.name,
            observed.get(item.name.as_str()).copied().unwrap_or(0)
        );
    }

    Ok(())
}
