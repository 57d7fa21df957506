use anyhow::Result;
use brick_mix::prelude::*;
use brick_mix_examples::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let config = DistributionConfig::new()
        .with_parts(common_parts())
        .with_colors(common_colors())
        .with_total_pieces(250)
        .with_seed(7);

    let pairs = config.generate_part_color_pairs();
    let unique = unique_pairs(&pairs);
    println!(
        "{} pieces across {} unique part/color combinations",
        pairs.len(),
        unique.len()
    );
    for (part_id, color_id) in unique.iter().take(5) {
        println!("  e.g. part {part_id} in color {color_id}");
    }

    // The full dataset spec round-trips through one JSON file.
    let path = std::env::temp_dir().join("brick-mix-dataset-spec.json");
    config.save(&path)?;
    let reloaded = DistributionConfig::load(&path)?;
    assert_eq!(config, reloaded);
    println!("round-tripped dataset spec via {}", path.display());

    Ok(())
}
