//! Preset part and color catalogs for common dataset setups.
//!
//! Part ids are LDraw part numbers, color ids LDraw color codes.
use crate::distribution::WeightedDistribution;

/// Distribution of common brick and plate parts.
pub fn common_parts() -> WeightedDistribution {
    let mut dist = WeightedDistribution::new();

    // Bricks carry more weight than plates.
    dist.add_item("3001", "Brick 2x4", 1.0);
    dist.add_item("3002", "Brick 2x3", 0.8);
    dist.add_item("3003", "Brick 2x2", 0.9);
    dist.add_item("3004", "Brick 1x2", 1.0);
    dist.add_item("3005", "Brick 1x1", 0.7);

    dist.add_item("3021", "Plate 2x3", 0.6);
    dist.add_item("3022", "Plate 2x2", 0.7);
    dist.add_item("3023", "Plate 1x2", 0.8);
    dist.add_item("3024", "Plate 1x1", 0.5);

    dist
}

/// Distribution of common colors, primaries weighted above neutrals.
pub fn common_colors() -> WeightedDistribution {
    let mut dist = WeightedDistribution::new();

    dist.add_item("4", "Red", 1.0);
    dist.add_item("1", "Blue", 1.0);
    dist.add_item("2", "Green", 0.8);
    dist.add_item("14", "Yellow", 0.9);

    dist.add_item("0", "Black", 0.7);
    dist.add_item("15", "White", 0.7);
    dist.add_item("72", "Dark Gray", 0.5);

    dist
}
