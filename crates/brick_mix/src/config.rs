//! Dataset configuration pairing a part distribution with a color
//! distribution, plus generation of the (part, color) piece list.
use std::collections::HashSet;
use std::path::Path;

use serde_json::{json, Value};
use tracing::info;

use crate::distribution::WeightedDistribution;
use crate::error::{Error, Result};
use crate::persist;

/// Piece count used when a configuration does not specify one.
pub const DEFAULT_TOTAL_PIECES: usize = 100;

pub type PartId = String;
pub type ColorId = String;

/// Complete specification of a synthetic dataset draw: which parts and colors
/// to use, how many pieces to generate, and an optional master seed.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionConfig {
    /// Distribution of part ids.
    pub part_distribution: WeightedDistribution,
    /// Distribution of color ids.
    pub color_distribution: WeightedDistribution,
    /// Number of (part, color) pairs a generation pass produces.
    pub total_pieces: usize,
    /// Master seed; parts draw from it directly, colors from it offset by one.
    pub seed: Option<u64>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            part_distribution: WeightedDistribution::new(),
            color_distribution: WeightedDistribution::new(),
            total_pieces: DEFAULT_TOTAL_PIECES,
            seed: None,
        }
    }
}

impl DistributionConfig {
    /// Create a configuration with empty distributions and default scalars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the part distribution.
    pub fn with_parts(mut self, parts: WeightedDistribution) -> Self {
        self.part_distribution = parts;
        self
    }

    /// Set the color distribution.
    pub fn with_colors(mut self, colors: WeightedDistribution) -> Self {
        self.color_distribution = colors;
        self
    }

    /// Set the number of pieces a generation pass produces.
    pub fn with_total_pieces(mut self, total_pieces: usize) -> Self {
        self.total_pieces = total_pieces;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate `total_pieces` (part_id, color_id) pairs.
    ///
    /// Parts and colors are drawn independently and zipped by position, so a
    /// pair is correlated only through its ordinal. Colors draw from the
    /// master seed offset by one, which decorrelates the two streams while
    /// keeping both reproducible from one seed; an unseeded configuration
    /// draws fresh entropy and makes no reproducibility guarantee. When
    /// either distribution is empty the result is empty.
    pub fn generate_part_color_pairs(&self) -> Vec<(PartId, ColorId)> {
        info!("generating {} part/color pairs", self.total_pieces);

        let parts = self.part_distribution.sample(self.total_pieces, self.seed);
        let color_seed = self.seed.map(|seed| seed.wrapping_add(1));
        let colors = self.color_distribution.sample(self.total_pieces, color_seed);

        parts
            .into_iter()
            .zip(colors)
            .map(|(part, color)| (part.id, color.id))
            .collect()
    }

    /// Plain-mapping representation nesting both distributions under
    /// `parts`/`colors`, plus the `total_pieces` and `seed` scalars.
    pub fn to_value(&self) -> Value {
        json!({
            "parts": self.part_distribution.to_value(),
            "colors": self.color_distribution.to_value(),
            "total_pieces": self.total_pieces,
            "seed": self.seed,
        })
    }

    /// Build a configuration from its plain-mapping representation.
    ///
    /// `total_pieces` defaults to 100 and `seed` to `None` when absent; the
    /// `parts` and `colors` mappings are required.
    pub fn from_value(value: &Value) -> Result<Self> {
        let parts = value.get("parts").ok_or(Error::MissingField("parts"))?;
        let colors = value.get("colors").ok_or(Error::MissingField("colors"))?;

        Ok(Self {
            part_distribution: WeightedDistribution::from_value(parts)?,
            color_distribution: WeightedDistribution::from_value(colors)?,
            total_pieces: value
                .get("total_pieces")
                .and_then(Value::as_u64)
                .map(|total| total as usize)
                .unwrap_or(DEFAULT_TOTAL_PIECES),
            seed: value.get("seed").and_then(Value::as_u64),
        })
    }

    /// Write the configuration to `path` as pretty-printed UTF-8 JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        persist::write_value(path.as_ref(), &self.to_value())
    }

    /// Read a configuration from a JSON file written by
    /// [DistributionConfig::save].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_value(&persist::read_value(path.as_ref())?)
    }
}

/// Distinct (part, color) combinations of `pairs`, in first-seen order.
///
/// Importers use this to materialize each combination once before instancing
/// the full piece list.
pub fn unique_pairs(pairs: &[(PartId, ColorId)]) -> Vec<(PartId, ColorId)> {
    let mut seen = HashSet::new();
    pairs
        .iter()
        .filter(|pair| seen.insert(*pair))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_item_config() -> DistributionConfig {
        let mut parts = WeightedDistribution::new();
        parts.add_item("3001", "Brick 2x4", 1.0);
        let mut colors = WeightedDistribution::new();
        colors.add_item("4", "Red", 1.0);

        DistributionConfig::new()
            .with_parts(parts)
            .with_colors(colors)
    }

    fn two_sided_config(seed: u64) -> DistributionConfig {
        let mut parts = WeightedDistribution::new();
        let mut colors = WeightedDistribution::new();
        for id in ["a", "b", "c", "d", "e"] {
            parts.add_item(id, id.to_uppercase(), 1.0);
            colors.add_item(id, id.to_uppercase(), 1.0);
        }

        DistributionConfig::new()
            .with_parts(parts)
            .with_colors(colors)
            .with_total_pieces(50)
            .with_seed(seed)
    }

    #[test]
    fn defaults_are_empty_and_unseeded() {
        let config = DistributionConfig::new();
        assert!(config.part_distribution.is_empty());
        assert!(config.color_distribution.is_empty());
        assert_eq!(config.total_pieces, DEFAULT_TOTAL_PIECES);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn single_item_pairs_repeat() {
        let config = single_item_config().with_total_pieces(5).with_seed(7);
        let pairs = config.generate_part_color_pairs();
        assert_eq!(pairs, vec![("3001".to_string(), "4".to_string()); 5]);
    }

    #[test]
    fn pair_count_matches_total_pieces() {
        let config = two_sided_config(3);
        assert_eq!(config.generate_part_color_pairs().len(), 50);
    }

    #[test]
    fn empty_side_truncates_to_empty() {
        let config = single_item_config()
            .with_colors(WeightedDistribution::new())
            .with_total_pieces(25)
            .with_seed(1);
        assert!(config.generate_part_color_pairs().is_empty());

        let config = single_item_config()
            .with_parts(WeightedDistribution::new())
            .with_total_pieces(25)
            .with_seed(1);
        assert!(config.generate_part_color_pairs().is_empty());
    }

    #[test]
    fn pairs_are_reproducible_per_seed() {
        assert_eq!(
            two_sided_config(21).generate_part_color_pairs(),
            two_sided_config(21).generate_part_color_pairs()
        );
        assert_ne!(
            two_sided_config(21).generate_part_color_pairs(),
            two_sided_config(22).generate_part_color_pairs()
        );
    }

    #[test]
    fn color_stream_is_offset_from_part_stream() {
        // Identical items and weights on both sides: without the +1 seed
        // offset the two columns would be equal draw for draw.
        let pairs = two_sided_config(5).generate_part_color_pairs();
        assert!(pairs.iter().any(|(part, color)| part != color));
    }

    #[test]
    fn value_shape_matches_file_format() {
        let config = single_item_config();
        let value = config.to_value();

        assert!(value["parts"]["items"].is_array());
        assert!(value["colors"]["items"].is_array());
        assert_eq!(value["total_pieces"], 100);
        assert!(value["seed"].is_null());
    }

    #[test]
    fn value_round_trip() {
        let config = two_sided_config(9);
        let restored = DistributionConfig::from_value(&config.to_value()).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn import_defaults_missing_scalars() {
        let value = json!({
            "parts": {"items": []},
            "colors": {"items": []},
        });
        let config = DistributionConfig::from_value(&value).unwrap();
        assert_eq!(config.total_pieces, DEFAULT_TOTAL_PIECES);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn import_requires_both_distributions() {
        let missing_parts = json!({"colors": {"items": []}});
        assert!(matches!(
            DistributionConfig::from_value(&missing_parts),
            Err(Error::MissingField("parts"))
        ));

        let missing_colors = json!({"parts": {"items": []}});
        assert!(matches!(
            DistributionConfig::from_value(&missing_colors),
            Err(Error::MissingField("colors"))
        ));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");

        let config = two_sided_config(13);
        config.save(&path).unwrap();

        let loaded = DistributionConfig::load(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn unique_pairs_dedups_in_first_seen_order() {
        let pairs = vec![
            ("3001".to_string(), "4".to_string()),
            ("3001".to_string(), "1".to_string()),
            ("3001".to_string(), "4".to_string()),
            ("3022".to_string(), "4".to_string()),
        ];

        let unique = unique_pairs(&pairs);
        assert_eq!(
            unique,
            vec![
                ("3001".to_string(), "4".to_string()),
                ("3001".to_string(), "1".to_string()),
                ("3022".to_string(), "4".to_string()),
            ]
        );
    }
}
