//! Weighted distributions of identifiable items: registration, normalization,
//! seeded sampling with replacement, expected-count estimates, and JSON
//! persistence.
use std::collections::HashMap;
use std::path::Path;

use rand::RngCore;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::persist;
use crate::selection::{pick_uniform_random, pick_weighted_random, rng_for_seed};

/// One candidate value in a weighted set, identified by an opaque id.
///
/// Ids act as lookup keys but are not deduplicated on insertion; see
/// [WeightedDistribution] for how the lookup and removal operations treat
/// duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionItem {
    /// Opaque identifier, unique by convention within its owning distribution.
    pub id: String,
    /// Display label; carried through serialization, never used as a key.
    pub name: String,
    weight: f64,
}

impl DistributionItem {
    /// Create an item with the given weight. Negative weights clamp to 0.0.
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight: weight.max(0.0),
        }
    }

    /// Current weight, always >= 0.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the weight. Negative inputs clamp to 0.0 rather than erroring,
    /// so upstream sliders and hand-edited files cannot produce an invalid
    /// state.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight.max(0.0);
    }

    /// Plain-mapping representation: `{"id", "name", "weight"}`.
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "weight": self.weight,
        })
    }

    /// Build an item from its plain-mapping representation.
    ///
    /// `weight` defaults to 1.0 when absent, which keeps files written before
    /// the field existed loadable.
    pub fn from_value(value: &Value) -> Result<Self> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .ok_or(Error::MissingField("id"))?;
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or(Error::MissingField("name"))?;
        let weight = value.get("weight").and_then(Value::as_f64).unwrap_or(1.0);
        Ok(Self::new(id, name, weight))
    }
}

/// Ordered collection of [DistributionItem]s with weighted sampling.
///
/// Insertion order is preserved for serialization stability; it has no effect
/// on sampling. Ids are not enforced unique: [WeightedDistribution::remove_item]
/// removes every match, while [WeightedDistribution::get_item] and
/// [WeightedDistribution::set_weight] act on the first.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedDistribution {
    pub items: Vec<DistributionItem>,
}

impl WeightedDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a distribution from a list of items.
    pub fn from_items(items: Vec<DistributionItem>) -> Self {
        Self { items }
    }

    /// Append an item; duplicate ids are not checked.
    pub fn add_item(&mut self, id: impl Into<String>, name: impl Into<String>, weight: f64) {
        self.items.push(DistributionItem::new(id, name, weight));
    }

    /// Remove every item whose id matches.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// First item whose id matches, if any.
    pub fn get_item(&self, id: &str) -> Option<&DistributionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Set the weight of the first item whose id matches; no-op when the id is
    /// absent. Negative weights clamp to 0.0.
    pub fn set_weight(&mut self, id: &str, weight: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.set_weight(weight);
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the distribution holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(DistributionItem::weight).sum()
    }

    /// Per-item weights scaled to sum to 1.0, in item order.
    ///
    /// Returns an empty vec when the distribution is empty or every weight is
    /// zero; [WeightedDistribution::sample] treats that as the signal to draw
    /// uniformly instead.
    pub fn normalized_weights(&self) -> Vec<f64> {
        let total = self.total_weight();
        if total == 0.0 {
            return Vec::new();
        }
        self.items.iter().map(|item| item.weight() / total).collect()
    }

    /// Scale every weight in place so they sum to 1.0.
    ///
    /// Returns `false` and leaves the weights untouched when the total is zero.
    pub fn normalize(&mut self) -> bool {
        let total = self.total_weight();
        if total == 0.0 {
            warn!("cannot normalize: total weight is 0");
            return false;
        }
        for item in &mut self.items {
            let scaled = item.weight() / total;
            item.set_weight(scaled);
        }
        true
    }

    /// Draw `count` items with replacement.
    ///
    /// A seed makes the draw reproducible through a generator private to this
    /// call; concurrent draws on other distributions are unaffected. When
    /// every weight is zero the items are drawn uniformly, and an empty
    /// distribution yields an empty vec regardless of `count`.
    pub fn sample(&self, count: usize, seed: Option<u64>) -> Vec<DistributionItem> {
        let mut rng = rng_for_seed(seed);
        self.sample_with(count, &mut rng)
    }

    /// Draw `count` items with replacement using a caller-supplied RNG.
    pub fn sample_with<R: RngCore>(&self, count: usize, rng: &mut R) -> Vec<DistributionItem> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let weights = self.normalized_weights();
        if weights.is_empty() {
            warn!("all weights are 0; sampling uniformly");
        }

        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let picked = if weights.is_empty() {
                pick_uniform_random(&self.items, rng)
            } else {
                pick_weighted_random(&self.items, &weights, rng)
            };
            if let Some(item) = picked {
                out.push(item.clone());
            }
        }

        out
    }

    /// Estimated per-item counts for a draw of `total` pieces.
    ///
    /// Each count is `normalized_weight * total` rounded half-to-even, so the
    /// values need not sum to `total`; treat this as a display estimate, not
    /// an allocation. Empty when every weight is zero.
    pub fn expected_counts(&self, total: usize) -> HashMap<String, usize> {
        let normalized = self.normalized_weights();
        let mut counts = HashMap::with_capacity(normalized.len());
        for (item, weight) in self.items.iter().zip(normalized) {
            let count = (weight * total as f64).round_ties_even() as usize;
            counts.insert(item.id.clone(), count);
        }
        counts
    }

    /// Plain-mapping representation: `{"items": [...]}`.
    pub fn to_value(&self) -> Value {
        json!({
            "items": self.items.iter().map(DistributionItem::to_value).collect::<Vec<_>>(),
        })
    }

    /// Build a distribution from its plain-mapping representation.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = value
            .get("items")
            .and_then(Value::as_array)
            .ok_or(Error::MissingField("items"))?;
        let items = entries
            .iter()
            .map(DistributionItem::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_items(items))
    }

    /// Write the distribution to `path` as pretty-printed UTF-8 JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        persist::write_value(path.as_ref(), &self.to_value())
    }

    /// Read a distribution from a JSON file written by
    /// [WeightedDistribution::save].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_value(&persist::read_value(path.as_ref())?)
    }
}
