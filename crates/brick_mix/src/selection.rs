//! Selection utilities for drawing a [crate::distribution::DistributionItem] from a weighted set.
//!
//! This module provides the low-level pick helpers used by
//! [crate::distribution::WeightedDistribution::sample]:
//! - [pick_weighted_random]: draws proportionally to the supplied weights.
//! - [pick_uniform_random]: draws each item with equal probability; the sampler
//!   uses it when every weight in a distribution is zero.
//!
//! Both take an RNG implementing [rand::RngCore], so callers can thread one
//! deterministic stream through many draws.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::distribution::DistributionItem;

/// Create the generator for a single sampling pass.
///
/// A supplied seed yields a reproducible stream private to that pass; without
/// one the stream is seeded from the operating system.
pub(crate) fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Draw one item with probability proportional to its weight.
///
/// `weights` pairs positionally with `items`. Returns `None` when the slices
/// are empty or mismatched, or when the total weight is not positive.
/// Zero-weight items are never selected.
pub fn pick_weighted_random<'a, R: RngCore>(
    items: &'a [DistributionItem],
    weights: &[f64],
    rng: &mut R,
) -> Option<&'a DistributionItem> {
    if items.is_empty() || items.len() != weights.len() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let mut roll = rand01(rng) * total;
    for (item, weight) in items.iter().zip(weights) {
        roll -= weight;
        if roll < 0.0 {
            return Some(item);
        }
    }

    // Accumulated rounding can leave a sliver of roll; take the last item
    // that actually carries weight.
    items
        .iter()
        .zip(weights)
        .rev()
        .find(|(_, weight)| **weight > 0.0)
        .map(|(item, _)| item)
}

/// Draw one item with equal probability for every entry, weights ignored.
pub fn pick_uniform_random<'a, R: RngCore>(
    items: &'a [DistributionItem],
    rng: &mut R,
) -> Option<&'a DistributionItem> {
    if items.is_empty() {
        return None;
    }

    let index = (rand01(rng) * items.len() as f64) as usize;
    items.get(index.min(items.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, weight: f64) -> DistributionItem {
        DistributionItem::new(id, id.to_uppercase(), weight)
    }

    struct FixedRng {
        value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn weighted_random_selects_by_probability() {
        let items = vec![item("a", 0.7), item("b", 0.3)];
        let weights = [0.7, 0.3];

        let mut rng_first = FixedRng { value: 0 };
        assert_eq!(
            pick_weighted_random(&items, &weights, &mut rng_first).unwrap().id,
            "a"
        );

        let mut rng_second = FixedRng {
            value: (0.8 * u64::MAX as f64) as u64,
        };
        assert_eq!(
            pick_weighted_random(&items, &weights, &mut rng_second).unwrap().id,
            "b"
        );
    }

    #[test]
    fn weighted_random_skips_zero_weight_entries() {
        let items = vec![item("zero", 0.0), item("only", 1.0)];
        let weights = [0.0, 1.0];

        // A roll of exactly 0.0 must not land on the weightless first entry.
        let mut rng = FixedRng { value: 0 };
        assert_eq!(
            pick_weighted_random(&items, &weights, &mut rng).unwrap().id,
            "only"
        );
    }

    #[test]
    fn weighted_random_none_on_degenerate_input() {
        let mut rng = FixedRng { value: 0 };

        assert!(pick_weighted_random(&[], &[], &mut rng).is_none());

        let items = vec![item("a", 0.0)];
        assert!(pick_weighted_random(&items, &[0.0], &mut rng).is_none());
        assert!(pick_weighted_random(&items, &[0.5, 0.5], &mut rng).is_none());
    }

    #[test]
    fn uniform_random_spans_the_slice() {
        let items = vec![item("a", 0.0), item("b", 0.0)];

        let mut rng_low = FixedRng { value: 0 };
        assert_eq!(pick_uniform_random(&items, &mut rng_low).unwrap().id, "a");

        let mut rng_high = FixedRng { value: u64::MAX };
        assert_eq!(pick_uniform_random(&items, &mut rng_high).unwrap().id, "b");
    }

    #[test]
    fn uniform_random_none_on_empty() {
        let mut rng = FixedRng { value: 0 };
        assert!(pick_uniform_random(&[], &mut rng).is_none());
    }

    #[test]
    fn rand01_stays_in_unit_interval() {
        for value in [0, 1, u64::MAX / 2, u64::MAX - 1, u64::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!((0.0..1.0).contains(&result), "rand01({value}) = {result}");
        }
    }
}
