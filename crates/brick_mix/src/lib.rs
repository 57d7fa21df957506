#![forbid(unsafe_code)]
//! brick_mix: weighted part/color distributions for synthetic brick dataset generation.
//!
//! Modules:
//! - distribution: weighted item sets, normalization, seeded sampling, expected counts, JSON persistence
//! - config: part/color dataset configuration and (part, color) pair generation
//! - selection: low-level weighted/uniform pick helpers over item slices
//! - presets: ready-made part and color catalogs
pub mod config;
pub mod distribution;
pub mod error;
mod persist;
pub mod presets;
pub mod selection;

/// Convenient re-exports for common types. Import with `use brick_mix::prelude::*;`.
pub mod prelude {
    pub use crate::config::{unique_pairs, ColorId, DistributionConfig, PartId};
    pub use crate::distribution::{DistributionItem, WeightedDistribution};
    pub use crate::error::{Error, Result};
    pub use crate::presets::{common_colors, common_parts};
    pub use crate::selection::{pick_uniform_random, pick_weighted_random};
}
