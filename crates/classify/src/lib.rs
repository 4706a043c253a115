//! Quantile bucketing for choropleth symbology.
//!
//! Thresholds are order statistics of the metric sample set (nearest-rank,
//! not interpolated), so they are non-decreasing by construction and
//! deterministic for a given input.

pub mod quantile;

pub use quantile::*;
