use classify::{Thresholds, Tier};
use formats::{metric_samples, FeatureCollection};
use symbology::{highlight_style, region_style, ShapeStyle};

use crate::layer::LayerId;

/// One drawable region handed to the map surface: opaque GeoJSON geometry,
/// the style to draw it with, and an optional sticky tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub geometry: serde_json::Value,
    pub style: ShapeStyle,
    pub tooltip: Option<String>,
}

/// Hover state of a single region. Enter moves Normal to Highlighted, exit
/// moves back. There are no other states and no timed reversion.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Normal,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq)]
struct Region {
    geometry: serde_json::Value,
    value: Option<f64>,
    tier: Tier,
    state: HoverState,
}

/// The choropleth layer for one fetch: per-region tier assignments against
/// thresholds computed from that same fetch, plus hover bookkeeping.
///
/// A region missing the selected metric classifies as the top tier (the
/// NaN fall-through of the classifier) and carries no tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLayer {
    id: LayerId,
    metric: String,
    thresholds: Thresholds,
    regions: Vec<Region>,
}

impl RegionLayer {
    /// Classifies every feature of `collection` by `metric`. Thresholds come
    /// from the same collection, so an empty fetch degrades to the all-zero
    /// threshold set instead of failing.
    pub fn build(id: LayerId, collection: &FeatureCollection, metric: &str) -> RegionLayer {
        let samples = metric_samples(collection, metric);
        let thresholds = Thresholds::from_samples(&samples);

        let regions = collection
            .features
            .iter()
            .map(|feature| {
                let value = feature.number(metric);
                Region {
                    geometry: feature.geometry.clone(),
                    value,
                    tier: thresholds.classify(value.unwrap_or(f64::NAN)),
                    state: HoverState::Normal,
                }
            })
            .collect();

        RegionLayer {
            id,
            metric: metric.to_string(),
            thresholds,
            regions,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn tier(&self, region: usize) -> Option<Tier> {
        self.regions.get(region).map(|r| r.tier)
    }

    /// Region count per tier, indexed by [`Tier::index`].
    pub fn tier_counts(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for region in &self.regions {
            counts[region.tier.index()] += 1;
        }
        counts
    }

    pub fn tooltip(&self, region: usize) -> Option<String> {
        let r = self.regions.get(region)?;
        let value = r.value?;
        Some(format!("{}: {value:.2}", self.metric))
    }

    /// Drawable shapes in feature order, all in their base style.
    pub fn shapes(&self) -> Vec<RegionShape> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| RegionShape {
                geometry: r.geometry.clone(),
                style: region_style(r.tier),
                tooltip: self.tooltip(i),
            })
            .collect()
    }

    /// Pointer-enter transition. Returns the highlight style to apply, or
    /// `None` if the region is unknown or already highlighted.
    pub fn pointer_enter(&mut self, region: usize) -> Option<ShapeStyle> {
        let r = self.regions.get_mut(region)?;
        if r.state == HoverState::Highlighted {
            return None;
        }
        r.state = HoverState::Highlighted;
        Some(highlight_style(r.tier))
    }

    /// Pointer-exit transition. Returns the base style to restore, or `None`
    /// if the region is unknown or already in its normal state.
    pub fn pointer_exit(&mut self, region: usize) -> Option<ShapeStyle> {
        let r = self.regions.get_mut(region)?;
        if r.state == HoverState::Normal {
            return None;
        }
        r.state = HoverState::Normal;
        Some(region_style(r.tier))
    }
}

#[cfg(test)]
mod tests {
    use classify::Tier;
    use formats::FeatureCollection;
    use symbology::{highlight_style, region_style};

    use super::{HoverState, RegionLayer};
    use crate::layer::LayerId;

    fn grid(values: &[f64]) -> FeatureCollection {
        let features: Vec<serde_json::Value> = values
            .iter()
            .map(|v| {
                serde_json::json!({
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": []},
                    "properties": {"heat_risk_index": v}
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": features
        }))
        .expect("fixture parses")
    }

    fn layer(values: &[f64]) -> RegionLayer {
        RegionLayer::build(LayerId(0), &grid(values), "heat_risk_index")
    }

    #[test]
    fn assigns_tiers_from_own_sample_set() {
        let layer = layer(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(layer.tier(0), Some(Tier::Q20));
        assert_eq!(layer.tier(3), Some(Tier::Q80));
        assert_eq!(layer.tier(4), Some(Tier::Q100));
        assert_eq!(layer.tier_counts(), [1, 1, 1, 1, 1]);
    }

    #[test]
    fn missing_metric_value_is_top_tier_without_tooltip() {
        let mut fc = grid(&[1.0, 2.0, 3.0]);
        fc.features[1].properties.remove("heat_risk_index");
        let layer = RegionLayer::build(LayerId(0), &fc, "heat_risk_index");

        assert_eq!(layer.tier(1), Some(Tier::Q100));
        assert_eq!(layer.tooltip(1), None);
        assert_eq!(layer.shapes()[1].tooltip, None);
    }

    #[test]
    fn tooltip_formats_two_decimals() {
        let layer = layer(&[0.456]);
        assert_eq!(layer.tooltip(0).as_deref(), Some("heat_risk_index: 0.46"));
    }

    #[test]
    fn hover_round_trip() {
        let mut layer = layer(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let tier = layer.tier(2).unwrap();

        assert_eq!(layer.pointer_enter(2), Some(highlight_style(tier)));
        // Re-entering a highlighted region is a no-op.
        assert_eq!(layer.pointer_enter(2), None);
        assert_eq!(layer.pointer_exit(2), Some(region_style(tier)));
        assert_eq!(layer.pointer_exit(2), None);
        assert_eq!(layer.pointer_enter(99), None);
    }

    #[test]
    fn empty_collection_builds_degenerate_layer() {
        let layer = layer(&[]);
        assert!(layer.is_empty());
        assert_eq!(layer.thresholds(), classify::Thresholds::ZERO);
        assert_eq!(layer.tier_counts(), [0; 5]);
    }

    #[test]
    fn default_hover_state_is_normal() {
        assert_eq!(HoverState::default(), HoverState::Normal);
    }
}
