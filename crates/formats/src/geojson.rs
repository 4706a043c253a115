use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A GeoJSON feature collection as returned by the prediction endpoints.
///
/// Geometry is carried opaquely: the viewer hands polygons to the map widget
/// unmodified and only ever reads coordinates for point markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: serde_json::Value,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Feature {
    /// Reads a named numeric property, accepting any JSON number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(|v| v.as_f64())
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }

    /// Coordinates of a point geometry. GeoJSON order is `[lon, lat]`;
    /// callers drawing circles must flip to latitude-first themselves.
    pub fn point_lon_lat(&self) -> Option<(f64, f64)> {
        if self.geometry.get("type").and_then(|t| t.as_str()) != Some("Point") {
            return None;
        }
        let coords = self.geometry.get("coordinates")?.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lon, lat))
    }
}

/// Collects the sample set for one metric: the named numeric property of
/// every feature that carries one. Recomputed on every fetch, never stored.
pub fn metric_samples(collection: &FeatureCollection, metric: &str) -> Vec<f64> {
    collection
        .features
        .iter()
        .filter_map(|f| f.number(metric))
        .collect()
}

/// Site overlay features split by their `type` property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteOverlay {
    pub boundaries: Vec<Feature>,
    pub markers: Vec<Feature>,
}

impl SiteOverlay {
    /// Splits an overlay collection into boundary polygons and point
    /// markers. Features tagged with any other `type` (or none) are dropped.
    pub fn split(collection: FeatureCollection) -> SiteOverlay {
        let mut overlay = SiteOverlay::default();
        for feature in collection.features {
            match feature.text("type") {
                Some("Boundary") => overlay.boundaries.push(feature),
                Some("Point") => overlay.markers.push(feature),
                _ => {}
            }
        }
        overlay
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty() && self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{metric_samples, FeatureCollection, SiteOverlay};

    fn grid_fixture() -> FeatureCollection {
        serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "geometry": null,
                     "properties": {"heat_risk_index": 0.7, "traffic": 120}},
                    {"type": "Feature", "geometry": null,
                     "properties": {"heat_risk_index": 0.2}},
                    {"type": "Feature", "geometry": null,
                     "properties": {"traffic": 95}}
                ]
            }"#,
        )
        .expect("fixture parses")
    }

    #[test]
    fn metric_samples_skip_features_without_the_metric() {
        let fc = grid_fixture();
        assert_eq!(metric_samples(&fc, "heat_risk_index"), vec![0.7, 0.2]);
        assert_eq!(metric_samples(&fc, "traffic"), vec![120.0, 95.0]);
        assert_eq!(metric_samples(&fc, "pm25"), Vec::<f64>::new());
    }

    #[test]
    fn overlay_split_by_type_property() {
        let fc: FeatureCollection = serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature",
                     "geometry": {"type": "Polygon", "coordinates": []},
                     "properties": {"type": "Boundary", "name": "Proposed IT Park"}},
                    {"type": "Feature",
                     "geometry": {"type": "Point", "coordinates": [80.24, 13.05]},
                     "properties": {"type": "Point"}},
                    {"type": "Feature", "geometry": null,
                     "properties": {"type": "Other"}}
                ]
            }"#,
        )
        .expect("fixture parses");

        let overlay = SiteOverlay::split(fc);
        assert_eq!(overlay.boundaries.len(), 1);
        assert_eq!(overlay.markers.len(), 1);
        assert_eq!(
            overlay.markers[0].point_lon_lat(),
            Some((80.24, 13.05))
        );
    }

    #[test]
    fn point_lon_lat_rejects_non_point_geometry() {
        let fc = grid_fixture();
        assert_eq!(fc.features[0].point_lon_lat(), None);
    }

    #[test]
    fn missing_members_default_cleanly() {
        let fc: FeatureCollection = serde_json::from_str(r#"{"features": []}"#).expect("parses");
        assert_eq!(fc.kind, "FeatureCollection");
        assert!(fc.features.is_empty());
    }
}
