use formats::Feature;
use symbology::{BufferZone, ShapeStyle};

/// One fixed-radius circle for the buffer group. Latitude-first, since map
/// widgets take `[lat, lon]` while GeoJSON points arrive `[lon, lat]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: f64,
    pub style: ShapeStyle,
    pub popup: &'static str,
}

/// Builds the policy buffer circles for the site markers: one circle per
/// marker per [`BufferZone`]. Markers without point geometry are skipped.
pub fn buffer_circles(markers: &[Feature]) -> Vec<Circle> {
    let mut circles = Vec::with_capacity(markers.len() * BufferZone::ALL.len());
    for marker in markers {
        let Some((lon, lat)) = marker.point_lon_lat() else {
            continue;
        };
        for zone in BufferZone::ALL {
            circles.push(Circle {
                lat,
                lon,
                radius_m: zone.radius_m(),
                style: zone.style(),
                popup: zone.label(),
            });
        }
    }
    circles
}

#[cfg(test)]
mod tests {
    use formats::{FeatureCollection, SiteOverlay};

    use super::buffer_circles;

    fn overlay_fixture() -> SiteOverlay {
        let fc: FeatureCollection = serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature",
                     "geometry": {"type": "Polygon", "coordinates": []},
                     "properties": {"type": "Boundary"}},
                    {"type": "Feature",
                     "geometry": {"type": "Point", "coordinates": [80.24, 13.05]},
                     "properties": {"type": "Point"}},
                    {"type": "Feature",
                     "geometry": {"type": "Point", "coordinates": [80.25, 13.06]},
                     "properties": {"type": "Point"}}
                ]
            }"#,
        )
        .expect("fixture parses");
        SiteOverlay::split(fc)
    }

    #[test]
    fn two_circles_per_marker() {
        let overlay = overlay_fixture();
        let circles = buffer_circles(&overlay.markers);
        assert_eq!(circles.len(), 4);

        // GeoJSON [lon, lat] flipped to latitude-first.
        assert_eq!(circles[0].lat, 13.05);
        assert_eq!(circles[0].lon, 80.24);
        assert_eq!(circles[0].radius_m, 500.0);
        assert_eq!(circles[0].popup, "Green Buffer Zone");
        assert_eq!(circles[1].radius_m, 300.0);
        assert_eq!(circles[1].popup, "Traffic Management Zone");
    }

    #[test]
    fn markers_without_point_geometry_are_skipped() {
        let overlay = overlay_fixture();
        // Boundary polygons carry no point coordinates.
        assert!(buffer_circles(&overlay.boundaries).is_empty());
    }
}
