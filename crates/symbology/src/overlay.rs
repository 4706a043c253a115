use crate::style::ShapeStyle;

/// Style for the development-site boundary polygon: solid black, heavy
/// border, fully opaque fill so it reads over the choropleth.
pub fn boundary_style() -> ShapeStyle {
    ShapeStyle {
        stroke: Some("#000000"),
        weight: 3.0,
        opacity: 1.0,
        fill_color: "#000000",
        fill_opacity: 1.0,
    }
}

/// Fixed-radius policy buffer drawn around each site marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferZone {
    /// Green cover buffer, 500 m.
    Green,
    /// Traffic management buffer, 300 m.
    Traffic,
}

impl BufferZone {
    pub const ALL: [BufferZone; 2] = [BufferZone::Green, BufferZone::Traffic];

    pub fn radius_m(self) -> f64 {
        match self {
            BufferZone::Green => 500.0,
            BufferZone::Traffic => 300.0,
        }
    }

    /// Popup label bound to the circle.
    pub fn label(self) -> &'static str {
        match self {
            BufferZone::Green => "Green Buffer Zone",
            BufferZone::Traffic => "Traffic Management Zone",
        }
    }

    pub fn style(self) -> ShapeStyle {
        let color = match self {
            BufferZone::Green => "green",
            BufferZone::Traffic => "blue",
        };
        ShapeStyle {
            stroke: Some(color),
            weight: 1.0,
            opacity: 1.0,
            fill_color: color,
            fill_opacity: 0.6,
        }
    }
}
