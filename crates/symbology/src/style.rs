use classify::Tier;

/// Renderer-agnostic style for a map shape: stroke, stroke weight, stroke
/// opacity, fill color and fill opacity. Color tokens are CSS color strings
/// so any widget adapter can consume them directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub stroke: Option<&'static str>,
    pub weight: f32,
    pub opacity: f32,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
}

/// Fixed five-entry palette, green through dark red by severity.
pub fn fill_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Q20 => "#2ECC71",
        Tier::Q40 => "#F1C40F",
        Tier::Q60 => "#E67E22",
        Tier::Q80 => "#E74C3C",
        Tier::Q100 => "#7B241C",
    }
}

/// Base style for a prediction-grid region: tier fill at partial opacity,
/// no border. A presentation default, distinct from classifier logic.
pub fn region_style(tier: Tier) -> ShapeStyle {
    ShapeStyle {
        stroke: None,
        weight: 0.0,
        opacity: 1.0,
        fill_color: fill_color(tier),
        fill_opacity: 0.1,
    }
}

/// Hover style for a region: white border and a near-opaque fill, keeping
/// the tier fill color. Reverted to [`region_style`] on pointer-exit.
pub fn highlight_style(tier: Tier) -> ShapeStyle {
    ShapeStyle {
        stroke: Some("#FFFFFF"),
        weight: 2.0,
        opacity: 1.0,
        fill_color: fill_color(tier),
        fill_opacity: 0.9,
    }
}
