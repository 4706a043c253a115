use classify::Tier;

use crate::style::fill_color;

/// One legend row: a color swatch plus a coarse severity label.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub label: &'static str,
    pub swatch: &'static str,
}

/// The legend samples three of the five tiers (low / high / extreme); the
/// intermediate colors are left to the map itself.
pub fn legend_rows() -> [LegendRow; 3] {
    [
        LegendRow {
            label: "Low",
            swatch: fill_color(Tier::Q20),
        },
        LegendRow {
            label: "High",
            swatch: fill_color(Tier::Q60),
        },
        LegendRow {
            label: "Extreme",
            swatch: fill_color(Tier::Q100),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::legend_rows;
    use crate::style::fill_color;
    use classify::Tier;

    #[test]
    fn legend_samples_low_high_extreme() {
        let rows = legend_rows();
        assert_eq!(rows[0].label, "Low");
        assert_eq!(rows[0].swatch, fill_color(Tier::Q20));
        assert_eq!(rows[1].swatch, fill_color(Tier::Q60));
        assert_eq!(rows[2].label, "Extreme");
        assert_eq!(rows[2].swatch, fill_color(Tier::Q100));
    }
}
