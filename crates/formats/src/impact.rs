use serde::{Deserialize, Serialize};

/// Average change inside the development zone between the "Before" and
/// "After" runs for the same year. Units follow the metric catalog:
/// degrees Celsius, vehicle count, micrograms per cubic meter, percent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DeltaMetrics {
    #[serde(default)]
    pub temperature_rise: f64,
    #[serde(default)]
    pub traffic_increase: f64,
    #[serde(default)]
    pub pm25_worsening: f64,
    #[serde(default)]
    pub green_cover_loss: f64,
}

/// Impact-analysis response for one year: zone deltas, a severity
/// descriptor and an ordered list of mitigation recommendations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImpactReport {
    #[serde(default)]
    pub delta_metrics: DeltaMetrics,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ImpactReport;

    #[test]
    fn decodes_full_report() {
        let report: ImpactReport = serde_json::from_str(
            r#"{
                "delta_metrics": {
                    "temperature_rise": 1.52,
                    "traffic_increase": 903.0,
                    "pm25_worsening": 4.18,
                    "green_cover_loss": 19.8
                },
                "severity": "High",
                "recommendations": ["Green buffers", "Traffic management", "Cool roofs"]
            }"#,
        )
        .expect("report parses");

        assert_eq!(report.delta_metrics.temperature_rise, 1.52);
        assert_eq!(report.severity, "High");
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn missing_members_default_to_empty() {
        // The analysis endpoint returns empty deltas when the development
        // zone matches no grid cells; the panel still renders.
        let report: ImpactReport =
            serde_json::from_str(r#"{"severity": "Low"}"#).expect("parses");
        assert_eq!(report.delta_metrics.traffic_increase, 0.0);
        assert!(report.recommendations.is_empty());
    }
}
