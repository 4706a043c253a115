use formats::{Scenario, DEFAULT_METRIC, DEFAULT_YEAR};

/// Current query parameters, owned by the controller and updated only in
/// response to control events. Fetch and render operations take these
/// explicitly; nothing reads them from ambient globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    pub metric: String,
    pub year: i32,
    pub scenario: Scenario,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            metric: DEFAULT_METRIC.to_string(),
            year: DEFAULT_YEAR,
            scenario: Scenario::Before,
        }
    }
}

/// A user control change. Every variant triggers a full refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    MetricSelected(String),
    YearChanged(i32),
    ScenarioToggled(bool),
}

impl ViewContext {
    pub fn apply(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::MetricSelected(metric) => self.metric = metric.clone(),
            ControlEvent::YearChanged(year) => self.year = *year,
            ControlEvent::ScenarioToggled(checked) => {
                self.scenario = Scenario::from_toggle(*checked)
            }
        }
    }
}
