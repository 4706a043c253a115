//! Access to the prediction service endpoints.
//!
//! `PredictionApi` is the seam between the controller and the network:
//! an HTTP implementation for the real service and an in-memory one for
//! tests and offline use. Methods return boxed futures for
//! dyn-compatibility.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use formats::{FeatureCollection, ImpactReport, Scenario};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The three endpoints the viewer consumes.
///
/// Implementations must be `Send + Sync` for use across async tasks.
pub trait PredictionApi: Send + Sync {
    /// Prediction grid for a (year, scenario) query pair.
    fn fetch_predictions(
        &self,
        year: i32,
        scenario: Scenario,
    ) -> BoxFuture<'_, Result<FeatureCollection, ApiError>>;

    /// Development-site overlay features (boundary polygon + point
    /// markers), static with respect to the query parameters.
    fn fetch_site_overlay(&self) -> BoxFuture<'_, Result<FeatureCollection, ApiError>>;

    /// Before/after impact analysis for a year.
    fn fetch_impact_report(&self, year: i32) -> BoxFuture<'_, Result<ImpactReport, ApiError>>;
}

/// HTTP implementation over the prediction service's JSON API.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: String) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::with_source(format!("request to {url} failed"), e))?;

        if !resp.status().is_success() {
            return Err(ApiError::new(format!(
                "{url} returned HTTP {}",
                resp.status()
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::with_source(format!("decoding {url} response failed"), e))
    }
}

impl PredictionApi for HttpApi {
    fn fetch_predictions(
        &self,
        year: i32,
        scenario: Scenario,
    ) -> BoxFuture<'_, Result<FeatureCollection, ApiError>> {
        Box::pin(async move {
            self.get_json(format!("/api/predictions?year={year}&scenario={scenario}"))
                .await
        })
    }

    fn fetch_site_overlay(&self) -> BoxFuture<'_, Result<FeatureCollection, ApiError>> {
        Box::pin(async move { self.get_json("/api/it-park".to_string()).await })
    }

    fn fetch_impact_report(&self, year: i32) -> BoxFuture<'_, Result<ImpactReport, ApiError>> {
        Box::pin(async move {
            self.get_json(format!("/api/impact-analysis?year={year}"))
                .await
        })
    }
}

/// In-memory API for tests and the headless CLI: canned responses with
/// optional injected failures, plus a log of the queries received.
#[derive(Debug, Default)]
pub struct MemoryApi {
    predictions: FeatureCollection,
    overlay: FeatureCollection,
    report: ImpactReport,
    fail_predictions: bool,
    fail_overlay: bool,
    fail_report: bool,
    calls: Mutex<Vec<String>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_predictions(mut self, collection: FeatureCollection) -> Self {
        self.predictions = collection;
        self
    }

    pub fn with_overlay(mut self, collection: FeatureCollection) -> Self {
        self.overlay = collection;
        self
    }

    pub fn with_report(mut self, report: ImpactReport) -> Self {
        self.report = report;
        self
    }

    pub fn failing_predictions(mut self) -> Self {
        self.fail_predictions = true;
        self
    }

    pub fn failing_overlay(mut self) -> Self {
        self.fail_overlay = true;
        self
    }

    pub fn failing_report(mut self) -> Self {
        self.fail_report = true;
        self
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl PredictionApi for MemoryApi {
    fn fetch_predictions(
        &self,
        year: i32,
        scenario: Scenario,
    ) -> BoxFuture<'_, Result<FeatureCollection, ApiError>> {
        self.record(format!("predictions year={year} scenario={scenario}"));
        let result = if self.fail_predictions {
            Err(ApiError::new("injected prediction failure"))
        } else {
            Ok(self.predictions.clone())
        };
        Box::pin(async move { result })
    }

    fn fetch_site_overlay(&self) -> BoxFuture<'_, Result<FeatureCollection, ApiError>> {
        self.record("site-overlay".to_string());
        let result = if self.fail_overlay {
            Err(ApiError::new("injected overlay failure"))
        } else {
            Ok(self.overlay.clone())
        };
        Box::pin(async move { result })
    }

    fn fetch_impact_report(&self, year: i32) -> BoxFuture<'_, Result<ImpactReport, ApiError>> {
        self.record(format!("impact year={year}"));
        let result = if self.fail_report {
            Err(ApiError::new("injected report failure"))
        } else {
            Ok(self.report.clone())
        };
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use formats::Scenario;

    use super::{HttpApi, MemoryApi, PredictionApi};

    #[test]
    fn http_api_trims_trailing_slash() {
        let api = HttpApi::new("http://127.0.0.1:5000/");
        assert_eq!(api.base_url(), "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn memory_api_records_queries() {
        let api = MemoryApi::new();
        let _ = api.fetch_predictions(2030, Scenario::After).await;
        let _ = api.fetch_impact_report(2030).await;
        assert_eq!(
            api.calls(),
            vec![
                "predictions year=2030 scenario=After".to_string(),
                "impact year=2030".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn injected_failures_surface_as_errors() {
        let api = MemoryApi::new().failing_overlay();
        assert!(api.fetch_site_overlay().await.is_err());
        assert!(api.fetch_predictions(2025, Scenario::Before).await.is_ok());
    }
}
