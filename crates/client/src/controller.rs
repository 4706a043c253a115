use std::sync::Arc;

use formats::{FeatureCollection, ImpactReport, Scenario, SiteOverlay};
use layers::{buffer_circles, LayerId, LayerIdAlloc, MapSurface, RegionLayer};
use symbology::boundary_style;
use tracing::{debug, warn};

use crate::api::PredictionApi;
use crate::context::{ControlEvent, ViewContext};
use crate::error::ApiError;

/// Identifies one refresh. Monotonically increasing; a response is applied
/// only while its token is still the latest, so overlapping fetches cannot
/// put stale data over fresher data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Impact-analysis side panel state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactPanel {
    visible: bool,
    report: Option<ImpactReport>,
    failed: bool,
}

impl ImpactPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn report(&self) -> Option<&ImpactReport> {
        self.report.as_ref()
    }

    /// True when the panel is shown but the analysis fetch failed.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// Owns the view context and the rendered layers, and drives refreshes.
///
/// The async [`MapController::refresh`] runs the whole fetch/apply sequence;
/// adapters that schedule fetches themselves can instead call
/// [`MapController::begin_refresh`] and the `apply_*` methods, which enforce
/// the same request-token guard.
pub struct MapController<S: MapSurface> {
    api: Arc<dyn PredictionApi>,
    surface: S,
    ids: LayerIdAlloc,
    ctx: ViewContext,
    latest: u64,
    loading: bool,
    status: Option<String>,
    grid: Option<RegionLayer>,
    boundary: Option<LayerId>,
    buffers: Option<LayerId>,
    panel: ImpactPanel,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(api: Arc<dyn PredictionApi>, surface: S) -> Self {
        Self::with_context(api, surface, ViewContext::default())
    }

    /// Builds a controller whose first refresh will use `ctx` instead of
    /// the default view.
    pub fn with_context(api: Arc<dyn PredictionApi>, surface: S, ctx: ViewContext) -> Self {
        Self {
            api,
            surface,
            ids: LayerIdAlloc::new(),
            ctx,
            latest: 0,
            loading: false,
            status: None,
            grid: None,
            boundary: None,
            buffers: None,
            panel: ImpactPanel::default(),
        }
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn grid(&self) -> Option<&RegionLayer> {
        self.grid.as_ref()
    }

    pub fn panel(&self) -> &ImpactPanel {
        &self.panel
    }

    /// Non-blocking user-facing message from the last failed refresh, if
    /// any. Cleared when a new refresh starts.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Applies a control event and refreshes the whole view.
    pub async fn handle(&mut self, event: ControlEvent) {
        self.ctx.apply(&event);
        self.refresh().await;
    }

    /// Full refresh for the current view context: prediction grid always;
    /// site overlay and impact report only in the "After" scenario.
    pub async fn refresh(&mut self) {
        let token = self.begin_refresh();
        let ctx = self.ctx.clone();
        let api = Arc::clone(&self.api);

        match api.fetch_predictions(ctx.year, ctx.scenario).await {
            Ok(collection) => {
                if !self.apply_grid(token, &collection) {
                    return;
                }
            }
            Err(err) => {
                self.fail(token, "prediction fetch", &err);
                return;
            }
        }

        if ctx.scenario == Scenario::After {
            // Overlay and report failures are non-fatal: the grid already
            // rendered and stays up.
            match api.fetch_site_overlay().await {
                Ok(collection) => {
                    self.apply_overlay(token, SiteOverlay::split(collection));
                }
                Err(err) => warn!("site overlay fetch failed: {err}"),
            }

            match api.fetch_impact_report(ctx.year).await {
                Ok(report) => {
                    self.apply_impact(token, report);
                }
                Err(err) => {
                    warn!("impact analysis fetch failed: {err}");
                    self.mark_impact_failed(token);
                }
            }
        } else {
            self.hide_panel(token);
        }

        self.finish(token);
    }

    /// Starts a refresh: bumps the token, raises the loading indicator and
    /// clears the previous status message.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        self.status = None;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Applies a prediction-grid response. Replaces the region layer and
    /// clears any site overlays; returns `false` (changing nothing) if a
    /// newer refresh started since `token` was issued.
    pub fn apply_grid(&mut self, token: RequestToken, collection: &FeatureCollection) -> bool {
        if !self.is_current(token) {
            debug!("discarding stale prediction response");
            return false;
        }

        if let Some(old) = self.grid.take() {
            self.surface.remove_layer(old.id());
        }
        self.clear_overlays();

        let layer = RegionLayer::build(self.ids.next(), collection, &self.ctx.metric);
        self.surface.add_region_layer(layer.id(), layer.shapes());
        self.grid = Some(layer);
        true
    }

    /// Applies the site overlay: boundary polygons (brought to front) plus
    /// the policy buffer circle group.
    pub fn apply_overlay(&mut self, token: RequestToken, overlay: SiteOverlay) -> bool {
        if !self.is_current(token) {
            debug!("discarding stale overlay response");
            return false;
        }

        if !overlay.boundaries.is_empty() {
            let id = self.ids.next();
            self.surface
                .add_boundary_layer(id, overlay.boundaries, boundary_style());
            self.surface.bring_to_front(id);
            self.boundary = Some(id);
        }

        let circles = buffer_circles(&overlay.markers);
        if !circles.is_empty() {
            let id = self.ids.next();
            self.surface.add_circle_layer(id, circles);
            self.buffers = Some(id);
        }
        true
    }

    /// Shows the impact panel with a fresh report.
    pub fn apply_impact(&mut self, token: RequestToken, report: ImpactReport) -> bool {
        if !self.is_current(token) {
            debug!("discarding stale impact report");
            return false;
        }
        self.panel = ImpactPanel {
            visible: true,
            report: Some(report),
            failed: false,
        };
        true
    }

    /// Shows the impact panel in its failed state (report unavailable).
    pub fn mark_impact_failed(&mut self, token: RequestToken) {
        if !self.is_current(token) {
            return;
        }
        self.panel = ImpactPanel {
            visible: true,
            report: None,
            failed: true,
        };
    }

    pub fn hide_panel(&mut self, token: RequestToken) {
        if !self.is_current(token) {
            return;
        }
        self.panel = ImpactPanel::default();
    }

    /// Records a refresh failure: logged, surfaced as a status message,
    /// never retried. Stale failures are ignored entirely.
    pub fn fail(&mut self, token: RequestToken, what: &str, err: &ApiError) {
        warn!("{what} failed: {err}");
        if !self.is_current(token) {
            return;
        }
        self.status = Some("Error".to_string());
        self.loading = false;
    }

    /// Lowers the loading indicator if `token` is still the latest refresh.
    pub fn finish(&mut self, token: RequestToken) {
        if self.is_current(token) {
            self.loading = false;
        }
    }

    /// Pointer-enter over a grid region: highlight it on the surface.
    pub fn pointer_enter(&mut self, region: usize) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        if let Some(style) = grid.pointer_enter(region) {
            self.surface.set_region_style(grid.id(), region, style);
        }
    }

    /// Pointer-exit over a grid region: revert it to its base style.
    pub fn pointer_exit(&mut self, region: usize) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        if let Some(style) = grid.pointer_exit(region) {
            self.surface.set_region_style(grid.id(), region, style);
        }
    }

    fn clear_overlays(&mut self) {
        if let Some(id) = self.boundary.take() {
            self.surface.remove_layer(id);
        }
        if let Some(id) = self.buffers.take() {
            self.surface.remove_layer(id);
        }
    }
}
