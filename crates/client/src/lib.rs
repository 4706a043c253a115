//! Fetch orchestration for the prediction viewer.
//!
//! The controller owns the current view context and refreshes the map when
//! a control changes. Endpoints stay behind the [`api::PredictionApi`]
//! trait; responses are applied only while their request token is still the
//! latest, so a slow response can never overwrite a fresher one.

pub mod api;
pub mod context;
pub mod controller;
pub mod error;

pub use api::*;
pub use context::*;
pub use controller::*;
pub use error::*;
