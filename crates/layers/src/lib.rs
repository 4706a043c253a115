//! View-side layer management for the prediction viewer.
//!
//! The map widget itself stays behind the [`surface::MapSurface`] adapter;
//! this crate only decides what each layer contains and how it is styled,
//! including the per-region Normal/Highlighted hover state.

pub mod layer;
pub mod overlay;
pub mod region;
pub mod surface;

pub use layer::*;
pub use overlay::*;
pub use region::*;
pub use surface::*;
