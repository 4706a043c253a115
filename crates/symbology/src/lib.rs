//! Fixed visual encodings for the prediction viewer.
//!
//! Everything here is a stateless lookup: tier palette, region fill and
//! highlight styles, overlay styles for the site boundary and policy buffer
//! circles, and the legend rows. No symbology is ever recomputed from data;
//! only the classifier's tier assignment varies per fetch.

pub mod legend;
pub mod overlay;
pub mod style;

pub use legend::*;
pub use overlay::*;
pub use style::*;
