pub mod catalog;
pub mod geojson;
pub mod impact;

pub use catalog::*;
pub use geojson::*;
pub use impact::*;
