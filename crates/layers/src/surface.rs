use std::collections::BTreeSet;

use formats::Feature;
use symbology::ShapeStyle;

use crate::layer::LayerId;
use crate::overlay::Circle;
use crate::region::RegionShape;

/// Adapter over a concrete map widget.
///
/// The controller only ever talks to the map through this trait, so the
/// classification and styling logic stays independent of any rendering
/// library. Pointer interaction flows the other way: the widget adapter
/// forwards per-region enter/exit events to the controller, which answers
/// with a restyle through [`MapSurface::set_region_style`].
pub trait MapSurface {
    /// Adds the choropleth polygon layer, one shape per grid feature.
    fn add_region_layer(&mut self, id: LayerId, shapes: Vec<RegionShape>);

    /// Adds boundary polygons drawn with a single shared style.
    fn add_boundary_layer(&mut self, id: LayerId, features: Vec<Feature>, style: ShapeStyle);

    /// Adds a group of fixed-radius circles.
    fn add_circle_layer(&mut self, id: LayerId, circles: Vec<Circle>);

    /// Removes a layer. Unknown ids are ignored; a remove for a layer that
    /// was already replaced must not disturb the replacement.
    fn remove_layer(&mut self, id: LayerId);

    fn bring_to_front(&mut self, id: LayerId);

    /// Restyles one region of a region layer (hover highlight / revert).
    fn set_region_style(&mut self, id: LayerId, region: usize, style: ShapeStyle);
}

/// Everything a [`RecordingSurface`] saw, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    AddRegions { id: LayerId, shapes: usize },
    AddBoundary { id: LayerId, features: usize },
    AddCircles { id: LayerId, circles: usize },
    Remove { id: LayerId },
    BringToFront { id: LayerId },
    Restyle { id: LayerId, region: usize, style: ShapeStyle },
}

/// In-memory surface for tests and the headless CLI: records the op stream
/// and tracks which layers are currently live.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    live: BTreeSet<LayerId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn live_layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.live.iter().copied()
    }

    pub fn is_live(&self, id: LayerId) -> bool {
        self.live.contains(&id)
    }
}

impl MapSurface for RecordingSurface {
    fn add_region_layer(&mut self, id: LayerId, shapes: Vec<RegionShape>) {
        self.live.insert(id);
        self.ops.push(SurfaceOp::AddRegions {
            id,
            shapes: shapes.len(),
        });
    }

    fn add_boundary_layer(&mut self, id: LayerId, features: Vec<Feature>, _style: ShapeStyle) {
        self.live.insert(id);
        self.ops.push(SurfaceOp::AddBoundary {
            id,
            features: features.len(),
        });
    }

    fn add_circle_layer(&mut self, id: LayerId, circles: Vec<Circle>) {
        self.live.insert(id);
        self.ops.push(SurfaceOp::AddCircles {
            id,
            circles: circles.len(),
        });
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.live.remove(&id);
        self.ops.push(SurfaceOp::Remove { id });
    }

    fn bring_to_front(&mut self, id: LayerId) {
        self.ops.push(SurfaceOp::BringToFront { id });
    }

    fn set_region_style(&mut self, id: LayerId, region: usize, style: ShapeStyle) {
        self.ops.push(SurfaceOp::Restyle { id, region, style });
    }
}

#[cfg(test)]
mod tests {
    use super::{MapSurface, RecordingSurface, SurfaceOp};
    use crate::layer::LayerId;

    #[test]
    fn tracks_live_layers_across_replacement() {
        let mut surface = RecordingSurface::new();
        let old = LayerId(1);
        let new = LayerId(2);

        surface.add_region_layer(old, Vec::new());
        surface.remove_layer(old);
        surface.add_region_layer(new, Vec::new());

        assert!(!surface.is_live(old));
        assert!(surface.is_live(new));
        assert_eq!(surface.ops().len(), 3);
        assert_eq!(surface.ops()[1], SurfaceOp::Remove { id: old });
    }
}
