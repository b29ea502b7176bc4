//! Draw-order policy
//!
//! Z-priority is a pure function of a layer's category and geometry. It never
//! depends on which location a layer belongs to or when it was attached, which
//! keeps the visual stack stable:
//! areas < context < anchors < routes < story points < points of interest.

use crate::domain::value_objects::{GeometryKind, LayerCategory, ZPriority};

pub const AREA: ZPriority = ZPriority::new(100);
pub const CONTEXT: ZPriority = ZPriority::new(200);
pub const ANCHOR: ZPriority = ZPriority::new(300);
pub const NARRATIVE: ZPriority = ZPriority::new(350);
pub const ROUTE: ZPriority = ZPriority::new(400);
pub const STORY_POINT: ZPriority = ZPriority::new(550);
pub const POINT_OF_INTEREST: ZPriority = ZPriority::new(600);

pub fn z_priority(category: LayerCategory, geometry: Option<GeometryKind>) -> ZPriority {
    use GeometryKind::*;
    use LayerCategory::*;

    match (category, geometry) {
        (BackgroundContext, Some(Polygon)) => AREA,
        (BackgroundContext, Some(Point)) => POINT_OF_INTEREST,
        (BackgroundContext, _) => CONTEXT,
        (Narrative, Some(Line)) => ROUTE,
        (Narrative, Some(Point)) => STORY_POINT,
        (Narrative, _) => NARRATIVE,
        (Anchor, _) => ANCHOR,
    }
}
