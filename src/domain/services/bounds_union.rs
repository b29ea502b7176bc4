//! Bounds union
//!
//! Smallest rectangle containing every qualifying overlay's own bounding box.
//! Overlays without bound-able geometry are skipped; if none qualify the result is
//! `None`, which callers must keep distinct from a degenerate single-point box.

use crate::domain::entities::Overlay;
use crate::domain::value_objects::GeoBounds;

pub fn union_bounds<I>(boxes: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = Option<GeoBounds>>,
{
    boxes
        .into_iter()
        .flatten()
        .reduce(|acc, b| acc.union(&b))
}

pub fn overlay_bounds_union<'a, I>(overlays: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = &'a Overlay>,
{
    union_bounds(overlays.into_iter().map(Overlay::bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LatLng;
    use proptest::prelude::*;

    fn rect(s: f64, w: f64, n: f64, e: f64) -> GeoBounds {
        GeoBounds::from_corners(LatLng::new(s, w), LatLng::new(n, e))
    }

    #[test]
    fn no_qualifying_boxes_is_none() {
        assert_eq!(union_bounds(Vec::new()), None);
        assert_eq!(union_bounds(vec![None, None]), None);
    }

    #[test]
    fn single_point_is_some() {
        let p = GeoBounds::from_point(LatLng::new(52.0, 11.0));
        assert_eq!(union_bounds(vec![None, Some(p)]), Some(p));
    }

    #[test]
    fn empty_overlays_are_skipped() {
        let empty = Overlay::new("empty", Vec::new());
        assert_eq!(overlay_bounds_union([&empty]), None);
    }

    fn arb_rect() -> impl Strategy<Value = GeoBounds> {
        (-80.0..80.0f64, -170.0..170.0f64, 0.0..5.0f64, 0.0..5.0f64)
            .prop_map(|(s, w, dh, dw)| rect(s, w, s + dh, w + dw))
    }

    proptest! {
        #[test]
        fn union_is_commutative(boxes in prop::collection::vec(arb_rect(), 1..8)) {
            let forward = union_bounds(boxes.iter().copied().map(Some));
            let backward = union_bounds(boxes.iter().rev().copied().map(Some));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn adding_a_box_never_shrinks(
            boxes in prop::collection::vec(arb_rect(), 1..8),
            extra in arb_rect(),
        ) {
            let before = union_bounds(boxes.iter().copied().map(Some)).unwrap();
            let after = union_bounds(boxes.iter().copied().chain(Some(extra)).map(Some)).unwrap();
            prop_assert!(after.contains(&before));
            prop_assert!(after.contains(&extra));
        }
    }
}
