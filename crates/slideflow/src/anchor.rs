//! Boundary anchor resolution for directed connections.
//!
//! Connection lines attach to node *boundaries*, never to centers: a line
//! drawn center-to-center would disappear under both node visuals. The
//! resolver compares the two centers' deltas, picks the dominant axis, and
//! anchors each node on the boundary side facing the other node, at a
//! distance given by the shape's own boundary math
//! ([`NodeShape::axis_radius`]).
//!
//! Pure functions of their inputs; no side effects.

use slideflow_core::{geometry::Point, shape::Axis};

use crate::spec::PlacedNode;

/// The boundary points a connection resolves to for one render pass.
///
/// Ephemeral: recomputed from the declared geometry on every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    pub from: Point,
    pub to: Point,
}

/// Computes boundary anchor points for a directed edge between two placed
/// nodes.
///
/// If the horizontal center delta dominates (`|dx| >= |dy|`), both anchors
/// sit on left/right boundaries at the nodes' center y; otherwise on
/// top/bottom boundaries at the center x. An exact tie prefers horizontal
/// anchoring, matching the left-to-right default flow of these diagrams.
pub fn resolve_anchors(from: &PlacedNode<'_>, to: &PlacedNode<'_>) -> AnchorPair {
    let delta = to.center().sub_point(from.center());

    if delta.x().abs() >= delta.y().abs() {
        // Horizontal anchoring: each node's left or right edge, whichever
        // faces the peer. A zero delta degenerates to the right edge.
        let sign = if delta.x() >= 0.0 { 1.0 } else { -1.0 };

        let from_radius = from.shape().axis_radius(Axis::Horizontal, from.size());
        let to_radius = to.shape().axis_radius(Axis::Horizontal, to.size());

        AnchorPair {
            from: Point::new(from.center().x() + sign * from_radius, from.center().y()),
            to: Point::new(to.center().x() - sign * to_radius, to.center().y()),
        }
    } else {
        let sign = if delta.y() >= 0.0 { 1.0 } else { -1.0 };

        let from_radius = from.shape().axis_radius(Axis::Vertical, from.size());
        let to_radius = to.shape().axis_radius(Axis::Vertical, to.size());

        AnchorPair {
            from: Point::new(from.center().x(), from.center().y() + sign * from_radius),
            to: Point::new(to.center().x(), to.center().y() - sign * to_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Coord, NodeSpec};
    use proptest::prelude::*;
    use slideflow_core::{geometry::Size, shape::NodeShape};

    fn node(id: &str, x: f32, y: f32, width: f32, height: f32) -> NodeSpec {
        NodeSpec::new(id, id, Coord::Px(x), Coord::Px(y), width, height)
    }

    fn place(spec: &NodeSpec) -> PlacedNode<'_> {
        let center = spec.resolve_center(Size::new(1000.0, 1000.0));
        PlacedNode::new(spec, center)
    }

    #[test]
    fn test_horizontal_pair_anchors_on_facing_edges() {
        // A{x:60,y:100,w:100,h:40}, B{x:260,y:100,w:100,h:40}
        let a = node("a", 60.0, 100.0, 100.0, 40.0);
        let b = node("b", 260.0, 100.0, 100.0, 40.0);

        let anchors = resolve_anchors(&place(&a), &place(&b));

        assert_eq!(anchors.from, Point::new(110.0, 100.0));
        assert_eq!(anchors.to, Point::new(210.0, 100.0));
    }

    #[test]
    fn test_horizontal_pair_reversed_direction() {
        let a = node("a", 260.0, 100.0, 100.0, 40.0);
        let b = node("b", 60.0, 100.0, 100.0, 40.0);

        let anchors = resolve_anchors(&place(&a), &place(&b));

        // From's left edge toward To's right edge
        assert_eq!(anchors.from, Point::new(210.0, 100.0));
        assert_eq!(anchors.to, Point::new(110.0, 100.0));
    }

    #[test]
    fn test_vertical_pair_anchors_on_top_bottom() {
        // A{x:150,y:30,w:120,h:40}, B{x:150,y:460,w:120,h:40}
        let a = node("a", 150.0, 30.0, 120.0, 40.0);
        let b = node("b", 150.0, 460.0, 120.0, 40.0);

        let anchors = resolve_anchors(&place(&a), &place(&b));

        assert_eq!(anchors.from, Point::new(150.0, 50.0));
        assert_eq!(anchors.to, Point::new(150.0, 440.0));
    }

    #[test]
    fn test_exact_tie_prefers_horizontal() {
        let a = node("a", 100.0, 100.0, 40.0, 40.0);
        let b = node("b", 200.0, 200.0, 40.0, 40.0);

        let anchors = resolve_anchors(&place(&a), &place(&b));

        // Right edge of A, left edge of B - not top/bottom
        assert_eq!(anchors.from, Point::new(120.0, 100.0));
        assert_eq!(anchors.to, Point::new(180.0, 200.0));
    }

    #[test]
    fn test_decision_diamond_anchors_at_vertices() {
        let a = node("a", 100.0, 100.0, 120.0, 70.0).with_shape(NodeShape::Decision);
        let b = node("b", 400.0, 100.0, 100.0, 40.0);

        let anchors = resolve_anchors(&place(&a), &place(&b));

        // The diamond's right vertex sits at center.x + width/2
        assert_eq!(anchors.from, Point::new(160.0, 100.0));
        assert_eq!(anchors.to, Point::new(350.0, 100.0));
    }

    proptest! {
        /// Anchors always lie exactly on the declared node boundary: the
        /// distance from center along the resolved axis equals the half
        /// extent, not more, not less.
        #[test]
        fn prop_anchors_lie_on_boundary(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..300.0, ah in 1.0f32..300.0,
            bw in 1.0f32..300.0, bh in 1.0f32..300.0,
        ) {
            let a = node("a", ax, ay, aw, ah);
            let b = node("b", bx, by, bw, bh);
            let (pa, pb) = (place(&a), place(&b));

            let anchors = resolve_anchors(&pa, &pb);

            let dx = bx - ax;
            let dy = by - ay;
            let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
            if dx.abs() >= dy.abs() {
                prop_assert!(close((anchors.from.x() - ax).abs(), aw / 2.0));
                prop_assert_eq!(anchors.from.y(), ay);
                prop_assert!(close((anchors.to.x() - bx).abs(), bw / 2.0));
                prop_assert_eq!(anchors.to.y(), by);
            } else {
                prop_assert_eq!(anchors.from.x(), ax);
                prop_assert!(close((anchors.from.y() - ay).abs(), ah / 2.0));
                prop_assert_eq!(anchors.to.x(), bx);
                prop_assert!(close((anchors.to.y() - by).abs(), bh / 2.0));
            }
        }
    }
}
