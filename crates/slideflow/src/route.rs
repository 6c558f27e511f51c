//! Connection path synthesis.
//!
//! Given the boundary anchors of a connection, the synthesizer picks one of
//! four path shapes and emits its geometry:
//!
//! * self-loop - a rectangular detour off the node's right boundary,
//! * straight - anchors near-level or exactly aligned,
//! * curve - a cubic Bezier for the general horizontal flow,
//! * orthogonal - axis-aligned segments for vertical flow between
//!   misaligned columns.
//!
//! Alongside the path itself each route carries a label anchor (the path
//! midpoint pushed off perpendicular, so label text never sits on the
//! stroke) and the unit direction of arrival at the target boundary.

use slideflow_core::geometry::Point;

use crate::{
    anchor::AnchorPair,
    spec::{ConnectionSpec, PlacedNode},
};

/// Vertical anchor offsets below this are drawn as a straight line rather
/// than a curve; the kink would be imperceptible.
const STRAIGHT_THRESHOLD: f32 = 20.0;

/// Perpendicular distance from the path midpoint to the label anchor.
const LABEL_MARGIN: f32 = 10.0;

/// Anchors whose cross-axis offset is below this count as exactly aligned.
const ANCHOR_EPS: f32 = 0.5;

/// How far a self-loop extends past the node's right boundary.
const LOOP_EXTENT: f32 = 24.0;

/// Half the vertical span between a self-loop's exit and re-entry points.
const LOOP_SPREAD: f32 = 12.0;

/// The shape class a synthesized route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A single line segment between the two anchors.
    Straight,
    /// A cubic Bezier; `points[1]` and `points[2]` are its control points.
    Curve,
    /// Axis-aligned segments through every point in order.
    Orthogonal,
    /// A rectangular detour from a node back to itself.
    SelfLoop,
}

/// One synthesized connection path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec {
    kind: RouteKind,
    points: Vec<Point>,
    label_anchor: Point,
    end_direction: Point,
}

impl RouteSpec {
    /// Returns the shape class.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Returns the path points. The first is always the source anchor and
    /// the last the target anchor; interpretation of the interior points
    /// depends on [`RouteSpec::kind`].
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns where an inline label should be centered.
    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    /// Returns the unit direction of travel when the path meets the target
    /// boundary.
    pub fn end_direction(&self) -> Point {
        self.end_direction
    }
}

/// A connection declaration paired with its synthesized path for one pass.
#[derive(Debug, Clone)]
pub struct RoutedConnection<'a> {
    connection: &'a ConnectionSpec,
    route: RouteSpec,
}

impl<'a> RoutedConnection<'a> {
    pub fn new(connection: &'a ConnectionSpec, route: RouteSpec) -> Self {
        Self { connection, route }
    }

    pub fn connection(&self) -> &'a ConnectionSpec {
        self.connection
    }

    pub fn route(&self) -> &RouteSpec {
        &self.route
    }
}

/// Synthesizes the path for one connection between two placed nodes.
///
/// Self-loops are detected by node identity before any geometry is
/// consulted. For distinct nodes the choice follows the same axis-dominance
/// rule the anchor resolver used, so the path always leaves and arrives
/// perpendicular to the boundary it anchors on.
pub fn synthesize_route(
    anchors: &AnchorPair,
    from: &PlacedNode<'_>,
    to: &PlacedNode<'_>,
) -> RouteSpec {
    if from.id() == to.id() {
        return self_loop(from);
    }

    let delta = to.center().sub_point(from.center());
    if delta.x().abs() >= delta.y().abs() {
        horizontal_route(anchors)
    } else {
        vertical_route(anchors)
    }
}

fn horizontal_route(anchors: &AnchorPair) -> RouteSpec {
    if (anchors.from.y() - anchors.to.y()).abs() < STRAIGHT_THRESHOLD {
        return straight(anchors);
    }

    // Cubic with both control points at the horizontal midpoint: the path
    // leaves and arrives flat, easing through the vertical offset.
    let mid_x = (anchors.from.x() + anchors.to.x()) / 2.0;
    let c1 = Point::new(mid_x, anchors.from.y());
    let c2 = Point::new(mid_x, anchors.to.y());

    let end_direction = c2
        .direction_to(anchors.to, ANCHOR_EPS)
        .unwrap_or_else(|| Point::new(1.0, 0.0));

    RouteSpec {
        kind: RouteKind::Curve,
        label_anchor: offset_label(anchors.from, anchors.to),
        end_direction,
        points: vec![anchors.from, c1, c2, anchors.to],
    }
}

fn vertical_route(anchors: &AnchorPair) -> RouteSpec {
    if (anchors.from.x() - anchors.to.x()).abs() < ANCHOR_EPS {
        return straight(anchors);
    }

    // Step sideways at the vertical midpoint between the two boundaries.
    let mid_y = (anchors.from.y() + anchors.to.y()) / 2.0;
    let elbow_out = Point::new(anchors.from.x(), mid_y);
    let elbow_in = Point::new(anchors.to.x(), mid_y);

    let end_direction = elbow_in
        .direction_to(anchors.to, ANCHOR_EPS)
        .unwrap_or_else(|| Point::new(0.0, 1.0));

    RouteSpec {
        // Label clearance is measured against the horizontal run, so the
        // offset must be perpendicular to that run, not to the overall
        // anchor-to-anchor direction
        label_anchor: offset_label(elbow_out, elbow_in),
        kind: RouteKind::Orthogonal,
        end_direction,
        points: vec![anchors.from, elbow_out, elbow_in, anchors.to],
    }
}

fn straight(anchors: &AnchorPair) -> RouteSpec {
    let end_direction = anchors
        .from
        .direction_to(anchors.to, ANCHOR_EPS)
        .unwrap_or_else(|| Point::new(1.0, 0.0));

    RouteSpec {
        kind: RouteKind::Straight,
        label_anchor: offset_label(anchors.from, anchors.to),
        end_direction,
        points: vec![anchors.from, anchors.to],
    }
}

fn self_loop(node: &PlacedNode<'_>) -> RouteSpec {
    let right = node.center().x() + node.size().width() / 2.0;
    let cy = node.center().y();

    let exit = Point::new(right, cy - LOOP_SPREAD);
    let reentry = Point::new(right, cy + LOOP_SPREAD);
    let outer = right + LOOP_EXTENT;

    RouteSpec {
        kind: RouteKind::SelfLoop,
        points: vec![
            exit,
            Point::new(outer, cy - LOOP_SPREAD),
            Point::new(outer, cy + LOOP_SPREAD),
            reentry,
        ],
        label_anchor: Point::new(outer + LABEL_MARGIN, cy),
        end_direction: Point::new(-1.0, 0.0),
    }
}

/// Pushes the midpoint of the segment `start -> end` off perpendicular to
/// that segment, keeping label text clear of the stroke it sits beside.
fn offset_label(start: Point, end: Point) -> Point {
    let midpoint = start.midpoint(end);
    match start.direction_to(end, ANCHOR_EPS) {
        Some(direction) => {
            let perpendicular = Point::new(direction.y(), -direction.x());
            midpoint.add_point(perpendicular.scale(LABEL_MARGIN))
        }
        None => midpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::resolve_anchors;
    use crate::spec::{Coord, NodeSpec};
    use float_cmp::assert_approx_eq;
    use slideflow_core::geometry::Size;

    fn node(id: &str, x: f32, y: f32, width: f32, height: f32) -> NodeSpec {
        NodeSpec::new(id, id, Coord::Px(x), Coord::Px(y), width, height)
    }

    fn place(spec: &NodeSpec) -> PlacedNode<'_> {
        let center = spec.resolve_center(Size::new(1000.0, 1000.0));
        PlacedNode::new(spec, center)
    }

    #[test]
    fn test_level_horizontal_pair_is_straight() {
        let a = node("a", 60.0, 100.0, 100.0, 40.0);
        let b = node("b", 260.0, 100.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Straight);
        assert_eq!(
            route.points(),
            [Point::new(110.0, 100.0), Point::new(210.0, 100.0)]
        );
        assert_eq!(route.end_direction(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_small_vertical_offset_stays_straight() {
        // 15px offset is under the curve threshold
        let a = node("a", 60.0, 100.0, 100.0, 40.0);
        let b = node("b", 260.0, 115.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Straight);
    }

    #[test]
    fn test_offset_horizontal_pair_curves() {
        let a = node("a", 60.0, 100.0, 100.0, 40.0);
        let b = node("b", 300.0, 220.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Curve);
        let mid_x = (110.0 + 250.0) / 2.0;
        assert_eq!(route.points()[1], Point::new(mid_x, 100.0));
        assert_eq!(route.points()[2], Point::new(mid_x, 220.0));
        // Arrives horizontally, left-to-right
        assert_eq!(route.end_direction(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_aligned_vertical_pair_is_straight() {
        let a = node("a", 150.0, 30.0, 120.0, 40.0);
        let b = node("b", 150.0, 460.0, 120.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Straight);
        assert_eq!(
            route.points(),
            [Point::new(150.0, 50.0), Point::new(150.0, 440.0)]
        );
        // Label sits beside the vertical stroke, not on it
        assert_approx_eq!(f32, route.label_anchor().x(), 160.0);
        assert_approx_eq!(f32, route.label_anchor().y(), 245.0);
    }

    #[test]
    fn test_misaligned_vertical_pair_routes_orthogonally() {
        let a = node("a", 150.0, 40.0, 100.0, 40.0);
        let b = node("b", 250.0, 300.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Orthogonal);
        let mid_y = (60.0 + 280.0) / 2.0;
        assert_eq!(
            route.points(),
            [
                Point::new(150.0, 60.0),
                Point::new(150.0, mid_y),
                Point::new(250.0, mid_y),
                Point::new(250.0, 280.0),
            ]
        );
        assert_eq!(route.end_direction(), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_orthogonal_label_clears_horizontal_run() {
        // Near-vertical pair: the overall anchor direction is almost
        // vertical, but the label sits beside the horizontal run and must
        // keep the full margin from it
        let a = node("a", 150.0, 40.0, 100.0, 40.0);
        let b = node("b", 160.0, 300.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        assert_eq!(route.kind(), RouteKind::Orthogonal);
        let mid_y = (60.0 + 280.0) / 2.0;
        assert_approx_eq!(f32, (route.label_anchor().y() - mid_y).abs(), 10.0);
        assert_approx_eq!(f32, route.label_anchor().x(), 155.0);
    }

    #[test]
    fn test_self_loop_detours_off_right_boundary() {
        let a = node("a", 100.0, 100.0, 80.0, 40.0);
        let pa = place(&a);

        let route = synthesize_route(&resolve_anchors(&pa, &pa), &pa, &pa);

        assert_eq!(route.kind(), RouteKind::SelfLoop);
        assert_eq!(
            route.points(),
            [
                Point::new(140.0, 88.0),
                Point::new(164.0, 88.0),
                Point::new(164.0, 112.0),
                Point::new(140.0, 112.0),
            ]
        );
        // Re-enters the node travelling left
        assert_eq!(route.end_direction(), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_label_anchor_clears_horizontal_stroke() {
        let a = node("a", 60.0, 100.0, 100.0, 40.0);
        let b = node("b", 260.0, 100.0, 100.0, 40.0);
        let (pa, pb) = (place(&a), place(&b));

        let route = synthesize_route(&resolve_anchors(&pa, &pb), &pa, &pb);

        // Perpendicular of (1, 0) points up in screen coordinates
        assert_approx_eq!(f32, route.label_anchor().x(), 160.0);
        assert_approx_eq!(f32, route.label_anchor().y(), 90.0);
    }
}
