//! Arrowhead marker definitions for SVG connectors.
//!
//! Every connection is directed source→target, so each color in use needs
//! exactly one forward arrowhead marker. Markers use `orient="auto"`, which
//! makes the arrowhead follow the final direction vector of the path it
//! terminates - straight, curved, and orthogonal routes all get a correctly
//! oriented head for free.

use svg::node::element::{Definitions, Marker, Path};

use crate::color::Color;

/// Creates marker definitions for SVG arrowheads based on the colors in use.
///
/// Duplicate colors in the iterator are fine; markers share an id per color
/// and the last definition wins, producing identical output.
pub fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let arrowhead = Marker::new()
            .set("id", marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(arrowhead);
    }

    defs
}

/// Returns the `marker-end` reference for the arrowhead of the given color.
pub fn marker_end_reference(color: &Color) -> String {
    format!("url(#{})", marker_id(color))
}

fn marker_id(color: &Color) -> String {
    format!("arrowhead-{}", color.to_id_safe_string())
}
