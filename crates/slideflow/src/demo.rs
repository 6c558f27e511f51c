//! Ready-made demo diagrams.
//!
//! These exercise every routing shape the engine produces and double as
//! the CLI's built-in examples: `horizontal_process` fans out and back in
//! across a horizontal flow, `approval_flow` runs top-to-bottom through a
//! decision diamond.

use slideflow_core::{color::Color, shape::NodeShape};

use crate::spec::{ConnectionSpec, Coord, DiagramSpec, NodeSpec, NodeStyle};

fn style(fill: &str, border: &str, text: &str) -> NodeStyle {
    NodeStyle::new(
        Color::new(fill).expect("demo fill color is valid"),
        Color::new(border).expect("demo border color is valid"),
        Color::new(text).expect("demo text color is valid"),
    )
}

/// A five-node process that fans out into two parallel paths and merges
/// again. Nodes mix pixel, fractional, and end-relative coordinates, so
/// the diagram reshapes with its container.
pub fn horizontal_process() -> DiagramSpec {
    DiagramSpec::new()
        .with_node(
            NodeSpec::new("start", "Start", Coord::Px(60.0), Coord::Frac(0.5), 100.0, 40.0)
                .with_style(style("#e8f5e9", "#2e7d32", "#1b5e20")),
        )
        .with_node(
            NodeSpec::new(
                "process1",
                "Process A",
                Coord::Frac(0.33),
                Coord::Frac(0.3),
                110.0,
                40.0,
            )
            .with_style(style("#e3f2fd", "#1565c0", "#0d47a1")),
        )
        .with_node(
            NodeSpec::new(
                "process2",
                "Process B",
                Coord::Frac(0.33),
                Coord::Frac(0.7),
                110.0,
                40.0,
            )
            .with_style(style("#e3f2fd", "#1565c0", "#0d47a1")),
        )
        .with_node(
            NodeSpec::new(
                "analysis",
                "Analysis",
                Coord::Frac(0.66),
                Coord::Frac(0.5),
                100.0,
                40.0,
            )
            .with_style(style("#fff3e0", "#e65100", "#bf360c")),
        )
        .with_node(
            NodeSpec::new(
                "presentation",
                "Present",
                Coord::FromEnd(80.0),
                Coord::Frac(0.5),
                110.0,
                40.0,
            )
            .with_style(style("#f3e5f5", "#6a1b9a", "#4a148c")),
        )
        .with_connection(ConnectionSpec::new("start", "process1").with_label("Path A"))
        .with_connection(ConnectionSpec::new("start", "process2").with_label("Path B"))
        .with_connection(ConnectionSpec::new("process1", "analysis"))
        .with_connection(ConnectionSpec::new("process2", "analysis"))
        .with_connection(ConnectionSpec::new("analysis", "presentation").with_label("Results"))
}

/// A vertical flow through a decision diamond: aligned pairs route
/// straight, the diamond's branches route orthogonally.
pub fn approval_flow() -> DiagramSpec {
    DiagramSpec::new()
        .with_node(NodeSpec::new(
            "submit",
            "Submit",
            Coord::Frac(0.5),
            Coord::Px(40.0),
            100.0,
            40.0,
        ))
        .with_node(
            NodeSpec::new(
                "review",
                "Review?",
                Coord::Frac(0.5),
                Coord::Px(140.0),
                120.0,
                70.0,
            )
            .with_shape(NodeShape::Decision),
        )
        .with_node(NodeSpec::new(
            "approve",
            "Approve",
            Coord::Frac(0.3),
            Coord::Px(260.0),
            100.0,
            40.0,
        ))
        .with_node(NodeSpec::new(
            "revise",
            "Revise",
            Coord::Frac(0.7),
            Coord::Px(260.0),
            100.0,
            40.0,
        ))
        .with_node(NodeSpec::new(
            "done",
            "Done",
            Coord::Frac(0.5),
            Coord::Px(380.0),
            100.0,
            40.0,
        ))
        .with_connection(ConnectionSpec::new("submit", "review"))
        .with_connection(ConnectionSpec::new("review", "approve").with_label("Option 1"))
        .with_connection(ConnectionSpec::new("review", "revise").with_label("Option 2"))
        .with_connection(ConnectionSpec::new("approve", "done"))
        .with_connection(ConnectionSpec::new("revise", "done"))
}
