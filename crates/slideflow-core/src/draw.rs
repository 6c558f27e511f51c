//! Visual definitions for diagram rendering.
//!
//! - [`StrokeDefinition`]: line color/width/pattern applied via
//!   [`apply_stroke!`](crate::apply_stroke!)
//! - [`RenderLayer`] / [`LayeredOutput`]: z-order discipline for SVG output
//! - [`marker`]: per-color arrowhead definitions

mod layer;
mod stroke;

pub mod marker;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
