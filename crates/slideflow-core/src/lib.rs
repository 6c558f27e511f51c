//! Slideflow Core Primitives
//!
//! This crate provides the foundational types for the slideflow diagram
//! engine. It includes:
//!
//! - **Geometry**: Basic geometric value types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke, layer, and arrowhead definitions ([`draw`] module)
//! - **Shapes**: Node shape variants with per-shape boundary math
//!   ([`shape::NodeShape`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod shape;
