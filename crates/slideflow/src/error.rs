//! Error types for diagram layout and rendering.
//!
//! Every variant here is recovered locally: the layout controller logs the
//! error, skips the affected piece, and keeps rendering. Nothing propagates
//! to the presentation host - one slide's failure must not affect others.

use thiserror::Error;

/// Errors that can occur during a diagram layout pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// The container element was not available at layout time. The pass is
    /// skipped entirely; a later resize can retry.
    #[error("diagram container is not available")]
    MissingContainer,

    /// A connection references a node id that is absent from the diagram's
    /// node list. Only that connection is skipped.
    #[error("connection `{from}` -> `{to}` references unknown node `{missing}`")]
    DanglingConnection {
        from: String,
        to: String,
        missing: String,
    },

    /// The drawing surface could not be obtained. The pass is skipped; the
    /// module remains in a state where a future resize can retry.
    #[error("render target unavailable: {0}")]
    RenderTargetUnavailable(String),

    /// A node declaration violates an invariant (non-positive size). The
    /// node is skipped; connections to it become dangling.
    #[error("invalid node `{id}`: {reason}")]
    InvalidNode { id: String, reason: String },
}
