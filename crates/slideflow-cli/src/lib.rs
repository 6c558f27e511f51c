//! CLI logic for the slideflow diagram tool.
//!
//! Renders one of the built-in demo diagrams into an SVG file, laying it
//! out against the container dimensions given on the command line.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};
use thiserror::Error;

use slideflow::{container::Container, demo, layout::LayoutController, spec::DiagramSpec};
use slideflow_core::geometry::Size;

/// Errors the CLI surfaces to the user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown diagram `{0}`, expected `horizontal-process` or `approval-flow`")]
    UnknownDiagram(String),

    #[error("style error: {0}")]
    Style(String),
}

fn diagram_by_name(name: &str) -> Result<DiagramSpec, CliError> {
    match name {
        "horizontal-process" => Ok(demo::horizontal_process()),
        "approval-flow" => Ok(demo::approval_flow()),
        other => Err(CliError::UnknownDiagram(other.to_string())),
    }
}

/// Run the slideflow CLI application
///
/// Lays out the selected diagram against the requested container size and
/// writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - An unknown diagram name
/// - Invalid style configuration
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        diagram = args.diagram.as_str(),
        output_path = args.output.as_str();
        "Rendering diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let spec = diagram_by_name(&args.diagram)?;

    let controller =
        LayoutController::with_style(spec, app_config.style()).map_err(CliError::Style)?;

    let mut container = Container::new(Size::new(args.width, args.height));
    let report = controller.layout(Some(&mut container));

    for recovered in report.recovered() {
        warn!("{recovered}");
    }

    let document = controller.to_document(&container);
    fs::write(&args.output, document.to_string())?;

    info!(
        output_file = args.output.as_str(),
        nodes = report.nodes_rendered(),
        connections = report.connections_rendered();
        "SVG exported successfully"
    );

    Ok(())
}
