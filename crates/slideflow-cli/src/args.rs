//! Command-line argument definitions for the slideflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select a built-in diagram, the container
//! dimensions to lay it out in, and output/logging options.

use clap::Parser;

/// Command-line arguments for the slideflow diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in diagram to render
    #[arg(help = "Diagram name: horizontal-process or approval-flow")]
    pub diagram: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Container width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Container height in pixels
    #[arg(long, default_value_t = 450.0)]
    pub height: f32,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
