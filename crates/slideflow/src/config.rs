//! Configuration types for diagram styling and timing.
//!
//! All types implement [`serde::Deserialize`] so a host application can
//! load them from an external source; every field has a default, so an
//! empty configuration is always valid.
//!
//! Colors are stored as CSS color strings and parsed on access, keeping
//! deserialization infallible and surfacing bad values where they are used.

use std::{str::FromStr, time::Duration};

use serde::Deserialize;

use slideflow_core::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle},
};

/// Top-level configuration combining style and timing settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Timing configuration section.
    #[serde(default)]
    timing: TimingConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, timing: TimingConfig) -> Self {
        Self { style, timing }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the timing configuration.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Connector stroke color, as a CSS color string.
    connector_color: String,

    /// Connector stroke width in pixels.
    connector_width: f32,

    /// Connector line style: solid, dashed, or dotted.
    connector_style: String,

    /// Font size for inline connection labels, in pixels.
    label_font_size: f32,

    /// Font size for node label text, in pixels.
    node_font_size: f32,

    /// Background color for the whole diagram, if any.
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            connector_color: "#4285f4".to_string(),
            connector_width: 2.0,
            connector_style: "solid".to_string(),
            label_font_size: 10.0,
            node_font_size: 12.0,
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed connector [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn connector_color(&self) -> Result<Color, String> {
        Color::new(&self.connector_color)
            .map_err(|err| format!("Invalid connector color in config: {err}"))
    }

    /// Returns the connector stroke built from the configured color,
    /// width, and line style.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color or style string cannot be
    /// parsed.
    pub fn connector_stroke(&self) -> Result<StrokeDefinition, String> {
        let mut stroke = StrokeDefinition::new(self.connector_color()?, self.connector_width);
        let style = StrokeStyle::from_str(&self.connector_style)
            .map_err(|err| format!("Invalid connector style in config: {err}"))?;
        stroke.set_style(style);
        Ok(stroke)
    }

    /// Returns the connector stroke width in pixels.
    pub fn connector_width(&self) -> f32 {
        self.connector_width
    }

    /// Returns the inline label font size in pixels.
    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }

    /// Returns the node text font size in pixels.
    pub fn node_font_size(&self) -> f32 {
        self.node_font_size
    }

    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Timing configuration for resize handling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Debounce window for resize-triggered relayouts, in milliseconds.
    debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

impl TimingConfig {
    /// Returns the resize debounce window.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
