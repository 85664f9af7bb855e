//! Status line and help overlay
//!
//! Text is handed to the presentation layer as positioned labels; panels are
//! plain triangles like the rest of the scene.

use super::shapes::{filled_rect, rect_outline};
use super::vertex::{Vertex, colors};

/// Help panel placement in window pixels
const HELP_PANEL_X: f32 = 50.0;
const HELP_PANEL_Y: f32 = 50.0;
const HELP_PANEL_W: f32 = 700.0;
const HELP_PANEL_H: f32 = 500.0;
const HELP_BORDER_WIDTH: f32 = 5.0;

/// Row spacing and column offsets for help text
const HELP_TEXT_TOP: f32 = 60.0;
const HELP_ROW_HEIGHT: f32 = 30.0;
const HELP_KEY_X: f32 = 60.0;
const HELP_DESC_X: f32 = 150.0;

/// Status text anchor
const STATUS_X: f32 = 10.0;
const STATUS_Y: f32 = 10.0;

/// One key/description row of the help overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    pub key: String,
    pub description: String,
}

impl HelpRow {
    fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Text to draw with its top-left corner at (x, y)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4],
}

/// Panel geometry plus the labels drawn on top of it
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

/// Rows shown when the help overlay is open
pub fn help_rows(resolution: u32) -> Vec<HelpRow> {
    vec![
        HelpRow::new("F1", "Show Help"),
        HelpRow::new("R", "Restart"),
        HelpRow::new("P", "Pause/Play"),
        HelpRow::new("Num+", "More points"),
        HelpRow::new("Num-", "Less points"),
        HelpRow::new("", ""),
        HelpRow::new(resolution.to_string(), "Current points"),
    ]
}

/// Filled panel, border, and one label per non-empty key and description
pub fn help_overlay(resolution: u32) -> HelpOverlay {
    let mut vertices = filled_rect(
        HELP_PANEL_X,
        HELP_PANEL_Y,
        HELP_PANEL_W,
        HELP_PANEL_H,
        colors::HELP_PANEL,
    );
    vertices.extend(rect_outline(
        HELP_PANEL_X,
        HELP_PANEL_Y,
        HELP_PANEL_W,
        HELP_PANEL_H,
        HELP_BORDER_WIDTH,
        colors::HELP_BORDER,
    ));

    let mut labels = Vec::new();
    for (i, row) in help_rows(resolution).into_iter().enumerate() {
        let y = HELP_TEXT_TOP + HELP_ROW_HEIGHT * i as f32;
        if !row.key.is_empty() {
            labels.push(TextLabel {
                text: row.key,
                x: HELP_KEY_X,
                y,
                color: colors::HELP_TEXT,
            });
        }
        if !row.description.is_empty() {
            labels.push(TextLabel {
                text: row.description,
                x: HELP_DESC_X,
                y,
                color: colors::HELP_TEXT,
            });
        }
    }

    HelpOverlay { vertices, labels }
}

/// Top-left status text
pub fn status_line(resolution: u32) -> String {
    format!("Smoothing points: {}", resolution)
}

/// Status text positioned for drawing
pub fn status_label(resolution: u32) -> TextLabel {
    TextLabel {
        text: status_line(resolution),
        x: STATUS_X,
        y: STATUS_Y,
        color: colors::STATUS_TEXT,
    }
}
