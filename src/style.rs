//! Visual configuration consumed by the layout and paint passes.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Style parameters for the slider.
///
/// Optional colors fall back to `tint`, mirroring how a host theme usually
/// drives the whole control from one accent color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderStyle {
    /// Diameter of each handle in pixels
    pub handle_diameter: f32,

    /// Scale applied to a handle while it is captured by a gesture
    pub selected_handle_diameter_multiplier: f32,

    /// Thickness of the track line
    pub line_height: f32,

    /// Vertical padding between a handle and its label
    pub label_padding: f32,

    /// Font size of the value labels
    pub label_font_size: f32,

    /// Hide the value labels above the handles
    pub hide_labels: bool,

    /// Border width drawn around each handle (0 disables the border)
    pub handle_border_width: f32,

    /// Base color for the track, handles, and labels
    pub tint: Color,

    /// Handle fill color override
    pub handle_color: Option<Color>,

    /// Handle border color override
    pub handle_border_color: Option<Color>,

    /// Minimum value label color override
    pub min_label_color: Option<Color>,

    /// Maximum value label color override
    pub max_label_color: Option<Color>,

    /// Color of the track segment between the two handles
    pub color_between_handles: Option<Color>,
}

impl SliderStyle {
    pub fn resolved_handle_color(&self) -> Color {
        self.handle_color.unwrap_or(self.tint)
    }

    pub fn resolved_min_label_color(&self) -> Color {
        self.min_label_color.unwrap_or(self.tint)
    }

    pub fn resolved_max_label_color(&self) -> Color {
        self.max_label_color.unwrap_or(self.tint)
    }

    pub fn resolved_color_between_handles(&self) -> Color {
        self.color_between_handles.unwrap_or(self.tint)
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            handle_diameter: 16.0,
            selected_handle_diameter_multiplier: 1.7,
            line_height: 1.0,
            label_padding: 8.0,
            label_font_size: 12.0,
            hide_labels: false,
            handle_border_width: 0.0,
            tint: Color::rgb(0.0, 0.48, 1.0),
            handle_color: None,
            handle_border_color: None,
            min_label_color: None,
            max_label_color: None,
            color_between_handles: None,
        }
    }
}
