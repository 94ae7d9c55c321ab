//! The paint interface between the slider and whatever backend draws it.
//!
//! The slider never talks to a GPU, layer tree, or DOM directly; it emits
//! rectangles and text through the [`Renderer`] trait. [`CommandList`] is a
//! renderer that records [`DrawCommand`]s, useful both as an adapter for
//! retained backends and for asserting on paint output in tests.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rectangle};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// A draw command produced during painting.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    StrokeRect {
        rect: Rectangle,
        color: Color,
        width: f32,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
    },
}

/// Drawing primitives the slider paints through.
pub trait Renderer {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rectangle, color: Color);

    /// Draw a rectangle outline.
    fn stroke_rect(&mut self, rect: Rectangle, color: Color, width: f32);

    /// Draw a single line of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32);
}

/// A renderer that records draw commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded since the last `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear recorded commands, typically once per frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for CommandList {
    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rectangle, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
        });
    }
}
