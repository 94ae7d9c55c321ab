//! Pointer events consumed by the slider.

use crate::geometry::Point;

/// Events the widget can respond to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button or touch pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Mouse button or touch released.
    MouseReleased { button: MouseButton, position: Point },
    /// Pointer moved.
    MouseMoved { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
