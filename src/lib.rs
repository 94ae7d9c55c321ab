//! range_seek_slider - A dual-handle range slider widget core
//!
//! This crate provides the platform-independent parts of a range slider:
//! value/pixel mapping, a constraint engine for the selected sub-range, the
//! drag interaction state machine, label collision layout, and an
//! accessibility adapter. Painting goes through the [`Renderer`] trait and
//! input arrives as [`Event`]s, so any backend that can fill rectangles and
//! draw text can host it.

mod accessibility;
mod animation;
mod callback;
mod constraint;
mod event;
mod geometry;
mod interaction;
mod layout;
mod renderer;
mod slider;
mod style;
mod text;
mod track;
mod widget;

pub use accessibility::{
    AccessibilityStrings, HandleSide, LEFT_HANDLE_NODE, RIGHT_HANDLE_NODE,
};
pub use animation::{ScaleTransition, HANDLE_SCALE_DURATION};
pub use callback::{Callback, Callback0};
pub use constraint::{snap_to_step, Constraints, Selection};
pub use event::{Event, MouseButton};
pub use geometry::{Layout, Length, Limits, Point, Rectangle, Size};
pub use interaction::{DragState, HANDLE_HIT_MARGIN};
pub use layout::{LabelLayout, SliderLayout, MIN_LABEL_SPACING};
pub use renderer::{Color, CommandList, DrawCommand, Renderer};
pub use slider::{range_seek_slider, RangeSeekSlider};
pub use style::SliderStyle;
pub use text::{DecimalFormatter, TextMetrics, ValueFormatter};
pub use track::{percentage_along_line, TrackGeometry, BAR_SIDE_PADDING};
pub use widget::Widget;

// Re-export the accesskit types that appear in the public API
pub use accesskit::{Action, Node, NodeId, Role};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Event, MouseButton};
    pub use crate::geometry::{Layout, Length, Limits, Point, Rectangle, Size};
    pub use crate::renderer::{Color, CommandList, Renderer};
    pub use crate::slider::{range_seek_slider, RangeSeekSlider};
    pub use crate::style::SliderStyle;
    pub use crate::text::{DecimalFormatter, ValueFormatter};
    pub use crate::widget::Widget;
}
