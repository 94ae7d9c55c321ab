//! Screen-space synchronization: track, handle, segment, and label frames
//! derived from the widget bounds and the committed selection.

use crate::constraint::Selection;
use crate::geometry::{Point, Rectangle, Size};
use crate::style::SliderStyle;
use crate::text::{TextMetrics, ValueFormatter};
use crate::track::TrackGeometry;

/// Minimum horizontal gap kept between the two value labels.
pub const MIN_LABEL_SPACING: f32 = 8.0;

/// A positioned value label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    pub rect: Rectangle,
    /// Display scale the backend should rasterize the text at
    pub contents_scale: f32,
}

/// All frames needed to paint the slider, recomputed on every
/// geometry-affecting event.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    pub track: Rectangle,
    pub between_handles: Rectangle,
    pub left_handle: Rectangle,
    pub right_handle: Rectangle,
    pub min_label: Option<LabelLayout>,
    pub max_label: Option<LabelLayout>,
}

/// Compute all frames for the given bounds and selection.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    bounds: Rectangle,
    selection: Selection,
    min_value: f32,
    max_value: f32,
    disable_range: bool,
    style: &SliderStyle,
    formatter: &dyn ValueFormatter,
    display_scale: f32,
) -> SliderLayout {
    let track_geometry = TrackGeometry::from_bounds(bounds);
    let track = Rectangle::new(
        track_geometry.min_x,
        track_geometry.mid_y,
        track_geometry.width(),
        style.line_height,
    );

    let handle_y = track.y + style.line_height / 2.0;
    let handle_size = Size::new(style.handle_diameter, style.handle_diameter);
    let left_handle = Rectangle::centered_at(
        Point::new(
            track_geometry.x_for_value(selection.min, min_value, max_value),
            handle_y,
        ),
        handle_size,
    );
    let right_handle = Rectangle::centered_at(
        Point::new(
            track_geometry.x_for_value(selection.max, min_value, max_value),
            handle_y,
        ),
        handle_size,
    );

    let between_handles = Rectangle::new(
        left_handle.center().x,
        track.y,
        right_handle.center().x - left_handle.center().x,
        style.line_height,
    );

    let (min_label, max_label) = if style.hide_labels {
        (None, None)
    } else {
        let metrics = TextMetrics::new(style.label_font_size);
        let min_text = formatter.format(selection.min);
        let max_text = formatter.format(selection.max);
        let min_size = Size::new(metrics.line_width(&min_text), metrics.line_height());
        let max_size = Size::new(metrics.line_width(&max_text), metrics.line_height());

        let (min_center, max_center) = place_labels(
            min_size,
            max_size,
            left_handle,
            right_handle,
            style.label_padding,
            disable_range,
        );

        let max_label = LabelLayout {
            text: max_text,
            rect: Rectangle::centered_at(max_center, max_size),
            contents_scale: display_scale,
        };
        // In single-handle mode the minimum label is not shown at all.
        let min_label = (!disable_range).then(|| LabelLayout {
            text: min_text,
            rect: Rectangle::centered_at(min_center, min_size),
            contents_scale: display_scale,
        });
        (min_label, max_label.into())
    };

    SliderLayout {
        track,
        between_handles,
        left_handle,
        right_handle,
        min_label,
        max_label,
    }
}

/// Position the two label centers above their handles, pushing them apart
/// symmetrically when they would overlap.
///
/// If the symmetric push leaves both centers at the same x (labels started
/// from coincident handles), the min label is left-aligned at the left
/// handle's center and the max label placed immediately to its right.
pub fn place_labels(
    min_size: Size,
    max_size: Size,
    left_handle: Rectangle,
    right_handle: Rectangle,
    label_padding: f32,
    disable_range: bool,
) -> (Point, Point) {
    let left_center = left_handle.center();
    let right_center = right_handle.center();

    let mut min_center = Point::new(
        left_center.x,
        left_handle.y - min_size.height / 2.0 - label_padding,
    );
    let mut max_center = Point::new(
        right_center.x,
        right_handle.y - max_size.height / 2.0 - label_padding,
    );

    let max_label_left_edge = max_center.x - max_size.width / 2.0;
    let min_label_right_edge = min_center.x + min_size.width / 2.0;
    let spacing = max_label_left_edge - min_label_right_edge;

    if disable_range || spacing > MIN_LABEL_SPACING {
        return (min_center, max_center);
    }

    let increase = MIN_LABEL_SPACING - spacing;
    min_center.x -= increase / 2.0;
    max_center.x += increase / 2.0;

    // Coincident handles collapse the symmetric push; fall back to packing
    // both labels to the right of the left handle's center.
    if min_center.x == max_center.x {
        min_center.x = left_center.x;
        max_center.x =
            left_center.x + min_size.width / 2.0 + MIN_LABEL_SPACING + max_size.width / 2.0;
    }

    (min_center, max_center)
}
