//! The dual-handle range slider widget.

use accesskit::{Action, Node, NodeId};
use web_time::Instant;

use crate::accessibility::{self, AccessibilityStrings, HandleSide};
use crate::animation::ScaleTransition;
use crate::callback::{Callback, Callback0};
use crate::constraint::{self, Constraints, Selection};
use crate::event::{Event, MouseButton};
use crate::geometry::{Layout, Length, Limits, Rectangle};
use crate::interaction::{capture, DragState};
use crate::layout::{self, SliderLayout};
use crate::renderer::Renderer;
use crate::style::SliderStyle;
use crate::text::{DecimalFormatter, ValueFormatter};
use crate::track::TrackGeometry;
use crate::widget::Widget;

/// A slider with two draggable handles selecting a closed sub-range of a
/// numeric domain.
pub struct RangeSeekSlider<M> {
    /// Lower end of the value domain
    min_value: f32,
    /// Upper end of the value domain
    max_value: f32,
    /// The currently selected sub-range
    selection: Selection,
    constraints: Constraints,
    style: SliderStyle,
    formatter: Box<dyn ValueFormatter>,
    /// Pixel density labels should be rasterized at
    display_scale: f32,
    accessibility: AccessibilityStrings,
    /// Widget width
    width: Length,
    drag: DragState,
    left_scale: ScaleTransition,
    right_scale: ScaleTransition,
    /// Callback when a handle is captured
    on_drag_start: Callback0<M>,
    /// Callback when the selection changes during a drag
    on_change: Callback<(f32, f32), M>,
    /// Callback when the handle is released
    on_drag_end: Callback0<M>,
}

impl<M> RangeSeekSlider<M> {
    /// Intrinsic height of the widget
    const HEIGHT: f32 = 65.0;
    /// Intrinsic width when no width is imposed
    const INTRINSIC_WIDTH: f32 = 200.0;

    /// Create a slider over the given domain with the full domain selected.
    pub fn new(min_value: f32, max_value: f32) -> Self {
        Self {
            min_value,
            max_value,
            selection: Selection::new(min_value, max_value),
            constraints: Constraints::default(),
            style: SliderStyle::default(),
            formatter: Box::new(DecimalFormatter::default()),
            display_scale: 1.0,
            accessibility: AccessibilityStrings::default(),
            width: Length::default(),
            drag: DragState::Idle,
            left_scale: ScaleTransition::resting(1.0),
            right_scale: ScaleTransition::resting(1.0),
            on_drag_start: Callback::none(),
            on_change: Callback::none(),
            on_drag_end: Callback::none(),
        }
    }

    /// Set the initially selected sub-range.
    pub fn selected_range(mut self, min: f32, max: f32) -> Self {
        self.selection = Selection::new(min, max);
        self.normalize_selection();
        self
    }

    /// Set the minimum distance the two selected values must keep.
    pub fn min_distance(mut self, distance: f32) -> Self {
        self.set_min_distance(distance);
        self
    }

    /// Set the maximum distance the two selected values may span.
    pub fn max_distance(mut self, distance: f32) -> Self {
        self.set_max_distance(distance);
        self
    }

    /// Set the snap granularity.
    pub fn step(mut self, step: f32) -> Self {
        self.constraints.step = step;
        self
    }

    /// Enable snapping of selected values to multiples of the step.
    pub fn enable_step(mut self, enable: bool) -> Self {
        self.constraints.enable_step = enable;
        self.apply_constraints();
        self
    }

    /// Switch to single-handle mode: only the maximum value is adjustable
    /// and the left handle is never shown or captured.
    pub fn disable_range(mut self, disable: bool) -> Self {
        self.constraints.disable_range = disable;
        self
    }

    /// Set the widget width.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Set the visual style.
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the label formatter.
    pub fn formatter<F: ValueFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Set the display scale labels are rasterized at.
    pub fn display_scale(mut self, scale: f32) -> Self {
        self.display_scale = scale;
        self
    }

    /// Set the labels and hints announced by assistive technology.
    pub fn accessibility_strings(mut self, strings: AccessibilityStrings) -> Self {
        self.accessibility = strings;
        self
    }

    /// Set the callback when a handle is captured.
    pub fn on_drag_start<F>(mut self, f: F) -> Self
    where
        F: Fn(()) -> M + 'static,
    {
        self.on_drag_start = Callback::new(f);
        self
    }

    /// Set the callback when the selection changes during a drag.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn((f32, f32)) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Set the callback when the handle is released.
    pub fn on_drag_end<F>(mut self, f: F) -> Self
    where
        F: Fn(()) -> M + 'static,
    {
        self.on_drag_end = Callback::new(f);
        self
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// The currently selected sub-range as `(min, max)`.
    pub fn selected_values(&self) -> (f32, f32) {
        (self.selection.min, self.selection.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Move the lower end of the domain. The selection is re-normalized but
    /// no change notification fires.
    pub fn set_min_value(&mut self, value: f32) {
        self.min_value = value;
        self.normalize_selection();
    }

    /// Move the upper end of the domain.
    pub fn set_max_value(&mut self, value: f32) {
        self.max_value = value;
        self.normalize_selection();
    }

    /// Set the selected minimum. Values below the domain floor snap up to
    /// it; constraints are re-applied without notifying.
    pub fn set_selected_min_value(&mut self, value: f32) {
        self.selection.min = value.max(self.min_value);
        self.apply_constraints();
    }

    /// Set the selected maximum. Values above the domain ceiling snap down
    /// to it.
    pub fn set_selected_max_value(&mut self, value: f32) {
        self.selection.max = value.min(self.max_value);
        self.apply_constraints();
    }

    /// Set the minimum distance constraint. Negative values mean none.
    pub fn set_min_distance(&mut self, distance: f32) {
        self.constraints.min_distance = distance.max(0.0);
        self.apply_constraints();
    }

    /// Set the maximum distance constraint. Negative values mean unlimited.
    pub fn set_max_distance(&mut self, distance: f32) {
        self.constraints.max_distance = if distance < 0.0 {
            f32::INFINITY
        } else {
            distance
        };
        self.apply_constraints();
    }

    fn normalize_selection(&mut self) {
        self.selection.min = self.selection.min.max(self.min_value);
        self.selection.max = self.selection.max.min(self.max_value);
        self.apply_constraints();
    }

    fn apply_constraints(&mut self) {
        self.selection = constraint::apply(
            self.selection,
            self.min_value,
            self.max_value,
            &self.constraints,
            self.drag,
        );
    }

    /// Compute the full frame set for the given widget bounds.
    pub fn slider_layout(&self, bounds: Rectangle) -> SliderLayout {
        layout::compute(
            bounds,
            self.selection,
            self.min_value,
            self.max_value,
            self.constraints.disable_range,
            &self.style,
            self.formatter.as_ref(),
            self.display_scale,
        )
    }

    /// The accessibility nodes for the handles, left before right. In
    /// single-handle mode only the right handle is exposed.
    pub fn accessibility_nodes(&self, bounds: Rectangle) -> Vec<(NodeId, Node)> {
        let frames = self.slider_layout(bounds);
        let mut nodes = Vec::with_capacity(2);
        if !self.constraints.disable_range {
            nodes.push((
                HandleSide::Left.node_id(),
                self.handle_node(HandleSide::Left, frames.left_handle),
            ));
        }
        nodes.push((
            HandleSide::Right.node_id(),
            self.handle_node(HandleSide::Right, frames.right_handle),
        ));
        nodes
    }

    fn handle_node(&self, side: HandleSide, frame: Rectangle) -> Node {
        accessibility::handle_node(
            side,
            self.selection,
            self.min_value,
            self.max_value,
            &self.constraints,
            &self.accessibility,
            self.formatter.as_ref(),
            frame,
        )
    }

    /// Handle an increment or decrement action targeted at one of the
    /// handle nodes. Returns whether the action was consumed. Like the
    /// programmatic setters, this does not fire `on_change`.
    pub fn handle_accessibility_action(&mut self, target: NodeId, action: Action) -> bool {
        let side = if target == HandleSide::Left.node_id() && !self.constraints.disable_range {
            HandleSide::Left
        } else if target == HandleSide::Right.node_id() {
            HandleSide::Right
        } else {
            return false;
        };

        match accessibility::apply_action(
            side,
            action,
            self.selection,
            self.min_value,
            self.max_value,
            &self.constraints,
        ) {
            Some(selection) => {
                self.selection = selection;
                self.apply_constraints();
                true
            }
            None => false,
        }
    }
}

impl<M> Widget<M> for RangeSeekSlider<M> {
    fn layout(&self, limits: &Limits) -> Layout {
        let width = self.width.resolve(limits.max_width, Self::INTRINSIC_WIDTH);
        let size = limits.resolve(width, Self::HEIGHT);
        Layout::new(Rectangle::new(0.0, 0.0, size.width, size.height))
    }

    fn draw(&self, renderer: &mut dyn Renderer, layout: &Layout) {
        let frames = self.slider_layout(layout.bounds());
        let now = Instant::now();

        renderer.fill_rect(frames.track, self.style.tint);
        renderer.fill_rect(
            frames.between_handles,
            self.style.resolved_color_between_handles(),
        );

        let handle_color = self.style.resolved_handle_color();
        if !self.constraints.disable_range {
            let left = frames
                .left_handle
                .scaled_about_center(self.left_scale.value_at(now));
            renderer.fill_rect(left, handle_color);
            if self.style.handle_border_width > 0.0 {
                if let Some(border) = self.style.handle_border_color {
                    renderer.stroke_rect(left, border, self.style.handle_border_width);
                }
            }
        }
        let right = frames
            .right_handle
            .scaled_about_center(self.right_scale.value_at(now));
        renderer.fill_rect(right, handle_color);
        if self.style.handle_border_width > 0.0 {
            if let Some(border) = self.style.handle_border_color {
                renderer.stroke_rect(right, border, self.style.handle_border_width);
            }
        }

        if let Some(label) = &frames.min_label {
            renderer.draw_text(
                &label.text,
                label.rect.position(),
                self.style.resolved_min_label_color(),
                self.style.label_font_size,
            );
        }
        if let Some(label) = &frames.max_label {
            renderer.draw_text(
                &label.text,
                label.rect.position(),
                self.style.resolved_max_label_color(),
                self.style.label_font_size,
            );
        }
    }

    fn on_event(&mut self, event: &Event, layout: &Layout) -> Option<M> {
        let bounds = layout.bounds();

        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                let frames = self.slider_layout(bounds);
                let captured = capture(
                    *position,
                    frames.left_handle,
                    frames.right_handle,
                    self.constraints.disable_range,
                );
                if !captured.is_dragging() {
                    return None;
                }
                self.drag = captured;
                let grow = self.style.selected_handle_diameter_multiplier;
                let now = Instant::now();
                match captured {
                    DragState::DraggingLeft => self.left_scale.retarget(grow, now),
                    DragState::DraggingRight => self.right_scale.retarget(grow, now),
                    DragState::Idle => {}
                }
                log::debug!("captured {captured:?} at ({}, {})", position.x, position.y);
                self.on_drag_start.emit()
            }
            Event::MouseMoved { position } => {
                if !self.drag.is_dragging() {
                    return None;
                }
                let track = TrackGeometry::from_bounds(bounds);
                let value = track.value_for_x(
                    position.x,
                    self.style.handle_diameter,
                    self.min_value,
                    self.max_value,
                );
                match self.drag {
                    DragState::DraggingLeft => {
                        self.selection.min = value.min(self.selection.max);
                    }
                    DragState::DraggingRight => {
                        let floor = if self.constraints.disable_range {
                            self.min_value
                        } else {
                            self.selection.min
                        };
                        self.selection.max = value.max(floor);
                    }
                    DragState::Idle => {}
                }
                self.apply_constraints();
                self.on_change.call(self.selected_values())
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                if !self.drag.is_dragging() {
                    return None;
                }
                let now = Instant::now();
                match self.drag {
                    DragState::DraggingLeft => self.left_scale.retarget(1.0, now),
                    DragState::DraggingRight => self.right_scale.retarget(1.0, now),
                    DragState::Idle => {}
                }
                log::debug!("released {:?}", self.drag);
                self.drag = DragState::Idle;
                self.on_drag_end.emit()
            }
            _ => None,
        }
    }
}

impl<M> Default for RangeSeekSlider<M> {
    fn default() -> Self {
        Self::new(0.0, 100.0).selected_range(10.0, 90.0)
    }
}

/// Helper function to create a slider.
pub fn range_seek_slider<M>(min_value: f32, max_value: f32) -> RangeSeekSlider<M> {
    RangeSeekSlider::new(min_value, max_value)
}
