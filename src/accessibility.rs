//! Assistive-technology adapter: exposes each handle as a slider element
//! and maps increment/decrement actions back onto the selection.

use accesskit::{Action, Node, NodeId, Rect, Role};

use crate::constraint::{Constraints, Selection};
use crate::geometry::Rectangle;
use crate::text::ValueFormatter;

/// Node id of the left (minimum) handle element.
pub const LEFT_HANDLE_NODE: NodeId = NodeId(1);
/// Node id of the right (maximum) handle element.
pub const RIGHT_HANDLE_NODE: NodeId = NodeId(2);

/// Which handle an accessibility element or action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    Left,
    Right,
}

impl HandleSide {
    pub fn node_id(&self) -> NodeId {
        match self {
            HandleSide::Left => LEFT_HANDLE_NODE,
            HandleSide::Right => RIGHT_HANDLE_NODE,
        }
    }
}

/// Labels and hints announced for the two handle elements. `None` leaves the
/// corresponding attribute unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityStrings {
    pub min_label: Option<String>,
    pub min_hint: Option<String>,
    pub max_label: Option<String>,
    pub max_hint: Option<String>,
}

/// The amount an increment/decrement action moves a handle by: the step when
/// stepping is on, otherwise 1% of the domain.
pub fn action_increment(min_value: f32, max_value: f32, constraints: &Constraints) -> f32 {
    if constraints.enable_step && constraints.step > 0.0 {
        constraints.step
    } else {
        (max_value - min_value) / 100.0
    }
}

/// Build the slider node for one handle.
///
/// The announced value is the formatted text, matching what a sighted user
/// reads off the label; the numeric attributes carry the raw domain so the
/// platform can voice relative position.
#[allow(clippy::too_many_arguments)]
pub fn handle_node(
    side: HandleSide,
    selection: Selection,
    min_value: f32,
    max_value: f32,
    constraints: &Constraints,
    strings: &AccessibilityStrings,
    formatter: &dyn ValueFormatter,
    frame: Rectangle,
) -> Node {
    let mut node = Node::new(Role::Slider);

    let (value, label, hint) = match side {
        HandleSide::Left => (selection.min, &strings.min_label, &strings.min_hint),
        HandleSide::Right => (selection.max, &strings.max_label, &strings.max_hint),
    };

    if let Some(label) = label {
        node.set_label(label.clone());
    }
    if let Some(hint) = hint {
        node.set_description(hint.clone());
    }
    node.set_value(formatter.format(value));
    node.set_numeric_value(value as f64);
    node.set_min_numeric_value(min_value as f64);
    node.set_max_numeric_value(max_value as f64);
    if constraints.enable_step && constraints.step > 0.0 {
        node.set_numeric_value_step(constraints.step as f64);
    }
    node.set_bounds(Rect {
        x0: frame.x as f64,
        y0: frame.y as f64,
        x1: (frame.x + frame.width) as f64,
        y1: (frame.y + frame.height) as f64,
    });
    node.add_action(Action::Increment);
    node.add_action(Action::Decrement);

    node
}

/// Apply an increment or decrement to one handle, respecting the other
/// handle as a hard bound. Returns the proposed selection, still to be run
/// through the constraint engine by the caller.
pub fn apply_action(
    side: HandleSide,
    action: Action,
    selection: Selection,
    min_value: f32,
    max_value: f32,
    constraints: &Constraints,
) -> Option<Selection> {
    let delta = match action {
        Action::Increment => action_increment(min_value, max_value, constraints),
        Action::Decrement => -action_increment(min_value, max_value, constraints),
        _ => return None,
    };

    let mut selection = selection;
    match side {
        HandleSide::Left => {
            selection.min = (selection.min + delta).clamp(min_value, selection.max);
        }
        HandleSide::Right => {
            let floor = if constraints.disable_range {
                min_value
            } else {
                selection.min
            };
            selection.max = (selection.max + delta).clamp(floor, max_value);
        }
    }
    Some(selection)
}
