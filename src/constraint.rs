//! The constraint engine: turns a proposed selection into one that satisfies
//! step, distance, and range invariants.

use serde::{Deserialize, Serialize};

use crate::interaction::DragState;

/// Constraint parameters for the selected values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum distance the two selected values must be apart
    pub min_distance: f32,

    /// Maximum distance the two selected values may be apart
    pub max_distance: f32,

    /// Snap granularity; ignored if <= 0
    pub step: f32,

    /// Snap selected values to multiples of `step`
    pub enable_step: bool,

    /// Single-handle mode: only the maximum value is meaningful
    pub disable_range: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            step: 0.0,
            enable_step: false,
            disable_range: false,
        }
    }
}

/// The pair of selected values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub min: f32,
    pub max: f32,
}

impl Selection {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn distance(&self) -> f32 {
        self.max - self.min
    }
}

/// Round to the nearest multiple of `step`, halves away from zero.
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Produce a consistent selection from a proposed one.
///
/// The three passes run in a fixed order: step snap, distance enforcement,
/// range clamp. Distance enforcement pulls the side opposite the one being
/// dragged; when the gap exceeds `max_distance` and no handle is active
/// (constraints changed programmatically), the gap is left as-is. In
/// single-handle mode the minimum value is inert, so distance enforcement
/// is skipped entirely; otherwise the stale minimum would drag the maximum
/// around with it.
pub fn apply(
    mut selection: Selection,
    min_value: f32,
    max_value: f32,
    constraints: &Constraints,
    drag: DragState,
) -> Selection {
    if constraints.enable_step && constraints.step > 0.0 {
        selection.min = snap_to_step(selection.min, constraints.step);
        selection.max = snap_to_step(selection.max, constraints.step);
    }

    if !constraints.disable_range {
        let diff = selection.distance();
        if diff < constraints.min_distance {
            if drag == DragState::DraggingLeft {
                selection.min = selection.max - constraints.min_distance;
            } else {
                selection.max = selection.min + constraints.min_distance;
            }
        } else if diff > constraints.max_distance {
            match drag {
                DragState::DraggingLeft => selection.min = selection.max - constraints.max_distance,
                DragState::DraggingRight => selection.max = selection.min + constraints.max_distance,
                DragState::Idle => {}
            }
        }
    }

    selection.min = selection.min.max(min_value);
    selection.max = selection.max.min(max_value);
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_half_away_from_zero() {
        assert_eq!(snap_to_step(12.0, 5.0), 10.0);
        assert_eq!(snap_to_step(12.5, 5.0), 15.0);
        assert_eq!(snap_to_step(-12.5, 5.0), -15.0);
    }

    #[test]
    fn test_min_distance_pulls_dragged_right_handle_up() {
        // Dragging the right handle down to 20 with a 20-wide minimum gap
        // forces it back to selected min + 20.
        let constraints = Constraints {
            min_distance: 20.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(10.0, 20.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingRight,
        );
        assert_eq!(out, Selection::new(10.0, 30.0));
    }

    #[test]
    fn test_min_distance_pulls_dragged_left_handle_down() {
        let constraints = Constraints {
            min_distance: 20.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(80.0, 90.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingLeft,
        );
        assert_eq!(out, Selection::new(70.0, 90.0));
    }

    #[test]
    fn test_max_distance_caps_the_gap() {
        let constraints = Constraints {
            max_distance: 30.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(10.0, 90.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingRight,
        );
        assert_eq!(out, Selection::new(10.0, 40.0));

        let out = apply(
            Selection::new(10.0, 90.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingLeft,
        );
        assert_eq!(out, Selection::new(60.0, 90.0));
    }

    #[test]
    fn test_max_distance_skipped_when_idle() {
        // Programmatic constraint changes do not retroactively shrink the
        // gap when no handle is driving.
        let constraints = Constraints {
            max_distance: 30.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(10.0, 90.0),
            0.0,
            100.0,
            &constraints,
            DragState::Idle,
        );
        assert_eq!(out, Selection::new(10.0, 90.0));
    }

    #[test]
    fn test_min_distance_applies_when_idle() {
        let constraints = Constraints {
            min_distance: 20.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(50.0, 55.0),
            0.0,
            100.0,
            &constraints,
            DragState::Idle,
        );
        assert_eq!(out, Selection::new(50.0, 70.0));
    }

    #[test]
    fn test_single_handle_mode_skips_distance_enforcement() {
        // With range disabled the minimum is inert; a maximum dragged below
        // it must not be pulled back up to close the gap.
        let constraints = Constraints {
            min_distance: 20.0,
            disable_range: true,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(10.0, 5.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingRight,
        );
        assert_eq!(out.max, 5.0);

        // And a wide gap is not capped either.
        let constraints = Constraints {
            max_distance: 30.0,
            disable_range: true,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(10.0, 90.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingRight,
        );
        assert_eq!(out.max, 90.0);
    }

    #[test]
    fn test_range_clamp_runs_last() {
        let constraints = Constraints {
            min_distance: 20.0,
            ..Constraints::default()
        };
        // Pulling the left handle below the domain floor gets clamped back.
        let out = apply(
            Selection::new(5.0, 10.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingLeft,
        );
        assert_eq!(out.min, 0.0);
        assert_eq!(out.max, 10.0);
    }

    #[test]
    fn test_step_snap_runs_before_distance() {
        let constraints = Constraints {
            step: 5.0,
            enable_step: true,
            min_distance: 20.0,
            ..Constraints::default()
        };
        let out = apply(
            Selection::new(12.0, 24.0),
            0.0,
            100.0,
            &constraints,
            DragState::DraggingRight,
        );
        // 12 -> 10, 24 -> 25; gap 15 < 20 pulls max to 30
        assert_eq!(out, Selection::new(10.0, 30.0));
    }
}
