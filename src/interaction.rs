//! Gesture capture: which handle, if any, a pointer-down grabs.

use crate::geometry::{Point, Rectangle};

/// How far a handle's hit region extends beyond its visual bounds, to ease
/// touch targeting.
pub const HANDLE_HIT_MARGIN: f32 = 30.0;

/// Which handle is captured by the active gesture. At most one handle is
/// ever captured at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingLeft,
    DraggingRight,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// Decide which handle a pointer-down at `point` captures.
///
/// Both hit regions are the visual handle bounds expanded by
/// [`HANDLE_HIT_MARGIN`]. When the point lands in both, the handle whose
/// visual center is nearer wins; coincident handles prefer the left one so
/// they can be pulled apart again. With `disable_range` only the right
/// handle exists, so the left is never eligible. A point outside both
/// regions captures nothing.
pub fn capture(
    point: Point,
    left_handle: Rectangle,
    right_handle: Rectangle,
    disable_range: bool,
) -> DragState {
    let right_hit = right_handle.expanded(HANDLE_HIT_MARGIN).contains(point);

    if disable_range {
        return if right_hit {
            DragState::DraggingRight
        } else {
            DragState::Idle
        };
    }

    let left_hit = left_handle.expanded(HANDLE_HIT_MARGIN).contains(point);

    match (left_hit, right_hit) {
        (false, false) => DragState::Idle,
        (true, false) => DragState::DraggingLeft,
        (false, true) => DragState::DraggingRight,
        (true, true) => {
            if left_handle.center() == right_handle.center() {
                // Coincident handles: grab the left one so the user can
                // drag the pair apart.
                DragState::DraggingLeft
            } else if point.distance(left_handle.center()) < point.distance(right_handle.center())
            {
                DragState::DraggingLeft
            } else {
                DragState::DraggingRight
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn handle_at(x: f32) -> Rectangle {
        Rectangle::centered_at(Point::new(x, 33.0), Size::new(16.0, 16.0))
    }

    #[test]
    fn test_outside_both_regions_is_not_captured() {
        let state = capture(
            Point::new(200.0, 33.0),
            handle_at(50.0),
            handle_at(350.0),
            false,
        );
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_hit_margin_extends_reach() {
        // 30px outside the 16px handle still captures
        let state = capture(
            Point::new(50.0 + 8.0 + 29.0, 33.0),
            handle_at(50.0),
            handle_at(350.0),
            false,
        );
        assert_eq!(state, DragState::DraggingLeft);
    }

    #[test]
    fn test_overlapping_regions_pick_nearest_center() {
        let left = handle_at(100.0);
        let right = handle_at(130.0);
        assert_eq!(
            capture(Point::new(108.0, 33.0), left, right, false),
            DragState::DraggingLeft
        );
        assert_eq!(
            capture(Point::new(122.0, 33.0), left, right, false),
            DragState::DraggingRight
        );
    }

    #[test]
    fn test_equidistant_non_coincident_picks_right() {
        let left = handle_at(100.0);
        let right = handle_at(130.0);
        assert_eq!(
            capture(Point::new(115.0, 33.0), left, right, false),
            DragState::DraggingRight
        );
    }

    #[test]
    fn test_coincident_handles_prefer_left() {
        let left = handle_at(384.0);
        let right = handle_at(384.0);
        assert_eq!(
            capture(Point::new(384.0, 33.0), left, right, false),
            DragState::DraggingLeft
        );
    }

    #[test]
    fn test_disable_range_never_captures_left() {
        let left = handle_at(384.0);
        let right = handle_at(384.0);
        // Even at the coincident position, range-disabled mode only ever
        // captures the right handle.
        assert_eq!(
            capture(Point::new(384.0, 33.0), left, right, true),
            DragState::DraggingRight
        );
        // And a touch near only the left handle captures nothing.
        assert_eq!(
            capture(Point::new(50.0, 33.0), handle_at(50.0), handle_at(350.0), true),
            DragState::Idle
        );
    }
}
