//! Mapping between the value domain and track-relative pixel positions.

use crate::geometry::Rectangle;

/// Horizontal padding between the widget edge and each end of the track line.
pub const BAR_SIDE_PADDING: f32 = 16.0;

/// Fraction of the domain a value sits at: 0.0 at `min_value`, 1.0 at
/// `max_value`. Returns 0.0 when `min_value >= max_value`; a zero-width
/// domain has no meaningful percentage and this also guards the division.
pub fn percentage_along_line(value: f32, min_value: f32, max_value: f32) -> f32 {
    if min_value >= max_value {
        return 0.0;
    }
    (value - min_value) / (max_value - min_value)
}

/// The pixel extent of the track line, derived from the widget bounds on
/// every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub min_x: f32,
    pub max_x: f32,
    /// Vertical middle of the widget, where the line sits
    pub mid_y: f32,
}

impl TrackGeometry {
    pub fn from_bounds(bounds: Rectangle) -> Self {
        Self {
            min_x: bounds.x + BAR_SIDE_PADDING,
            max_x: bounds.x + bounds.width - BAR_SIDE_PADDING,
            mid_y: bounds.y + bounds.height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// X coordinate of the handle center for a value.
    pub fn x_for_value(&self, value: f32, min_value: f32, max_value: f32) -> f32 {
        self.min_x + percentage_along_line(value, min_value, max_value) * self.width()
    }

    /// Inverse mapping: the value under a pointer at `x`, accounting for the
    /// pointer grabbing the middle of a handle rather than its left edge.
    /// No clamping is applied here; that is the constraint engine's job.
    pub fn value_for_x(
        &self,
        x: f32,
        handle_diameter: f32,
        min_value: f32,
        max_value: f32,
    ) -> f32 {
        let percentage = (x - self.min_x - handle_diameter / 2.0) / self.width();
        percentage * (max_value - min_value) + min_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_at_domain_ends() {
        assert_eq!(percentage_along_line(0.0, 0.0, 100.0), 0.0);
        assert_eq!(percentage_along_line(100.0, 0.0, 100.0), 1.0);
        assert!((percentage_along_line(50.0, 0.0, 100.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_percentage_monotonic() {
        let mut last = -1.0;
        for v in [0.0, 10.0, 25.0, 60.0, 99.0, 100.0] {
            let pct = percentage_along_line(v, 0.0, 100.0);
            assert!(pct > last);
            last = pct;
        }
    }

    #[test]
    fn test_percentage_degenerate_domain() {
        // min >= max degenerates to 0 rather than dividing by zero
        assert_eq!(percentage_along_line(5.0, 10.0, 10.0), 0.0);
        assert_eq!(percentage_along_line(5.0, 20.0, 10.0), 0.0);
    }

    #[test]
    fn test_track_from_bounds() {
        let track = TrackGeometry::from_bounds(Rectangle::new(0.0, 0.0, 400.0, 65.0));
        assert_eq!(track.min_x, 16.0);
        assert_eq!(track.max_x, 384.0);
        assert_eq!(track.mid_y, 32.5);
        assert_eq!(track.width(), 368.0);
    }

    #[test]
    fn test_x_for_value() {
        let track = TrackGeometry::from_bounds(Rectangle::new(0.0, 0.0, 400.0, 65.0));
        assert_eq!(track.x_for_value(0.0, 0.0, 100.0), 16.0);
        assert_eq!(track.x_for_value(100.0, 0.0, 100.0), 384.0);
        assert!((track.x_for_value(50.0, 0.0, 100.0) - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let track = TrackGeometry::from_bounds(Rectangle::new(0.0, 0.0, 400.0, 65.0));
        let diameter = 16.0;
        for value in [0.0, 13.7, 42.0, 87.5, 100.0] {
            // The pointer sits half a handle to the right of the handle center
            let x = track.x_for_value(value, 0.0, 100.0) + diameter / 2.0;
            let back = track.value_for_x(x, diameter, 0.0, 100.0);
            assert!((back - value).abs() < 1e-3, "{value} -> {back}");
        }
    }
}
