//! Geometric primitives used by layout, hit testing, and painting.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its center point and size.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Return a rectangle grown outward by `amount` on all sides.
    /// Used to enlarge touch targets beyond the visual bounds.
    pub fn expanded(&self, amount: f32) -> Rectangle {
        Rectangle::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Return a rectangle scaled by `factor` about its own center.
    pub fn scaled_about_center(&self, factor: f32) -> Rectangle {
        let center = self.center();
        Rectangle::centered_at(
            center,
            Size::new(self.width * factor, self.height * factor),
        )
    }
}

/// Defines how the widget's width should be sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Fill all available space
    Fill,

    /// Fixed size in pixels
    Units(f32),
}

impl Length {
    /// Resolve the length to a concrete size given the available space.
    pub fn resolve(&self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Length::Fill => {
                if available.is_finite() {
                    available
                } else {
                    intrinsic
                }
            }
            Length::Units(px) => *px,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Units(200.0)
    }
}

/// Size constraints for widget layout.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Limits {
    /// Create limits with fixed size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create limits with a range of sizes.
    pub fn with_range(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Resolve a size within these limits.
    pub fn resolve(&self, width: f32, height: f32) -> Size {
        Size {
            width: width.max(self.min_width).min(self.max_width),
            height: height.max(self.min_height).min(self.max_height),
        }
    }
}

/// The layout of a widget - its position and size.
#[derive(Debug, Clone)]
pub struct Layout {
    bounds: Rectangle,
}

impl Layout {
    /// Create a new layout with the given bounds.
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }

    /// Get the bounds of this layout.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Get the position of this layout.
    pub fn position(&self) -> Point {
        self.bounds.position()
    }

    /// Get the size of this layout.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_rectangle_contains() {
        let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(15.0, 15.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(31.0, 15.0)));
    }

    #[test]
    fn test_rectangle_expanded() {
        let rect = Rectangle::new(100.0, 100.0, 16.0, 16.0);
        let expanded = rect.expanded(30.0);
        assert_eq!(expanded.x, 70.0);
        assert_eq!(expanded.y, 70.0);
        assert_eq!(expanded.width, 76.0);
        assert_eq!(expanded.height, 76.0);
        // Expansion keeps the center fixed
        assert_eq!(expanded.center(), rect.center());
    }

    #[test]
    fn test_rectangle_scaled_about_center() {
        let rect = Rectangle::new(0.0, 0.0, 16.0, 16.0);
        let scaled = rect.scaled_about_center(1.7);
        assert_eq!(scaled.center(), rect.center());
        assert!((scaled.width - 27.2).abs() < 0.01);
    }

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Units(150.0).resolve(400.0, 200.0), 150.0);
        assert_eq!(Length::Fill.resolve(400.0, 200.0), 400.0);
        assert_eq!(Length::Fill.resolve(f32::INFINITY, 200.0), 200.0);
    }

    #[test]
    fn test_limits_resolve() {
        let limits = Limits::with_range(0.0, 400.0, 0.0, 100.0);
        let size = limits.resolve(500.0, 65.0);
        assert_eq!(size.width, 400.0);
        assert_eq!(size.height, 65.0);
    }
}
