//! Value formatting and text measurement.
//!
//! Labels are sized during layout from their formatted text and approximate
//! font metrics; the rendering backend does the actual rasterization.

/// Converts a numeric value into its displayed label string.
pub trait ValueFormatter {
    fn format(&self, value: f32) -> String;
}

/// Default formatter: decimal notation with a fixed number of fraction
/// digits (zero by default).
#[derive(Debug, Clone, Copy)]
pub struct DecimalFormatter {
    pub fraction_digits: usize,
}

impl DecimalFormatter {
    pub fn new(fraction_digits: usize) -> Self {
        Self { fraction_digits }
    }
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self { fraction_digits: 0 }
    }
}

impl ValueFormatter for DecimalFormatter {
    fn format(&self, value: f32) -> String {
        format!("{:.*}", self.fraction_digits, value)
    }
}

/// Metrics for a specific font/size combination.
///
/// These are approximations used during layout; the ratios below are tuned
/// for the default embedded font.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Create metrics for a specific font size with the default ratios.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }

    /// Create metrics with custom ratios.
    pub fn custom(size: f32, char_width_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            size,
            char_width_ratio,
            line_height_ratio,
        }
    }

    /// Estimate the width of a single line of text.
    pub fn line_width(&self, text: &str) -> f32 {
        let char_count = text.chars().count() as f32;
        char_count * self.size * self.char_width_ratio
    }

    /// Get the line height.
    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_formatter_zero_digits() {
        let f = DecimalFormatter::default();
        assert_eq!(f.format(12.0), "12");
        assert_eq!(f.format(89.7), "90");
    }

    #[test]
    fn test_decimal_formatter_two_digits() {
        let f = DecimalFormatter::new(2);
        assert_eq!(f.format(12.345), "12.35");
    }

    #[test]
    fn test_line_width() {
        let m = TextMetrics::new(16.0);
        // 5 chars * 16.0 * 0.6 = 48.0
        assert!((m.line_width("hello") - 48.0).abs() < 0.01);
    }

    #[test]
    fn test_line_height() {
        let m = TextMetrics::new(12.0);
        assert!((m.line_height() - 14.4).abs() < 0.01);
    }
}
