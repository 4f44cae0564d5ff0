use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in overlay coordinate space.
///
/// Detections arrive already transformed into this space by the capture
/// collaborator; the tracker never converts coordinates itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Degenerate rectangles are accepted as-is; this exists for
    /// observers that want to skip drawing them.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let (cx, cy) = r.center();
        assert_relative_eq!(cx, 60.0);
        assert_relative_eq!(cy, 45.0);
    }

    #[test]
    fn test_area() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.5);
        assert_relative_eq!(r.area(), 10.0);
    }

    #[test]
    fn test_zero_is_empty() {
        assert!(Rect::ZERO.is_empty());
    }

    #[test]
    fn test_negative_width_is_empty() {
        assert!(Rect::new(0.0, 0.0, -5.0, 10.0).is_empty());
    }

    #[test]
    fn test_positive_rect_is_not_empty() {
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
