//! Gradient fills

use smallvec::SmallVec;
use tiny_skia::{GradientStop, Point, Shader, SpreadMode, Transform};

use crate::color::Color;

/// A (position, color) pair on a gradient ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`
    pub offset: f32,
    pub color: Color,
}

/// Linear gradient between two points
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    stops: SmallVec<[ColorStop; 4]>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: SmallVec::new(),
        }
    }

    /// Add a color stop
    ///
    /// The offset is clamped to `[0, 1]`. Stops stay ordered by offset; a
    /// stop with the same offset as an existing one goes after it.
    pub fn add_stop(&mut self, offset: f32, color: impl Into<Color>) {
        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(
            index,
            ColorStop {
                offset,
                color: color.into(),
            },
        );
    }

    /// Builder form of [`add_stop`](Self::add_stop)
    pub fn with_stop(mut self, offset: f32, color: impl Into<Color>) -> Self {
        self.add_stop(offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Rasterizer shader in user space mapped by `transform`
    ///
    /// `None` when the gradient has no stops.
    pub fn to_shader(&self, transform: Transform) -> Option<Shader<'static>> {
        if self.stops.is_empty() {
            return None;
        }

        let stops = self
            .stops
            .iter()
            .map(|stop| GradientStop::new(stop.offset, stop.color))
            .collect();

        tiny_skia::LinearGradient::new(self.start, self.end, stops, SpreadMode::Pad, transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb32;

    fn offsets(gradient: &LinearGradient) -> Vec<f32> {
        gradient.stops().iter().map(|s| s.offset).collect()
    }

    #[test]
    fn test_stops_kept_sorted() {
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 10.0))
            .with_stop(1.0, Argb32::RED)
            .with_stop(0.0, Argb32::WHITE)
            .with_stop(0.5, Argb32::YELLOW);
        assert_eq!(offsets(&gradient), vec![0.0, 0.5, 1.0]);
        assert_eq!(gradient.stops()[1].color, Argb32::YELLOW.to_color());
    }

    #[test]
    fn test_offsets_clamped() {
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 0.0))
            .with_stop(-2.0, Argb32::WHITE)
            .with_stop(7.0, Argb32::RED);
        assert_eq!(offsets(&gradient), vec![0.0, 1.0]);
    }

    #[test]
    fn test_equal_offsets_keep_insertion_order() {
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 0.0))
            .with_stop(0.5, Argb32::WHITE)
            .with_stop(0.5, Argb32::RED);
        assert_eq!(gradient.stops()[0].color, Argb32::WHITE.to_color());
        assert_eq!(gradient.stops()[1].color, Argb32::RED.to_color());
    }

    #[test]
    fn test_empty_gradient_has_no_shader() {
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 0.0));
        assert!(gradient.to_shader(Transform::identity()).is_none());
    }

    #[test]
    fn test_shader_built() {
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 0.0))
            .with_stop(0.0, Argb32::WHITE)
            .with_stop(1.0, Argb32::RED);
        assert!(gradient.to_shader(Transform::identity()).is_some());
    }
}
