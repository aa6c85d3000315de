//! Geometric primitives

pub use tiny_skia::Point;
use tiny_skia::{Path, PathBuilder};

/// Cubic Bézier control distance approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Width and height
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of a box of this size at the origin
    pub fn center(&self) -> Point {
        Point::from_xy(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::from_xy(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::from_xy(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::from_xy(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A rectangle with elliptical corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundRect {
    pub rect: Rect,
    /// Horizontal corner radius
    pub rx: f32,
    /// Vertical corner radius
    pub ry: f32,
}

impl RoundRect {
    pub fn new(rect: Rect, rx: f32, ry: f32) -> Self {
        Self { rect, rx, ry }
    }

    pub fn uniform(rect: Rect, radius: f32) -> Self {
        Self::new(rect, radius, radius)
    }

    /// Radii actually used, clamped to half the rectangle's extent
    pub fn effective_radii(&self) -> (f32, f32) {
        (
            self.rx.clamp(0.0, self.rect.width / 2.0),
            self.ry.clamp(0.0, self.rect.height / 2.0),
        )
    }

    /// Outline as a closed path; `None` for empty or non-finite rectangles
    pub fn to_path(&self) -> Option<Path> {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = self.rect;
        if !(w > 0.0 && h > 0.0) || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let (rx, ry) = self.effective_radii();
        if rx <= 0.0 || ry <= 0.0 {
            return tiny_skia::Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect);
        }

        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        let (right, bottom) = (x + w, y + h);

        let mut pb = PathBuilder::new();
        pb.move_to(x + rx, y);
        pb.line_to(right - rx, y);
        pb.cubic_to(right - rx + kx, y, right, y + ry - ky, right, y + ry);
        pb.line_to(right, bottom - ry);
        pb.cubic_to(right, bottom - ry + ky, right - rx + kx, bottom, right - rx, bottom);
        pb.line_to(x + rx, bottom);
        pb.cubic_to(x + rx - kx, bottom, x, bottom - ry + ky, x, bottom - ry);
        pb.line_to(x, y + ry);
        pb.cubic_to(x, y + ry - ky, x + rx - kx, y, x + rx, y);
        pb.close();
        pb.finish()
    }
}
