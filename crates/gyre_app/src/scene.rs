//! The animated scene
//!
//! A black background with a 100x100 rounded rectangle at the center of
//! the canvas, filled with a white-yellow-red diagonal gradient and
//! rotated about the canvas center.

use gyre_paint::{
    rotation_about, Argb32, Canvas, LinearGradient, Rect, RoundRect, Size,
};

/// Size of the rounded rectangle
pub const SHAPE_SIZE: Size = Size::new(100.0, 100.0);

/// Corner radius of the rounded rectangle
pub const CORNER_RADIUS: f32 = 20.0;

/// Background color
pub const BACKGROUND: Argb32 = Argb32::BLACK;

/// The gradient for a shape occupying `rect`
pub fn shape_gradient(rect: &Rect) -> LinearGradient {
    LinearGradient::new(rect.top_left(), rect.bottom_right())
        .with_stop(0.0, Argb32::WHITE)
        .with_stop(0.5, Argb32::YELLOW)
        .with_stop(1.0, Argb32::RED)
}

/// Paint one frame at `angle` radians
pub fn paint_scene<C: Canvas + ?Sized>(canvas: &mut C, angle: f64) {
    let center = canvas.size().center();

    canvas.set_source(BACKGROUND.into());
    canvas.fill_all();

    canvas.save();
    canvas.transform(&rotation_about(center, angle));

    let rect = Rect::centered(center, SHAPE_SIZE);
    canvas.set_source(shape_gradient(&rect).into());
    canvas.fill_round(&RoundRect::uniform(rect, CORNER_RADIUS));

    canvas.restore();
}
