//! Paint contexts
//!
//! [`Canvas`] is the drawing API the application paints through.
//! [`PaintContext`] implements it by rasterizing with tiny-skia into a
//! borrowed XRGB pixel buffer.

use tiny_skia::{FillRule, Paint, Pixmap};

use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::gradient::LinearGradient;
use crate::primitives::{RoundRect, Size};
use crate::transform::Transform;

/// What fills are painted with
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Solid(Color),
    Linear(LinearGradient),
}

impl Default for Source {
    fn default() -> Self {
        Source::Solid(Color::BLACK)
    }
}

impl From<Color> for Source {
    fn from(color: Color) -> Self {
        Source::Solid(color)
    }
}

impl From<crate::color::Argb32> for Source {
    fn from(color: crate::color::Argb32) -> Self {
        Source::Solid(color.to_color())
    }
}

impl From<LinearGradient> for Source {
    fn from(gradient: LinearGradient) -> Self {
        Source::Linear(gradient)
    }
}

/// 2D drawing API with a save/restore state stack
pub trait Canvas {
    /// Drawable size in pixels
    fn size(&self) -> Size;

    /// Set the source used by subsequent fills
    fn set_source(&mut self, source: Source);

    /// Fill the whole canvas, ignoring the current transform's geometry
    fn fill_all(&mut self);

    /// Push the current transform and source
    fn save(&mut self);

    /// Pop the state pushed by the matching [`save`](Canvas::save)
    fn restore(&mut self);

    /// Multiply `transform` into the current transform
    ///
    /// `transform` is applied to geometry before the existing transform.
    fn transform(&mut self, transform: &Transform);

    /// The transform applied to geometry right now
    fn current_transform(&self) -> Transform;

    /// Fill a rounded rectangle with the current source
    fn fill_round(&mut self, round: &RoundRect);
}

/// A raw XRGB pixel buffer to paint into
pub struct RasterTarget<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
    /// Row stride in pixels
    stride: usize,
}

impl<'a> RasterTarget<'a> {
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32, stride: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::EmptyTarget {
                width: self.width,
                height: self.height,
            });
        }
        if self.stride < self.width as usize {
            return Err(PaintError::StrideTooSmall {
                stride: self.stride,
                width: self.width,
            });
        }
        let needed = self.stride * (self.height as usize - 1) + self.width as usize;
        if self.pixels.len() < needed {
            return Err(PaintError::BufferTooSmall {
                needed,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
struct PaintState {
    transform: Transform,
    source: Source,
}

/// Raster paint context bound to a [`RasterTarget`]
///
/// Drawing happens on an internal canvas seeded from the target; [`end`]
/// writes the result back. Dropping the context without calling [`end`]
/// leaves the target untouched.
///
/// [`end`]: PaintContext::end
pub struct PaintContext<'a> {
    target: RasterTarget<'a>,
    pixmap: Pixmap,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl<'a> PaintContext<'a> {
    /// Bind a paint context to `target`
    pub fn begin(target: RasterTarget<'a>) -> Result<Self> {
        target.validate()?;

        let mut pixmap =
            Pixmap::new(target.width, target.height).ok_or(PaintError::Allocation {
                width: target.width,
                height: target.height,
            })?;

        let width = target.width as usize;
        for (row, dst) in pixmap.data_mut().chunks_exact_mut(width * 4).enumerate() {
            let src = &target.pixels[row * target.stride..][..width];
            for (px, rgba) in src.iter().zip(dst.chunks_exact_mut(4)) {
                rgba[0] = (px >> 16) as u8;
                rgba[1] = (px >> 8) as u8;
                rgba[2] = *px as u8;
                rgba[3] = 0xFF;
            }
        }

        tracing::trace!(width = target.width, height = target.height, "paint context bound");

        Ok(Self {
            target,
            pixmap,
            state: PaintState::default(),
            saved: Vec::new(),
        })
    }

    /// Write the painted pixels back to the target and release it
    pub fn end(self) {
        if !self.saved.is_empty() {
            tracing::debug!(depth = self.saved.len(), "paint ended with unrestored state");
        }

        let width = self.target.width as usize;
        let stride = self.target.stride;
        let pixels = self.target.pixels;
        for (row, src) in self.pixmap.data().chunks_exact(width * 4).enumerate() {
            let dst = &mut pixels[row * stride..][..width];
            // Premultiplied channels are the color composited over black
            for (px, rgba) in dst.iter_mut().zip(src.chunks_exact(4)) {
                *px = (rgba[0] as u32) << 16 | (rgba[1] as u32) << 8 | rgba[2] as u32;
            }
        }
    }

    fn paint(&self, transform: Transform) -> Option<Paint<'static>> {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        match &self.state.source {
            Source::Solid(color) => paint.set_color(*color),
            Source::Linear(gradient) => paint.shader = gradient.to_shader(transform)?,
        }
        Some(paint)
    }
}

impl Canvas for PaintContext<'_> {
    fn size(&self) -> Size {
        Size::new(self.target.width as f32, self.target.height as f32)
    }

    fn set_source(&mut self, source: Source) {
        self.state.source = source;
    }

    fn fill_all(&mut self) {
        if let Source::Solid(color) = self.state.source {
            self.pixmap.fill(color);
            return;
        }

        let Some(paint) = self.paint(self.state.transform) else {
            tracing::trace!("fill_all skipped: source has no stops");
            return;
        };
        if let Some(rect) = tiny_skia::Rect::from_xywh(
            0.0,
            0.0,
            self.pixmap.width() as f32,
            self.pixmap.height() as f32,
        ) {
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => tracing::trace!("restore without matching save ignored"),
        }
    }

    fn transform(&mut self, transform: &Transform) {
        self.state.transform = self.state.transform.pre_concat(*transform);
    }

    fn current_transform(&self) -> Transform {
        self.state.transform
    }

    fn fill_round(&mut self, round: &RoundRect) {
        let transform = self.state.transform;
        let Some(path) = round.to_path().and_then(|path| path.transform(transform)) else {
            tracing::trace!(?round, "fill_round skipped: degenerate shape");
            return;
        };
        let Some(paint) = self.paint(transform) else {
            tracing::trace!("fill_round skipped: source has no stops");
            return;
        };
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb32;
    use crate::primitives::{Point, Rect};

    fn xrgb(r: u8, g: u8, b: u8) -> u32 {
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    #[test]
    fn test_begin_rejects_empty_target() {
        let mut pixels: [u32; 0] = [];
        let err = PaintContext::begin(RasterTarget::new(&mut pixels, 0, 10, 0)).err();
        assert_eq!(err, Some(PaintError::EmptyTarget { width: 0, height: 10 }));
    }

    #[test]
    fn test_begin_rejects_short_stride() {
        let mut pixels = [0u32; 16];
        let err = PaintContext::begin(RasterTarget::new(&mut pixels, 4, 4, 3)).err();
        assert_eq!(err, Some(PaintError::StrideTooSmall { stride: 3, width: 4 }));
    }

    #[test]
    fn test_begin_rejects_small_buffer() {
        let mut pixels = [0u32; 10];
        let err = PaintContext::begin(RasterTarget::new(&mut pixels, 4, 4, 4)).err();
        assert_eq!(
            err,
            Some(PaintError::BufferTooSmall {
                needed: 16,
                actual: 10
            })
        );
    }

    #[test]
    fn test_fill_all_solid() {
        let mut pixels = [0x0012_3456u32; 6];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 3, 2, 3)).unwrap();
        ctx.set_source(Argb32(0xFF10_2030).into());
        ctx.fill_all();
        ctx.end();
        assert!(pixels.iter().all(|&p| p == xrgb(0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_drop_without_end_leaves_target() {
        let mut pixels = [0x00AB_CDEFu32; 4];
        {
            let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 2, 2, 2)).unwrap();
            ctx.set_source(Argb32::RED.into());
            ctx.fill_all();
        }
        assert!(pixels.iter().all(|&p| p == 0x00AB_CDEF));
    }

    #[test]
    fn test_stride_padding_untouched() {
        // 2x2 image in rows of 3; the third column is padding
        let mut pixels = [7u32; 6];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 2, 2, 3)).unwrap();
        ctx.set_source(Argb32::WHITE.into());
        ctx.fill_all();
        ctx.end();
        assert_eq!(pixels, [0xFFFFFF, 0xFFFFFF, 7, 0xFFFFFF, 0xFFFFFF, 7]);
    }

    #[test]
    fn test_seeded_from_target() {
        let mut pixels = [xrgb(1, 2, 3); 4];
        let ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 2, 2, 2)).unwrap();
        ctx.end();
        assert!(pixels.iter().all(|&p| p == xrgb(1, 2, 3)));
    }

    #[test]
    fn test_fill_round_covers_center_only() {
        let mut pixels = vec![0u32; 40 * 40];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 40, 40, 40)).unwrap();
        ctx.set_source(Argb32::RED.into());
        ctx.fill_round(&RoundRect::uniform(Rect::new(10.0, 10.0, 20.0, 20.0), 4.0));
        ctx.end();

        assert_eq!(pixels[20 * 40 + 20], xrgb(255, 0, 0));
        assert_eq!(pixels[0], 0);
        // Corner is cut by the radius
        assert_eq!(pixels[10 * 40 + 10], 0);
    }

    #[test]
    fn test_gradient_fill_ramps() {
        let mut pixels = vec![0u32; 100];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 100, 1, 100)).unwrap();
        let gradient = LinearGradient::new(Point::from_xy(0.0, 0.0), Point::from_xy(100.0, 0.0))
            .with_stop(0.0, Argb32::WHITE)
            .with_stop(1.0, Argb32::RED);
        ctx.set_source(gradient.into());
        ctx.fill_all();
        ctx.end();

        let green = |p: u32| (p >> 8) & 0xFF;
        assert!(green(pixels[2]) > 240);
        assert!(green(pixels[97]) < 15);
        assert_eq!(pixels[50] >> 16, 0xFF);
    }

    #[test]
    fn test_save_restore_transform() {
        let mut pixels = [0u32; 4];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 2, 2, 2)).unwrap();
        ctx.save();
        ctx.transform(&Transform::from_translate(5.0, 5.0));
        assert_eq!(ctx.current_transform(), Transform::from_translate(5.0, 5.0));
        ctx.restore();
        assert_eq!(ctx.current_transform(), Transform::identity());
        // Unbalanced restore is harmless
        ctx.restore();
        assert_eq!(ctx.current_transform(), Transform::identity());
    }

    #[test]
    fn test_transformed_fill_moves_shape() {
        let mut pixels = vec![0u32; 20 * 20];
        let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 20, 20, 20)).unwrap();
        ctx.set_source(Argb32::WHITE.into());
        ctx.transform(&Transform::from_translate(10.0, 10.0));
        ctx.fill_round(&RoundRect::uniform(Rect::new(0.0, 0.0, 8.0, 8.0), 0.0));
        ctx.end();

        assert_eq!(pixels[14 * 20 + 14], 0xFFFFFF);
        assert_eq!(pixels[4 * 20 + 4], 0);
    }
}
