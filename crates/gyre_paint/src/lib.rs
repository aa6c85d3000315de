//! Gyre Paint/Canvas API
//!
//! A small 2D drawing API over tiny-skia, bound to raw XRGB pixel buffers.
//!
//! # Features
//!
//! - Solid and linear-gradient sources with ordered color stops
//! - Rounded rectangles
//! - Affine transform stack with save/restore
//! - [`RecordingContext`] for inspecting what a paint routine issued
//!
//! # Example
//!
//! ```ignore
//! use gyre_paint::*;
//!
//! let mut pixels = vec![0u32; 640 * 480];
//! let mut ctx = PaintContext::begin(RasterTarget::new(&mut pixels, 640, 480, 640))?;
//!
//! ctx.set_source(Argb32::BLACK.into());
//! ctx.fill_all();
//!
//! ctx.save();
//! ctx.transform(&rotation_about(Point::from_xy(320.0, 240.0), 0.5));
//! ctx.set_source(Argb32::RED.into());
//! ctx.fill_round(&RoundRect::uniform(Rect::new(270.0, 190.0, 100.0, 100.0), 20.0));
//! ctx.restore();
//!
//! ctx.end();
//! ```

pub mod color;
pub mod context;
pub mod error;
pub mod gradient;
pub mod primitives;
pub mod recording;
pub mod transform;

pub use color::{Argb32, Color};
pub use context::{Canvas, PaintContext, RasterTarget, Source};
pub use error::{PaintError, Result};
pub use gradient::{ColorStop, LinearGradient};
pub use primitives::{Point, Rect, RoundRect, Size};
pub use recording::{DrawCommand, RecordingContext};
pub use transform::{map_point, rotation_about, Transform};
