//! Recording canvas
//!
//! `RecordingContext` keeps every call as a [`DrawCommand`] instead of
//! rasterizing, so callers can check exactly what a paint routine issued.

use crate::context::{Canvas, Source};
use crate::primitives::{RoundRect, Size};
use crate::transform::Transform;

/// A recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetSource(Source),
    FillAll,
    Save,
    Restore,
    Transform(Transform),
    /// Rounded-rect fill with the transform in effect when it was issued
    FillRound {
        round: RoundRect,
        transform: Transform,
        source: Source,
    },
}

/// Canvas that records commands
#[derive(Debug, Default)]
pub struct RecordingContext {
    size: Size,
    commands: Vec<DrawCommand>,
    transform: Transform,
    source: Source,
    saved: Vec<(Transform, Source)>,
}

impl RecordingContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }
}

impl Canvas for RecordingContext {
    fn size(&self) -> Size {
        self.size
    }

    fn set_source(&mut self, source: Source) {
        self.source = source.clone();
        self.commands.push(DrawCommand::SetSource(source));
    }

    fn fill_all(&mut self) {
        self.commands.push(DrawCommand::FillAll);
    }

    fn save(&mut self) {
        self.saved.push((self.transform, self.source.clone()));
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some((transform, source)) = self.saved.pop() {
            self.transform = transform;
            self.source = source;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn transform(&mut self, transform: &Transform) {
        self.transform = self.transform.pre_concat(*transform);
        self.commands.push(DrawCommand::Transform(*transform));
    }

    fn current_transform(&self) -> Transform {
        self.transform
    }

    fn fill_round(&mut self, round: &RoundRect) {
        self.commands.push(DrawCommand::FillRound {
            round: *round,
            transform: self.transform,
            source: self.source.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb32;
    use crate::primitives::Rect;

    #[test]
    fn test_records_in_order() {
        let mut ctx = RecordingContext::new(800.0, 600.0);
        ctx.set_source(Argb32::BLACK.into());
        ctx.fill_all();
        ctx.save();
        ctx.transform(&Transform::from_translate(1.0, 2.0));
        ctx.restore();

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::SetSource(Argb32::BLACK.into()),
                DrawCommand::FillAll,
                DrawCommand::Save,
                DrawCommand::Transform(Transform::from_translate(1.0, 2.0)),
                DrawCommand::Restore,
            ]
        );
        assert_eq!(ctx.save_depth(), 0);
        assert_eq!(ctx.current_transform(), Transform::identity());
    }

    #[test]
    fn test_fill_round_captures_state() {
        let mut ctx = RecordingContext::new(100.0, 100.0);
        let round = RoundRect::uniform(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0);
        ctx.set_source(Argb32::RED.into());
        ctx.save();
        ctx.transform(&Transform::from_translate(3.0, 4.0));
        ctx.fill_round(&round);
        ctx.restore();

        let fill = ctx
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::FillRound { .. }))
            .unwrap();
        assert_eq!(
            fill,
            &DrawCommand::FillRound {
                round,
                transform: Transform::from_translate(3.0, 4.0),
                source: Argb32::RED.into(),
            }
        );
    }
}
