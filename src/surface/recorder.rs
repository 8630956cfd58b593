//! Surface that records every call instead of drawing.

use glam::Vec2;
use glamour::Size2;

use super::{GradientStop, Surface};
use crate::color::Color;

/// Single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    SetAlpha(f32),
    ClearRect {
        origin: Vec2,
        size: Size2,
    },
    FillRect {
        origin: Vec2,
        size: Size2,
        color: Color,
    },
    FillVerticalGradient {
        origin: Vec2,
        size: Size2,
        stops: Vec<GradientStop>,
    },
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
        dash: Vec<f32>,
    },
}

/// Headless surface, used for testing and for running scenes outside of a browser.
#[derive(Debug, Default)]
pub struct Recorder {
    /// Every call in the order it was made.
    commands: Vec<DrawCommand>,
    /// Depth of the save stack, to catch unbalanced save and restore pairs.
    depth: usize,
}

impl Recorder {
    /// Create an empty recorder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls.
    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Amount of recorded calls.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Amount of recorded calls matching the predicate.
    #[inline]
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    /// Current depth of the save stack.
    ///
    /// Zero when every [`Surface::save`] has a matching [`Surface::restore`].
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Forget all recorded calls.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn scale(&mut self, factor: Vec2) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn clear_rect(&mut self, origin: Vec2, size: Size2) {
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Size2, color: Color) {
        self.commands
            .push(DrawCommand::FillRect { origin, size, color });
    }

    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Size2, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::FillVerticalGradient {
            origin,
            size,
            stops: stops.to_vec(),
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radii,
            rotation,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color, dash: &[f32]) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
            dash: dash.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{DrawCommand, Recorder};
    use crate::{color::Color, surface::Surface};

    #[test]
    fn records_in_order() {
        let mut recorder = Recorder::new();
        recorder.save();
        recorder.translate(Vec2::new(1.0, 2.0));
        recorder.fill_circle(Vec2::ZERO, 4.0, Color::WHITE);

        assert_eq!(recorder.depth(), 1);
        recorder.restore();
        assert_eq!(recorder.depth(), 0);

        assert_eq!(recorder.len(), 4);
        assert_eq!(
            recorder.commands()[2],
            DrawCommand::FillEllipse {
                center: Vec2::ZERO,
                radii: Vec2::splat(4.0),
                rotation: 0.0,
                color: Color::WHITE,
            }
        );
    }
}
