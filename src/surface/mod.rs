//! Immediate-mode vector drawing target.
//!
//! Everything is drawn in logical coordinates, how those map to pixels on screen is up to the implementation.

mod recorder;

use glam::Vec2;
use glamour::Size2;

pub use recorder::{DrawCommand, Recorder};

use crate::color::Color;

/// Color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Where on the gradient the stop lies, between `0.0` and `1.0`.
    pub offset: f32,
    /// Color at the stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new stop.
    #[inline]
    #[must_use]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Surface accepting immediate-mode vector drawing calls.
///
/// Transformations stack on each other until the matching [`Surface::restore`].
pub trait Surface {
    /// Push the current transformation and opacity on the state stack.
    fn save(&mut self);

    /// Pop the transformation and opacity from the state stack.
    fn restore(&mut self);

    /// Move the origin.
    fn translate(&mut self, offset: Vec2);

    /// Rotate around the origin in radians.
    fn rotate(&mut self, angle: f32);

    /// Scale each axis, a negative factor mirrors.
    fn scale(&mut self, factor: Vec2);

    /// Set the opacity multiplied with every following draw call.
    fn set_alpha(&mut self, alpha: f32);

    /// Erase a rectangle to transparent.
    fn clear_rect(&mut self, origin: Vec2, size: Size2);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, origin: Vec2, size: Size2, color: Color);

    /// Fill a rectangle with a vertical linear gradient running from its top to its bottom edge.
    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Size2, stops: &[GradientStop]);

    /// Fill an ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse.
    /// * `radii` - Horizontal and vertical radius before rotation.
    /// * `rotation` - Rotation of the ellipse around its center in radians.
    /// * `color` - Fill color.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draw a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Draw the outline of a circle.
    ///
    /// An empty `dash` draws a solid line, otherwise it alternates between drawn and skipped segments of the listed lengths.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color, dash: &[f32]);

    /// Fill a circle.
    #[inline]
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fill_ellipse(center, Vec2::splat(radius), 0.0, color);
    }
}
