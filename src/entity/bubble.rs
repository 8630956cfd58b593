//! Air bubbles rising through the tank.

use glam::Vec2;

use super::Frame;
use crate::{
    color::Color,
    random::{random, random_range},
    surface::Surface,
};

/// Translucent bubble drifting up, wrapping to the bottom when it reaches the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Center.
    position: Vec2,
    /// Radius.
    size: f32,
    /// Distance risen every frame.
    speed: f32,
    /// Opacity of the whole bubble.
    opacity: f32,
}

impl Bubble {
    /// Spawn a bubble with a random size, speed and opacity.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: random_range(4.0, 12.0),
            speed: random_range(1.0, 3.0),
            opacity: random_range(0.3, 0.8),
        }
    }

    /// Rise, starting over at a random spot on the bottom after passing the top.
    pub fn update(&mut self, frame: &Frame) {
        self.position.y -= self.speed;

        if self.position.y < 0.0 {
            self.position = Vec2::new(random() * frame.bounds.width, frame.bounds.height);
        }
    }

    /// Draw the bubble.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.set_alpha(self.opacity);
        surface.fill_circle(self.position, self.size, Color::WHITE.with_alpha(0.6));
        surface.restore();
    }

    /// Center.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::Bubble;
    use crate::{entity::Frame, math::Bounds};

    #[test]
    fn wraps_to_bottom() {
        let frame = Frame::new(Bounds::new(1200.0, 800.0), 0.0);
        let mut bubble = Bubble::new(Vec2::new(600.0, 0.5));

        bubble.update(&frame);

        assert!((bubble.position().y - 800.0).abs() < f32::EPSILON);
        assert!((0.0..=1200.0).contains(&bubble.position().x));
    }

    #[test]
    fn rises() {
        let frame = Frame::new(Bounds::new(1200.0, 800.0), 0.0);
        let mut bubble = Bubble::new(Vec2::new(600.0, 400.0));

        bubble.update(&frame);

        assert!(bubble.position().y < 400.0);
        assert!((bubble.position().x - 600.0).abs() < f32::EPSILON);
    }
}
