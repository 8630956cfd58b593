//! Butterflies fluttering above the flower field.

use glam::Vec2;
use glamour::Size2;

use super::Frame;
use crate::{
    color::Color,
    math::bounce,
    random::{random_range, random_spread},
    surface::Surface,
};

/// Body color.
const BODY_COLOR: Color = Color::rgb(0x333333);

/// Butterfly flapping its wings, bouncing off the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Butterfly {
    /// Center of the body.
    position: Vec2,
    /// Distance moved every frame.
    velocity: Vec2,
    /// Span of a wing.
    size: f32,
    /// Phase of the wing flap.
    wing_phase: f32,
    /// How much the wing phase advances every frame.
    wing_speed: f32,
    /// Wing color.
    color: Color,
}

impl Butterfly {
    /// Spawn a butterfly with a random size, color and velocity.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(random_spread(3.0), random_spread(2.0)),
            size: random_range(6.0, 14.0),
            wing_phase: 0.0,
            wing_speed: random_range(0.2, 0.5),
            // Purple and pink
            color: Color::hsl(random_range(300.0, 360.0), 0.7, 0.6),
        }
    }

    /// Flutter.
    pub fn update(&mut self, frame: &Frame) {
        bounce(&mut self.position, &mut self.velocity, frame.bounds);

        self.animate();
    }

    /// Flap without moving.
    #[inline]
    pub fn animate(&mut self) {
        self.wing_phase += self.wing_speed;
    }

    /// Draw the body and both wings.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let flap = self.wing_phase.sin() * 0.3;
        let wing_radii = Vec2::new(self.size * 0.6, self.size * 0.4);

        surface.save();
        surface.translate(self.position);

        // Body
        surface.fill_rect(
            Vec2::new(-1.0, -self.size * 0.3),
            Size2::new(2.0, self.size * 0.6),
            BODY_COLOR,
        );

        // Left wing
        surface.save();
        surface.rotate(-0.5 + flap);
        surface.fill_ellipse(Vec2::new(-self.size * 0.8, 0.0), wing_radii, 0.0, self.color);
        surface.restore();

        // Right wing
        surface.save();
        surface.rotate(0.5 - flap);
        surface.fill_ellipse(Vec2::new(self.size * 0.8, 0.0), wing_radii, 0.0, self.color);
        surface.restore();

        surface.restore();
    }

    /// Center of the body.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::Butterfly;
    use crate::{entity::Frame, math::Bounds, surface::Recorder};

    #[test]
    fn stays_inside_tiny_bounds() {
        let frame = Frame::new(Bounds::new(10.0, 10.0), 0.0);
        let mut butterfly = Butterfly::new(Vec2::new(5.0, 5.0));

        for _ in 0..500 {
            butterfly.update(&frame);
            assert!(frame.bounds.contains(butterfly.position()));
        }
    }

    #[test]
    fn drawing_is_balanced() {
        let mut recorder = Recorder::new();
        Butterfly::new(Vec2::new(5.0, 5.0)).draw(&mut recorder);

        assert_eq!(recorder.depth(), 0);
    }
}
