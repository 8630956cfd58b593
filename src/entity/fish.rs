//! Fish swimming through the tank.

use glam::Vec2;

use super::Frame;
use crate::{
    color::Color,
    math::bounce,
    random::{random_range, random_sign, random_spread, random_spread_nonzero},
    surface::Surface,
};

/// Fish with a wagging tail, bouncing off the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    /// Center of the body.
    position: Vec2,
    /// Distance moved every frame.
    velocity: Vec2,
    /// Radius of the body.
    size: f32,
    /// Body color.
    color: Color,
    /// `1.0` when facing right, `-1.0` when facing left.
    facing: f32,
    /// Phase of the tail wag.
    tail_phase: f32,
    /// How much the tail phase advances every frame.
    tail_speed: f32,
}

impl Fish {
    /// Spawn a fish with a random size, color and velocity.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(random_spread(2.0), random_spread(1.0)),
            size: random_range(15.0, 35.0),
            // Blue-green
            color: Color::hsl(random_range(180.0, 240.0), 0.7, 0.5),
            facing: random_sign(),
            tail_phase: 0.0,
            tail_speed: random_range(0.1, 0.3),
        }
    }

    /// Replace the velocity.
    #[inline]
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;

        self
    }

    /// Replace the body radius.
    #[inline]
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;

        self
    }

    /// Swim and wag the tail.
    pub fn update(&mut self, frame: &Frame) {
        let bounced = bounce(&mut self.position, &mut self.velocity, frame.bounds);
        if bounced.x {
            // Turn around
            self.facing = -self.facing;
        }

        self.animate();
    }

    /// Wag the tail without moving.
    #[inline]
    pub fn animate(&mut self) {
        self.tail_phase += self.tail_speed;
    }

    /// Draw the fish, mirrored to the direction it's facing.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = self.size;
        let wag = self.tail_phase.sin();

        surface.save();
        surface.translate(self.position);
        surface.scale(Vec2::new(self.facing, 1.0));

        // Body
        surface.fill_ellipse(Vec2::ZERO, Vec2::new(size, size * 0.6), 0.0, self.color);

        // Tail
        surface.fill_polygon(
            &[
                Vec2::new(-size * 0.8, 0.0),
                Vec2::new(-size * 1.5, -size * 0.3 * wag),
                Vec2::new(-size * 1.5, size * 0.3 * wag),
            ],
            self.color,
        );

        // Eye
        surface.fill_circle(Vec2::new(size * 0.3, -size * 0.2), size * 0.15, Color::WHITE);
        surface.fill_circle(Vec2::new(size * 0.35, -size * 0.2), size * 0.08, Color::BLACK);

        // Dorsal fin
        surface.fill_polygon(
            &[
                Vec2::new(0.0, -size * 0.4),
                Vec2::new(-size * 0.3, -size * 0.6),
                Vec2::new(-size * 0.1, -size * 0.4),
            ],
            self.color,
        );

        surface.restore();
    }

    /// Whether the point lies within the body radius.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.size * self.size
    }

    /// Place the fish.
    #[inline]
    pub fn move_to(&mut self, point: Vec2) {
        self.position = point;
    }

    /// Send the fish off in a random direction after being dropped.
    #[inline]
    pub fn release(&mut self) {
        self.velocity = Vec2::new(random_spread_nonzero(3.0), random_spread_nonzero(2.0));
    }

    /// Center of the body.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Distance moved every frame.
    #[inline]
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// `1.0` when facing right, `-1.0` when facing left.
    #[inline]
    #[must_use]
    pub const fn facing(&self) -> f32 {
        self.facing
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::Fish;
    use crate::{entity::Frame, math::Bounds, surface::Recorder};

    #[test]
    fn bounces_off_right_edge() {
        let frame = Frame::new(Bounds::new(1200.0, 800.0), 0.0);
        let mut fish = Fish::new(Vec2::new(1195.0, 400.0)).with_velocity(Vec2::new(3.0, 0.0));
        let facing = fish.facing();

        fish.update(&frame);
        fish.update(&frame);

        assert!(fish.velocity().x < 0.0);
        assert!((fish.position().x - 1200.0).abs() < f32::EPSILON);
        assert!((fish.facing() + facing).abs() < f32::EPSILON);
    }

    #[test]
    fn tail_keeps_wagging() {
        let frame = Frame::new(Bounds::new(1200.0, 800.0), 0.0);
        let mut fish = Fish::new(Vec2::new(600.0, 400.0));
        let before = fish.tail_phase;

        fish.update(&frame);

        assert!(fish.tail_phase > before);
    }

    #[test]
    fn hit_test_uses_body_radius() {
        let fish = Fish::new(Vec2::new(100.0, 100.0)).with_size(20.0);

        assert!(fish.contains(Vec2::new(100.0, 100.0)));
        assert!(fish.contains(Vec2::new(119.0, 100.0)));
        assert!(!fish.contains(Vec2::new(120.0, 100.0)));
        assert!(!fish.contains(Vec2::new(115.0, 115.0)));
    }

    #[test]
    fn release_sets_new_velocity() {
        let mut fish = Fish::new(Vec2::ZERO).with_velocity(Vec2::ZERO);
        fish.move_to(Vec2::new(50.0, 60.0));
        fish.release();

        assert_eq!(fish.position(), Vec2::new(50.0, 60.0));
        assert!(fish.velocity().x.abs() > 0.0);
        assert!(fish.velocity().y.abs() > 0.0);
    }

    #[test]
    fn drawing_is_balanced() {
        let mut recorder = Recorder::new();
        Fish::new(Vec2::new(10.0, 10.0)).draw(&mut recorder);

        assert_eq!(recorder.depth(), 0);
        assert!(!recorder.is_empty());
    }
}
