//! Crocodile patrolling the pond, snapping its jaws when poked.

use glam::Vec2;

use super::Frame;
use crate::{
    color::Color,
    math::{bounce, lerp},
    random::{random_range, random_spread, random_spread_nonzero},
    surface::Surface,
};

/// Jaw angle in radians when fully open.
const JAW_OPEN: f32 = 0.6;
/// Fraction of the remaining jaw angle covered every frame.
const JAW_LERP: f32 = 0.2;
/// Time the mouth stays open after a snap.
const MOUTH_CLOSE_DELAY_MS: f64 = 800.0;

/// Skin color.
const SKIN_COLOR: Color = Color::rgb(0x3B7A3A);
/// Color of the ridges on the back.
const SCUTE_COLOR: Color = Color::rgb(0x2E5E2D);
/// Color of the inside of the mouth.
const MOUTH_COLOR: Color = Color::rgb(0x8B1A1A);
/// Eye color.
const EYE_COLOR: Color = Color::rgb(0xF4E04D);

/// Crocodile walking back and forth with a jaw that opens when it's picked up.
#[derive(Debug, Clone, PartialEq)]
pub struct Crocodile {
    /// Center of the body.
    position: Vec2,
    /// Distance moved every frame.
    velocity: Vec2,
    /// Half the length from snout to tail root, also the hit radius.
    size: f32,
    /// `1.0` when facing right, `-1.0` when facing left.
    facing: f32,
    /// Phase driving the legs, tail and bobbing.
    stride_phase: f32,
    /// How much the stride phase advances every frame.
    stride_speed: f32,
    /// Current jaw angle.
    jaw: f32,
    /// Jaw angle the jaw is moving toward.
    jaw_target: f32,
    /// When the mouth closes again, `None` if no close is scheduled.
    close_at_ms: Option<f64>,
}

impl Crocodile {
    /// Spawn a crocodile with a random size and walking speed.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        let velocity = Vec2::new(random_spread_nonzero(2.0), random_spread(0.2));

        Self {
            position,
            velocity,
            size: random_range(60.0, 80.0),
            facing: velocity.x.signum(),
            stride_phase: 0.0,
            stride_speed: random_range(0.08, 0.14),
            jaw: 0.0,
            jaw_target: 0.0,
            close_at_ms: None,
        }
    }

    /// Replace the velocity, facing the horizontal direction of travel.
    #[inline]
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        if velocity.x.abs() > 0.0 {
            self.facing = velocity.x.signum();
        }

        self
    }

    /// Replace the size.
    #[inline]
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;

        self
    }

    /// Walk and animate.
    pub fn update(&mut self, frame: &Frame) {
        let bounced = bounce(&mut self.position, &mut self.velocity, frame.bounds);
        if bounced.x {
            self.facing = -self.facing;
        }

        self.animate(frame);
    }

    /// Animate the legs and jaw without moving.
    pub fn animate(&mut self, frame: &Frame) {
        self.stride_phase += self.stride_speed;

        // Close the mouth once the snap is over
        if self
            .close_at_ms
            .is_some_and(|close_at_ms| frame.time_ms >= close_at_ms)
        {
            self.close_at_ms = None;
            self.jaw_target = 0.0;
        }

        self.jaw = lerp(self.jaw, self.jaw_target, JAW_LERP);
    }

    /// Open the mouth, it will close by itself after a short while.
    ///
    /// Snapping again while the mouth is open keeps it open longer.
    #[inline]
    pub fn snap(&mut self, time_ms: f64) {
        self.jaw_target = JAW_OPEN;
        self.close_at_ms = Some(time_ms + MOUTH_CLOSE_DELAY_MS);
    }

    /// Draw the crocodile, mirrored to the direction it's facing.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = self.size;
        let stride = self.stride_phase.sin();
        let bob = (self.stride_phase * 2.0).sin() * 1.5;

        surface.save();
        surface.translate(self.position + Vec2::new(0.0, bob));
        surface.scale(Vec2::new(self.facing, 1.0));

        // Tail
        surface.fill_polygon(
            &[
                Vec2::new(-size * 0.5, -size * 0.1),
                Vec2::new(-size * 1.3, stride * size * 0.15),
                Vec2::new(-size * 0.5, size * 0.12),
            ],
            SKIN_COLOR,
        );

        // Legs, diagonal pairs move together
        for (x, phase) in [(-0.3, stride), (0.3, -stride)] {
            for side in [-1.0, 1.0] {
                surface.fill_ellipse(
                    Vec2::new(size * (x + side * phase * 0.05), side * size * 0.2),
                    Vec2::new(size * 0.08, size * 0.05),
                    0.0,
                    SKIN_COLOR,
                );
            }
        }

        // Body
        surface.fill_ellipse(
            Vec2::ZERO,
            Vec2::new(size * 0.6, size * 0.22),
            0.0,
            SKIN_COLOR,
        );

        // Ridges on the back
        for scute in 0..5 {
            let x = size * (scute as f32).mul_add(0.2, -0.45);
            surface.fill_polygon(
                &[
                    Vec2::new(x - size * 0.05, -size * 0.18),
                    Vec2::new(x, -size * 0.27),
                    Vec2::new(x + size * 0.05, -size * 0.18),
                ],
                SCUTE_COLOR,
            );
        }

        // Inside of the mouth, only visible when it's open
        if self.jaw > 0.05 {
            surface.fill_ellipse(
                Vec2::new(size * 0.8, size * 0.02),
                Vec2::new(size * 0.25, size * 0.25 * self.jaw),
                0.0,
                MOUTH_COLOR,
            );
        }

        // Upper jaw
        surface.save();
        surface.translate(Vec2::new(size * 0.55, 0.0));
        surface.rotate(-self.jaw / 2.0);
        surface.fill_polygon(
            &[
                Vec2::new(0.0, -size * 0.12),
                Vec2::new(size * 0.55, -size * 0.04),
                Vec2::new(size * 0.55, size * 0.02),
                Vec2::ZERO,
            ],
            SKIN_COLOR,
        );
        surface.restore();

        // Lower jaw
        surface.save();
        surface.translate(Vec2::new(size * 0.55, size * 0.02));
        surface.rotate(self.jaw / 2.0);
        surface.fill_polygon(
            &[
                Vec2::ZERO,
                Vec2::new(size * 0.5, size * 0.02),
                Vec2::new(size * 0.5, size * 0.07),
                Vec2::new(0.0, size * 0.1),
            ],
            SKIN_COLOR,
        );
        surface.restore();

        // Eye
        surface.fill_circle(Vec2::new(size * 0.62, -size * 0.14), size * 0.05, EYE_COLOR);
        surface.fill_circle(Vec2::new(size * 0.63, -size * 0.14), size * 0.02, Color::BLACK);

        surface.restore();
    }

    /// Whether the point lies within the hit radius.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.size * self.size
    }

    /// Place the crocodile.
    #[inline]
    pub fn move_to(&mut self, point: Vec2) {
        self.position = point;
    }

    /// Send the crocodile walking in a random direction after being dropped.
    #[inline]
    pub fn release(&mut self) {
        self.velocity = Vec2::new(random_spread_nonzero(2.0), random_spread_nonzero(0.2));
        self.facing = self.velocity.x.signum();
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

    /// Current jaw angle in radians, `0.0` is closed.
    #[inline]
    #[must_use]
    pub const fn jaw(&self) -> f32 {
        self.jaw
    }

    /// Whether the mouth is opening or open.
    #[inline]
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.jaw_target > 0.0
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Crocodile, JAW_OPEN, MOUTH_CLOSE_DELAY_MS};
    use crate::{entity::Frame, math::Bounds, surface::Recorder};

    const BOUNDS: Bounds = Bounds::new(1200.0, 800.0);

    #[test]
    fn snap_opens_then_closes_once() {
        let mut crocodile = Crocodile::new(Vec2::new(600.0, 600.0));
        crocodile.snap(1000.0);

        // Mouth opens toward the target
        for step in 0..20 {
            crocodile.animate(&Frame::new(BOUNDS, 1000.0 + f64::from(step) * 16.0));
        }
        assert!(crocodile.is_snapping());
        assert!(crocodile.jaw() > JAW_OPEN * 0.9);

        // After the delay it starts closing
        let mut time_ms = 1000.0 + MOUTH_CLOSE_DELAY_MS;
        for _ in 0..40 {
            crocodile.animate(&Frame::new(BOUNDS, time_ms));
            time_ms += 16.0;
        }
        assert!(!crocodile.is_snapping());
        assert!(crocodile.jaw() < 0.01);

        // Nothing happens afterwards
        crocodile.animate(&Frame::new(BOUNDS, time_ms + 10_000.0));
        assert!(!crocodile.is_snapping());
    }

    #[test]
    fn turns_around_at_the_edge() {
        let mut crocodile = Crocodile::new(Vec2::new(1199.0, 600.0))
            .with_velocity(Vec2::new(2.0, 0.0));
        assert!((crocodile.facing() - 1.0).abs() < f32::EPSILON);

        crocodile.update(&Frame::new(BOUNDS, 0.0));

        assert!(crocodile.velocity().x < 0.0);
        assert!((crocodile.facing() + 1.0).abs() < f32::EPSILON);
        assert!((crocodile.position().x - 1200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn drawing_open_mouth_is_balanced() {
        let mut crocodile = Crocodile::new(Vec2::new(600.0, 600.0)).with_size(70.0);
        crocodile.snap(0.0);
        crocodile.animate(&Frame::new(BOUNDS, 0.0));

        let mut recorder = Recorder::new();
        crocodile.draw(&mut recorder);

        assert_eq!(recorder.depth(), 0);
    }
}
