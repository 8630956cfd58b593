//! Flowers swaying in the field.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;

use crate::{
    color::Color,
    random::{random_index, random_range},
    surface::Surface,
};

/// Colors a petal can have.
const PETAL_COLORS: [Color; 15] = [
    // Pink
    Color::rgb(0xFF6B9D),
    // Light pink
    Color::rgb(0xFFB6C1),
    // Hot pink
    Color::rgb(0xFF69B4),
    // Deep pink
    Color::rgb(0xFF1493),
    // Orange red
    Color::rgb(0xFF4500),
    // Tomato
    Color::rgb(0xFF6347),
    // Gold
    Color::rgb(0xFFD700),
    // Yellow
    Color::rgb(0xFFFF00),
    // Pale green
    Color::rgb(0x98FB98),
    // Sky blue
    Color::rgb(0x87CEEB),
    // Plum
    Color::rgb(0xDDA0DD),
    // Khaki
    Color::rgb(0xF0E68C),
    // Light salmon
    Color::rgb(0xFFA07A),
    // Lavender
    Color::rgb(0xE6E6FA),
    // Misty rose
    Color::rgb(0xFFE4E1),
];

/// Stem color.
const STEM_COLOR: Color = Color::rgb(0x228B22);
/// Leaf color.
const LEAF_COLOR: Color = Color::rgb(0x32CD32);
/// Color of the heart of the flower.
const CENTER_COLOR: Color = Color::rgb(0xFFD700);

/// Flower planted at its base, swaying gently.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    /// Bottom of the stem.
    position: Vec2,
    /// Length of a petal.
    size: f32,
    /// Petal color.
    color: Color,
    /// Amount of petals around the center.
    petal_count: u32,
    /// Rotation of the flower head.
    rotation: f32,
    /// Phase of the sway.
    sway_phase: f32,
    /// How much the sway phase advances every frame.
    sway_speed: f32,
    /// Length of the stem.
    stem_height: f32,
}

impl Flower {
    /// Plant a flower with a random look.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: random_range(10.0, 25.0),
            color: PETAL_COLORS[random_index(PETAL_COLORS.len())],
            petal_count: fastrand::u32(5..=10),
            rotation: random_range(0.0, TAU),
            sway_phase: random_range(0.0, TAU),
            sway_speed: random_range(0.01, 0.03),
            stem_height: random_range(30.0, 70.0),
        }
    }

    /// Replace the petal length.
    #[inline]
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;

        self
    }

    /// Replace the stem length.
    #[inline]
    #[must_use]
    pub const fn with_stem_height(mut self, stem_height: f32) -> Self {
        self.stem_height = stem_height;

        self
    }

    /// Sway.
    #[inline]
    pub fn update(&mut self) {
        self.sway_phase += self.sway_speed;
    }

    /// Draw the stem, leaves and head.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.translate(self.position);
        surface.rotate(self.sway_phase.sin() * 0.04);

        // Stem
        surface.stroke_line(
            Vec2::ZERO,
            Vec2::new(0.0, -self.stem_height),
            2.0,
            STEM_COLOR,
        );

        // Leaves
        surface.fill_ellipse(
            Vec2::new(-5.0, -self.stem_height * 0.3),
            Vec2::new(8.0, 4.0),
            FRAC_PI_4,
            LEAF_COLOR,
        );
        surface.fill_ellipse(
            Vec2::new(5.0, -self.stem_height * 0.7),
            Vec2::new(8.0, 4.0),
            -FRAC_PI_4,
            LEAF_COLOR,
        );

        // Petals
        surface.translate(Vec2::new(0.0, -self.stem_height));
        surface.rotate(self.rotation);
        for petal in 0..self.petal_count {
            surface.save();
            surface.rotate(petal as f32 / self.petal_count as f32 * TAU);
            surface.fill_ellipse(
                Vec2::new(self.size * 0.8, 0.0),
                Vec2::new(self.size, self.size * 0.4),
                0.0,
                self.color,
            );
            surface.restore();
        }

        // Center
        surface.fill_circle(Vec2::ZERO, self.size * 0.3, CENTER_COLOR);

        surface.restore();
    }

    /// Whether the point hits the flower head.
    ///
    /// The hit area is a bit more generous than the petals, so small flowers can still be picked.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.head().distance_squared(point) < self.size * self.size * 2.0
    }

    /// Replant the flower.
    #[inline]
    pub fn move_to(&mut self, point: Vec2) {
        self.position = point;
    }

    /// Bottom of the stem.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Center of the flower head.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Vec2 {
        self.position - Vec2::new(0.0, self.stem_height)
    }

    /// Amount of petals.
    #[inline]
    #[must_use]
    pub const fn petal_count(&self) -> u32 {
        self.petal_count
    }
}
