//! Simple math functions.

use glam::Vec2;
use glamour::Size2;

/// Linearly interpolate between two values.
///
/// Internally this calls:
///
/// ```
/// # fn func(lhs: f32, rhs: f32, factor: f32) -> f32{
/// lhs + (rhs - lhs) * factor
/// # }
/// ```
///
/// # Arguments
///
/// * `lhs` - First value, will be returned if `factor == 0.0`.
/// * `rhs` - Second value, will be returned if `factor == 1.0`.
/// * `factor` - Interpolation value, when `factor == 0.0`, `lhs` will be returned, when `factor == 1.0`, `rhs` will be returned.
#[inline]
#[must_use]
pub fn lerp(lhs: f32, rhs: f32, factor: f32) -> f32 {
    (rhs - lhs).mul_add(factor, lhs)
}

/// Extent of the logical drawing surface, spanning from `(0, 0)` to `(width, height)` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the point lies inside the bounds, edges included.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Move the point to the closest position inside the bounds.
    #[inline]
    #[must_use]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }

    /// Bounds as a size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size2 {
        Size2::new(self.width, self.height)
    }
}

impl From<Size2> for Bounds {
    fn from(size: Size2) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Which axes reflected during a [`bounce`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    /// Horizontal velocity was reflected.
    pub x: bool,
    /// Vertical velocity was reflected.
    pub y: bool,
}

/// Move a position by its velocity and keep it inside the bounds.
///
/// When a coordinate ends up outside of the bounds the matching velocity component is reflected.
/// Afterwards the position is clamped, so it's always inside the bounds when this function returns.
///
/// # Returns
///
/// - Which axes were reflected.
#[inline]
pub fn bounce(position: &mut Vec2, velocity: &mut Vec2, bounds: Bounds) -> Bounce {
    *position += *velocity;

    let mut bounced = Bounce::default();
    if position.x < 0.0 || position.x > bounds.width {
        velocity.x = -velocity.x;
        bounced.x = true;
    }
    if position.y < 0.0 || position.y > bounds.height {
        velocity.y = -velocity.y;
        bounced.y = true;
    }

    *position = bounds.clamp(*position);

    bounced
}
