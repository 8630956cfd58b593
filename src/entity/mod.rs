//! Independent animated things living in a scene.
//!
//! Every entity owns its own motion rule, there's no interaction between entities.
//! Dispatch happens on the [`Entity`] tag instead of through trait objects.

mod bubble;
mod butterfly;
mod crocodile;
mod fish;
mod flower;

use glam::Vec2;

pub use bubble::Bubble;
pub use butterfly::Butterfly;
pub use crocodile::Crocodile;
pub use fish::Fish;
pub use flower::Flower;

use crate::{math::Bounds, surface::Surface};

/// What an update step gets to see of the frame it's running in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Logical drawing area, entities must stay inside.
    pub bounds: Bounds,
    /// Timestamp of the frame in milliseconds.
    pub time_ms: f64,
}

impl Frame {
    /// Create a new frame description.
    #[inline]
    #[must_use]
    pub const fn new(bounds: Bounds, time_ms: f64) -> Self {
        Self { bounds, time_ms }
    }
}

/// Any entity.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Entity {
    Fish(Fish),
    Bubble(Bubble),
    Flower(Flower),
    Butterfly(Butterfly),
    Crocodile(Crocodile),
}

impl Entity {
    /// Apply the motion rule for a single frame.
    #[inline]
    pub fn update(&mut self, frame: &Frame) {
        match self {
            Self::Fish(fish) => fish.update(frame),
            Self::Bubble(bubble) => bubble.update(frame),
            Self::Flower(flower) => flower.update(),
            Self::Butterfly(butterfly) => butterfly.update(frame),
            Self::Crocodile(crocodile) => crocodile.update(frame),
        }
    }

    /// Advance the animation without moving, used while the pointer holds the entity.
    #[inline]
    pub fn update_held(&mut self, frame: &Frame) {
        match self {
            Self::Fish(fish) => fish.animate(),
            Self::Bubble(_) => (),
            Self::Flower(flower) => flower.update(),
            Self::Butterfly(butterfly) => butterfly.animate(),
            Self::Crocodile(crocodile) => crocodile.animate(frame),
        }
    }

    /// Draw at the current state.
    #[inline]
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Fish(fish) => fish.draw(surface),
            Self::Bubble(bubble) => bubble.draw(surface),
            Self::Flower(flower) => flower.draw(surface),
            Self::Butterfly(butterfly) => butterfly.draw(surface),
            Self::Crocodile(crocodile) => crocodile.draw(surface),
        }
    }

    /// Position in logical coordinates.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Fish(fish) => fish.position(),
            Self::Bubble(bubble) => bubble.position(),
            Self::Flower(flower) => flower.position(),
            Self::Butterfly(butterfly) => butterfly.position(),
            Self::Crocodile(crocodile) => crocodile.position(),
        }
    }

    /// Whether the pointer can pick up this entity.
    #[inline]
    #[must_use]
    pub const fn is_draggable(&self) -> bool {
        matches!(self, Self::Fish(_) | Self::Flower(_) | Self::Crocodile(_))
    }

    /// Whether a pointer at the logical point hits this entity.
    ///
    /// Always `false` for entities that can't be dragged.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Self::Fish(fish) => fish.contains(point),
            Self::Flower(flower) => flower.contains(point),
            Self::Crocodile(crocodile) => crocodile.contains(point),
            Self::Bubble(_) | Self::Butterfly(_) => false,
        }
    }

    /// Called once when the pointer picks up this entity.
    #[inline]
    pub fn pick(&mut self, time_ms: f64) {
        if let Self::Crocodile(crocodile) = self {
            crocodile.snap(time_ms);
        }
    }

    /// Place the entity at a logical point.
    #[inline]
    pub fn move_to(&mut self, point: Vec2) {
        match self {
            Self::Fish(fish) => fish.move_to(point),
            Self::Flower(flower) => flower.move_to(point),
            Self::Crocodile(crocodile) => crocodile.move_to(point),
            Self::Bubble(_) | Self::Butterfly(_) => (),
        }
    }

    /// Called once when the pointer lets go of this entity.
    #[inline]
    pub fn release(&mut self) {
        match self {
            Self::Fish(fish) => fish.release(),
            Self::Crocodile(crocodile) => crocodile.release(),
            // Flowers stay where they are planted
            Self::Flower(_) | Self::Bubble(_) | Self::Butterfly(_) => (),
        }
    }

    /// Short name for logging.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fish(_) => "fish",
            Self::Bubble(_) => "bubble",
            Self::Flower(_) => "flower",
            Self::Butterfly(_) => "butterfly",
            Self::Crocodile(_) => "crocodile",
        }
    }
}

impl From<Fish> for Entity {
    fn from(fish: Fish) -> Self {
        Self::Fish(fish)
    }
}

impl From<Bubble> for Entity {
    fn from(bubble: Bubble) -> Self {
        Self::Bubble(bubble)
    }
}

impl From<Flower> for Entity {
    fn from(flower: Flower) -> Self {
        Self::Flower(flower)
    }
}

impl From<Butterfly> for Entity {
    fn from(butterfly: Butterfly) -> Self {
        Self::Butterfly(butterfly)
    }
}

impl From<Crocodile> for Entity {
    fn from(crocodile: Crocodile) -> Self {
        Self::Crocodile(crocodile)
    }
}
