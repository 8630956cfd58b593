//! Scenes combining a backdrop with a list of entities.

mod background;
mod drag;
mod habitat;

use std::fmt::{Display, Formatter};

pub use background::Background;
pub use drag::DragState;
pub use habitat::Habitat;

use crate::{config::Config, entity::Frame, input::PointerEvent, math::Bounds, surface::Surface};

/// Anything the frame loop can drive.
pub trait Scene {
    /// Logical drawing area.
    fn bounds(&self) -> Bounds;

    /// Draw the backdrop, called after the surface is cleared.
    ///
    /// # Arguments
    ///
    /// * `surface` - Target to draw on.
    /// * `time_ms` - Timestamp of the frame.
    fn draw_background<S: Surface + ?Sized>(&mut self, surface: &mut S, time_ms: f64);

    /// Update every entity and draw it immediately afterwards.
    ///
    /// # Arguments
    ///
    /// * `frame` - Bounds and timestamp of the frame.
    /// * `surface` - Target to draw on.
    fn update_and_draw<S: Surface + ?Sized>(&mut self, frame: &Frame, surface: &mut S);

    /// Handle a pointer event with a position in logical coordinates.
    fn handle_pointer(&mut self, event: PointerEvent);
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Fish swimming between rising bubbles.
    FishTank,
    /// Swaying flowers with butterflies.
    FlowerField,
    /// A crocodile patrolling a pond with some fish.
    CrocodilePond,
}

impl SceneKind {
    /// Every built-in scene, in the order they're mounted.
    pub const ALL: [Self; 3] = [Self::FishTank, Self::FlowerField, Self::CrocodilePond];

    /// Id of the canvas element the scene is drawn on.
    #[inline]
    #[must_use]
    pub const fn canvas_id(self) -> &'static str {
        match self {
            Self::FishTank => "fishCanvas",
            Self::FlowerField => "flowerCanvas",
            Self::CrocodilePond => "crocodileCanvas",
        }
    }

    /// Build the scene with a fresh random population.
    #[inline]
    #[must_use]
    pub fn build(self, config: &Config) -> Habitat {
        match self {
            Self::FishTank => Habitat::fish_tank(config),
            Self::FlowerField => Habitat::flower_field(config),
            Self::CrocodilePond => Habitat::crocodile_pond(config),
        }
    }

    /// Human readable name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FishTank => "fish tank",
            Self::FlowerField => "flower field",
            Self::CrocodilePond => "crocodile pond",
        }
    }
}

impl Display for SceneKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
