//! Scene holding a backdrop, a list of entities and the drag state.

use glam::Vec2;

use super::{Background, DragState, Scene};
use crate::{
    config::Config,
    entity::{Bubble, Butterfly, Crocodile, Entity, Fish, Flower, Frame},
    input::PointerEvent,
    math::Bounds,
    random::{random, random_range},
    surface::Surface,
};

/// Scene where the entities live.
///
/// Entities are updated and drawn in the order they were added, and picked by the pointer in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Habitat {
    /// Name for logging.
    name: &'static str,
    /// Logical drawing area.
    bounds: Bounds,
    /// Backdrop.
    background: Background,
    /// Everything living in the scene.
    entities: Vec<Entity>,
    /// Which entity the pointer is holding.
    drag: DragState,
    /// Timestamp of the last processed frame.
    clock_ms: f64,
}

impl Habitat {
    /// Create an empty scene.
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, bounds: Bounds, background: Background) -> Self {
        Self {
            name,
            bounds,
            background,
            entities: Vec::new(),
            drag: DragState::new(),
            clock_ms: 0.0,
        }
    }

    /// Add an entity.
    #[inline]
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<Entity>) -> Self {
        self.push(entity);

        self
    }

    /// Add an entity.
    #[inline]
    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    /// Fish swimming between rising bubbles.
    #[must_use]
    pub fn fish_tank(config: &Config) -> Self {
        let mut habitat = Self::new(
            "fish tank",
            Bounds::from(config.logical_size()),
            Background::Underwater,
        );

        // Bubbles are drawn behind the fish
        for _ in 0..config.population.bubbles {
            habitat.push(Bubble::new(habitat.random_position()));
        }
        for _ in 0..config.population.fish {
            habitat.push(Fish::new(habitat.random_position()));
        }

        log::debug!(
            "Built {} with {} entities",
            habitat.name,
            habitat.entities.len()
        );

        habitat
    }

    /// Swaying flowers with butterflies fluttering above.
    #[must_use]
    pub fn flower_field(config: &Config) -> Self {
        let mut habitat = Self::new(
            "flower field",
            Bounds::from(config.logical_size()),
            Background::Meadow,
        );

        for _ in 0..config.population.flowers {
            habitat.push(Flower::new(habitat.random_position()));
        }
        for _ in 0..config.population.butterflies {
            habitat.push(Butterfly::new(habitat.random_position()));
        }

        log::debug!(
            "Built {} with {} entities",
            habitat.name,
            habitat.entities.len()
        );

        habitat
    }

    /// A crocodile patrolling the lower part of a pond, with some fish.
    #[must_use]
    pub fn crocodile_pond(config: &Config) -> Self {
        let mut habitat = Self::new(
            "crocodile pond",
            Bounds::from(config.logical_size()),
            Background::Swamp,
        );

        for _ in 0..config.population.pond_fish {
            habitat.push(Fish::new(habitat.random_position()));
        }

        // Drawn last so it's on top of the fish
        let bounds = habitat.bounds;
        habitat.push(Crocodile::new(Vec2::new(
            random() * bounds.width,
            random_range(0.55, 0.85) * bounds.height,
        )));

        log::debug!(
            "Built {} with {} entities",
            habitat.name,
            habitat.entities.len()
        );

        habitat
    }

    /// Pick the first draggable entity under the pointer.
    ///
    /// # Returns
    ///
    /// - Index of the picked entity.
    pub fn pointer_down(&mut self, point: Vec2) -> Option<usize> {
        // Drop whatever was still held
        self.pointer_up();

        self.drag.track(point);

        let index = self
            .entities
            .iter()
            .position(|entity| entity.is_draggable() && entity.contains(point))?;

        self.entities[index].pick(self.clock_ms);
        self.drag.grab(index, point);

        log::debug!(
            "Picked up {} #{index} in {}",
            self.entities[index].name(),
            self.name
        );

        Some(index)
    }

    /// Move the held entity with the pointer.
    pub fn pointer_move(&mut self, point: Vec2) {
        self.drag.track(point);

        if let Some(entity) = self
            .drag
            .held()
            .and_then(|index| self.entities.get_mut(index))
        {
            entity.move_to(self.bounds.clamp(point));
        }
    }

    /// Let go of the held entity.
    ///
    /// # Returns
    ///
    /// - Index of the released entity.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let index = self.drag.release()?;

        if let Some(entity) = self.entities.get_mut(index) {
            entity.release();
        }

        Some(index)
    }

    /// Everything living in the scene.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Which entity the pointer is holding.
    #[inline]
    #[must_use]
    pub const fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Name for logging.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Backdrop.
    #[inline]
    #[must_use]
    pub const fn background(&self) -> Background {
        self.background
    }

    /// Random position inside the bounds.
    fn random_position(&self) -> Vec2 {
        Vec2::new(random() * self.bounds.width, random() * self.bounds.height)
    }
}

impl Scene for Habitat {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_background<S: Surface + ?Sized>(&mut self, surface: &mut S, time_ms: f64) {
        self.background.draw(surface, self.bounds, time_ms);
    }

    fn update_and_draw<S: Surface + ?Sized>(&mut self, frame: &Frame, surface: &mut S) {
        profiling::scope!("Entities");

        self.clock_ms = frame.time_ms;

        let held = self.drag.held();
        for (index, entity) in self.entities.iter_mut().enumerate() {
            // The pointer controls the position of the held entity
            if held == Some(index) {
                entity.update_held(frame);
            } else {
                entity.update(frame);
            }

            entity.draw(surface);
        }

        self.drag.draw_cursor(surface);
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => {
                self.pointer_down(point);
            }
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up => {
                self.pointer_up();
            }
        }
    }
}
