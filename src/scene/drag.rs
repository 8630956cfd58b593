//! Track which entity the pointer is holding.

use glam::Vec2;

use crate::{color::Color, surface::Surface};

/// Radius of the ring drawn around the pointer while dragging.
const CURSOR_RADIUS: f32 = 30.0;
/// Dash pattern of the ring.
const CURSOR_DASH: [f32; 2] = [5.0, 5.0];

/// Drag state, at most one entity is held at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DragState {
    /// Index of the held entity.
    held: Option<usize>,
    /// Last known pointer position in logical coordinates.
    pointer: Vec2,
}

impl DragState {
    /// Nothing held, pointer at the origin.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            held: None,
            pointer: Vec2::ZERO,
        }
    }

    /// Start holding an entity.
    #[inline]
    pub fn grab(&mut self, index: usize, pointer: Vec2) {
        self.held = Some(index);
        self.pointer = pointer;
    }

    /// Remember where the pointer is.
    #[inline]
    pub fn track(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Let go of the held entity.
    ///
    /// # Returns
    ///
    /// - Index of the entity that was held, if any.
    #[inline]
    pub fn release(&mut self) -> Option<usize> {
        self.held.take()
    }

    /// Index of the held entity.
    #[inline]
    #[must_use]
    pub const fn held(&self) -> Option<usize> {
        self.held
    }

    /// Whether an entity is held.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.held.is_some()
    }

    /// Last known pointer position in logical coordinates.
    #[inline]
    #[must_use]
    pub const fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Draw a dashed ring around the pointer while an entity is held.
    pub fn draw_cursor<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_dragging() {
            return;
        }

        surface.stroke_circle(
            self.pointer,
            CURSOR_RADIUS,
            2.0,
            Color::WHITE.with_alpha(0.8),
            &CURSOR_DASH,
        );
    }
}
