//! Unify mouse and touch input into a single pointer.

use glam::Vec2;

use crate::viewport::Viewport;

/// Phase of a raw mouse or touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Mouse button pressed or finger put down.
    Start,
    /// Mouse or finger moved.
    Move,
    /// Mouse button released, mouse left the canvas, or finger lifted.
    End,
    /// Touch interrupted by the browser.
    Cancel,
}

/// Single pointer event.
///
/// Positions are in whatever space the event was created in, see [`PointerEvent::to_logical`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down at a position.
    Down(Vec2),
    /// Pointer moved to a position.
    Move(Vec2),
    /// Pointer went up, wherever it is.
    Up,
}

impl PointerEvent {
    /// Convert a mouse event.
    ///
    /// # Arguments
    ///
    /// * `phase` - What happened.
    /// * `client` - Position of the mouse relative to the page.
    #[inline]
    #[must_use]
    pub const fn from_mouse(phase: PointerPhase, client: Vec2) -> Self {
        match phase {
            PointerPhase::Start => Self::Down(client),
            PointerPhase::Move => Self::Move(client),
            PointerPhase::End | PointerPhase::Cancel => Self::Up,
        }
    }

    /// Convert a touch event.
    ///
    /// Only the first touch point is used, the rest is ignored.
    ///
    /// # Arguments
    ///
    /// * `phase` - What happened.
    /// * `touches` - Positions of all fingers still touching the screen, relative to the page.
    ///
    /// # Returns
    ///
    /// - `None` when a start or move arrives without any touch points.
    #[inline]
    #[must_use]
    pub fn from_touches(phase: PointerPhase, touches: &[Vec2]) -> Option<Self> {
        match phase {
            PointerPhase::Start => touches.first().copied().map(Self::Down),
            PointerPhase::Move => touches.first().copied().map(Self::Move),
            PointerPhase::End | PointerPhase::Cancel => Some(Self::Up),
        }
    }

    /// Map the position of the event from the page to logical coordinates.
    ///
    /// # Arguments
    ///
    /// * `viewport` - Viewport of the canvas the event happened on.
    /// * `canvas_top_left` - Position of the top left corner of the displayed canvas relative to the page.
    #[inline]
    #[must_use]
    pub fn to_logical(self, viewport: &Viewport, canvas_top_left: Vec2) -> Self {
        match self {
            Self::Down(position) => {
                Self::Down(viewport.logical_from_pointer(position, canvas_top_left))
            }
            Self::Move(position) => {
                Self::Move(viewport.logical_from_pointer(position, canvas_top_left))
            }
            Self::Up => Self::Up,
        }
    }

    /// Position of the pointer, `None` for [`PointerEvent::Up`].
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<Vec2> {
        match self {
            Self::Down(position) | Self::Move(position) => Some(*position),
            Self::Up => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use glamour::Size2;
    use smallvec::{smallvec, SmallVec};

    use super::{PointerEvent, PointerPhase};
    use crate::viewport::{Container, Viewport, ViewportConfig};

    #[test]
    fn first_touch_wins() {
        let touches: SmallVec<[Vec2; 4]> =
            smallvec![Vec2::new(10.0, 20.0), Vec2::new(300.0, 400.0)];

        assert_eq!(
            PointerEvent::from_touches(PointerPhase::Start, &touches),
            Some(PointerEvent::Down(Vec2::new(10.0, 20.0)))
        );
        assert_eq!(
            PointerEvent::from_touches(PointerPhase::Move, &touches),
            Some(PointerEvent::Move(Vec2::new(10.0, 20.0)))
        );
    }

    #[test]
    fn empty_touches_are_ignored_until_lifted() {
        assert_eq!(PointerEvent::from_touches(PointerPhase::Start, &[]), None);
        assert_eq!(PointerEvent::from_touches(PointerPhase::Move, &[]), None);
        assert_eq!(
            PointerEvent::from_touches(PointerPhase::End, &[]),
            Some(PointerEvent::Up)
        );
        assert_eq!(
            PointerEvent::from_touches(PointerPhase::Cancel, &[]),
            Some(PointerEvent::Up)
        );
    }

    #[test]
    fn mouse_and_touch_map_identically() {
        let mut viewport = Viewport::new(Size2::new(1200.0, 800.0), ViewportConfig::default());
        viewport.fit(Container {
            width: 640.0,
            window_width: 1280.0,
            window_height: 1000.0,
        });
        let top_left = Vec2::new(20.0, 100.0);
        let client = Vec2::new(320.0, 300.0);

        let mouse = PointerEvent::from_mouse(PointerPhase::Start, client)
            .to_logical(&viewport, top_left);
        let touch = PointerEvent::from_touches(PointerPhase::Start, &[client])
            .unwrap()
            .to_logical(&viewport, top_left);

        assert_eq!(mouse, touch);
        // 600 wide displayed is half the logical size
        assert_eq!(mouse.position(), Some(Vec2::new(600.0, 400.0)));
    }
}
