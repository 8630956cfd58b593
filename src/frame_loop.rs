//! Drive a scene at a capped frame rate.
//!
//! The host calls [`FrameLoop::tick`] for every display refresh, the loop decides whether enough time has passed to render a new frame.

use std::{cell::Cell, rc::Rc};

use glam::Vec2;

use crate::{entity::Frame, scene::Scene, surface::Surface};

/// Slack allowed when comparing timestamps, so refreshes landing exactly on the interval aren't lost to rounding.
const TIMESTAMP_EPSILON_MS: f64 = 1e-6;

/// Only let frames through when enough time passed since the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    /// Minimum time between two rendered frames.
    min_interval_ms: f64,
    /// Timestamp of the last rendered frame.
    last_frame_ms: f64,
}

impl FrameLimiter {
    /// Create a limiter for a target frame rate.
    ///
    /// # Panics
    ///
    /// - When `target_fps` is zero.
    #[inline]
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        assert!(target_fps > 0, "Target frame rate must be positive");

        Self {
            min_interval_ms: 1000.0 / f64::from(target_fps),
            last_frame_ms: 0.0,
        }
    }

    /// Whether a frame should be rendered at this timestamp.
    ///
    /// Marks the frame as rendered when it returns `true`.
    #[inline]
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_frame_ms + TIMESTAMP_EPSILON_MS < self.min_interval_ms {
            return false;
        }

        self.last_frame_ms = now_ms;

        true
    }

    /// Minimum time between two rendered frames.
    #[inline]
    #[must_use]
    pub const fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Too soon after the previous frame, nothing was drawn.
    Skipped,
    /// The scene was updated and drawn.
    Rendered,
    /// The loop was stopped, the host should not schedule another tick.
    Stopped,
}

/// Shared flag stopping a [`FrameLoop`] from the outside.
#[derive(Debug, Default, Clone)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    /// Stop the loop, no further frame will be rendered.
    #[inline]
    pub fn stop(&self) {
        self.0.set(true);
    }

    /// Whether the loop has been stopped.
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Frame loop driving a single scene.
#[derive(Debug)]
pub struct FrameLoop<S: Scene> {
    /// Scene being driven.
    scene: S,
    /// Frame rate cap.
    limiter: FrameLimiter,
    /// Set when the loop should stop.
    stop: StopHandle,
    /// Amount of rendered frames.
    frames: u64,
}

impl<S: Scene> FrameLoop<S> {
    /// Wrap a scene in a loop.
    ///
    /// # Arguments
    ///
    /// * `scene` - Scene to drive.
    /// * `target_fps` - Maximum amount of frames rendered per second.
    ///
    /// # Panics
    ///
    /// - When `target_fps` is zero.
    #[must_use]
    pub fn new(scene: S, target_fps: u32) -> Self {
        log::debug!("Starting frame loop at {target_fps} frames per second");

        Self {
            scene,
            limiter: FrameLimiter::new(target_fps),
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    /// Handle a single display refresh.
    ///
    /// Clears the surface, draws the backdrop, then updates and draws every entity in order.
    ///
    /// # Arguments
    ///
    /// * `now_ms` - Monotonic timestamp of the refresh in milliseconds.
    /// * `surface` - Target to draw on.
    pub fn tick<T: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut T) -> FrameOutcome {
        profiling::scope!("Frame");

        if self.stop.is_stopped() {
            return FrameOutcome::Stopped;
        }

        if !self.limiter.ready(now_ms) {
            return FrameOutcome::Skipped;
        }

        let bounds = self.scene.bounds();

        surface.clear_rect(Vec2::ZERO, bounds.size());
        self.scene.draw_background(surface, now_ms);
        self.scene
            .update_and_draw(&Frame::new(bounds, now_ms), surface);

        self.frames += 1;

        FrameOutcome::Rendered
    }

    /// Stop the loop.
    #[inline]
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Handle for stopping the loop from somewhere else.
    #[inline]
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Whether the loop still renders frames.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    /// Amount of rendered frames.
    #[inline]
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Scene being driven.
    #[inline]
    #[must_use]
    pub const fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the scene, used for forwarding input.
    #[inline]
    #[must_use]
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameLimiter, FrameLoop, FrameOutcome};
    use crate::{
        entity::Frame,
        input::PointerEvent,
        math::Bounds,
        scene::Scene,
        surface::{DrawCommand, Recorder, Surface},
    };

    /// Scene counting how often it's called.
    #[derive(Default)]
    struct Counter {
        backgrounds: usize,
        updates: usize,
    }

    impl Scene for Counter {
        fn bounds(&self) -> Bounds {
            Bounds::new(100.0, 100.0)
        }

        fn draw_background<S: Surface + ?Sized>(&mut self, _surface: &mut S, _time_ms: f64) {
            self.backgrounds += 1;
        }

        fn update_and_draw<S: Surface + ?Sized>(&mut self, _frame: &Frame, _surface: &mut S) {
            self.updates += 1;
        }

        fn handle_pointer(&mut self, _event: PointerEvent) {}
    }

    #[test]
    fn limiter_boundary() {
        let mut limiter = FrameLimiter::new(60);

        assert!(limiter.ready(17.0));
        // 16.67ms haven't passed yet
        assert!(!limiter.ready(30.0));
        assert!(limiter.ready(34.0));
    }

    #[test]
    fn limiter_at_30_fps() {
        let mut limiter = FrameLimiter::new(30);

        assert!(limiter.ready(40.0));
        assert!(!limiter.ready(60.0));
        assert!(limiter.ready(75.0));
    }

    #[test]
    fn limiter_accepts_refreshes_on_the_interval() {
        for target_fps in [30, 45, 60, 144] {
            let mut limiter = FrameLimiter::new(target_fps);
            let interval_ms = 1000.0 / f64::from(target_fps);

            for frame in 1..=1000_u32 {
                assert!(
                    limiter.ready(f64::from(frame) * interval_ms),
                    "frame {frame} at {target_fps} FPS was skipped"
                );
            }
        }
    }

    #[test]
    fn first_refresh_is_skipped_when_too_early() {
        let mut frame_loop = FrameLoop::new(Counter::default(), 60);
        let mut recorder = Recorder::new();

        assert_eq!(frame_loop.tick(5.0, &mut recorder), FrameOutcome::Skipped);
        assert!(recorder.is_empty());
    }

    #[test]
    fn rendered_frame_clears_first() {
        let mut frame_loop = FrameLoop::new(Counter::default(), 60);
        let mut recorder = Recorder::new();

        assert_eq!(frame_loop.tick(20.0, &mut recorder), FrameOutcome::Rendered);
        assert!(matches!(
            recorder.commands().first(),
            Some(DrawCommand::ClearRect { .. })
        ));
        assert_eq!(frame_loop.scene().backgrounds, 1);
        assert_eq!(frame_loop.scene().updates, 1);
        assert_eq!(frame_loop.frames(), 1);
    }

    #[test]
    fn stop_prevents_further_frames() {
        let mut frame_loop = FrameLoop::new(Counter::default(), 60);
        let handle = frame_loop.stop_handle();
        let mut recorder = Recorder::new();

        frame_loop.tick(20.0, &mut recorder);
        handle.stop();

        assert!(!frame_loop.is_running());
        for step in 1..10 {
            assert_eq!(
                frame_loop.tick(20.0 + f64::from(step) * 100.0, &mut recorder),
                FrameOutcome::Stopped
            );
        }
        assert_eq!(frame_loop.scene().updates, 1);
        assert_eq!(frame_loop.frames(), 1);
    }
}
