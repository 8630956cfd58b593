//! Slowly animated backdrops drawn behind the entities.

use glam::Vec2;

use crate::{
    color::Color,
    math::Bounds,
    surface::{GradientStop, Surface},
};

/// Backdrop of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Background {
    /// Deep blue water with swaying light rays.
    Underwater,
    /// Sky fading into grass with drifting clouds.
    Meadow,
    /// Murky water with floating lily pads.
    Swamp,
}

impl Background {
    /// Draw the backdrop over the whole drawing area.
    ///
    /// # Arguments
    ///
    /// * `surface` - Target to draw on.
    /// * `bounds` - Logical drawing area.
    /// * `time_ms` - Timestamp driving the animation.
    pub fn draw<S: Surface + ?Sized>(self, surface: &mut S, bounds: Bounds, time_ms: f64) {
        match self {
            Self::Underwater => underwater(surface, bounds, time_ms),
            Self::Meadow => meadow(surface, bounds, time_ms),
            Self::Swamp => swamp(surface, bounds, time_ms),
        }
    }
}

/// Oscillation at a timestamp.
fn wave(time_ms: f64, speed: f64, offset: f64) -> f32 {
    time_ms.mul_add(speed, offset).sin() as f32
}

/// Water gradient with light rays.
fn underwater<S: Surface + ?Sized>(surface: &mut S, bounds: Bounds, time_ms: f64) {
    surface.fill_vertical_gradient(
        Vec2::ZERO,
        bounds.size(),
        &[
            GradientStop::new(0.0, Color::rgb(0x006994)),
            GradientStop::new(0.5, Color::rgb(0x004D6B)),
            GradientStop::new(1.0, Color::rgb(0x00334A)),
        ],
    );

    let ray_color = Color::WHITE.with_alpha(0.1);
    for ray in 0..5 {
        let x = (ray + 1) as f32 * (bounds.width / 6.0) + wave(time_ms, 0.001, f64::from(ray)) * 50.0;

        surface.stroke_line(
            Vec2::new(x, 0.0),
            Vec2::new(x + 100.0, bounds.height),
            2.0,
            ray_color,
        );
    }
}

/// Sky gradient with clouds.
fn meadow<S: Surface + ?Sized>(surface: &mut S, bounds: Bounds, time_ms: f64) {
    surface.fill_vertical_gradient(
        Vec2::ZERO,
        bounds.size(),
        &[
            // Sky blue
            GradientStop::new(0.0, Color::rgb(0x87CEEB)),
            // Pale green
            GradientStop::new(0.7, Color::rgb(0x98FB98)),
            // Light green
            GradientStop::new(1.0, Color::rgb(0x90EE90)),
        ],
    );

    let cloud_color = Color::WHITE.with_alpha(0.7);
    for cloud in 0..3 {
        let offset = f64::from(cloud);
        let x = cloud as f32 * (bounds.width / 3.0) + wave(time_ms, 0.0005, offset) * 50.0;
        let y = bounds.height / 8.0 + wave(time_ms, 0.0003, offset) * 30.0;

        for (dx, dy, radius) in [
            (0.0, 0.0, 40.0),
            (30.0, 0.0, 35.0),
            (60.0, 0.0, 40.0),
            (30.0, -20.0, 30.0),
        ] {
            surface.fill_circle(Vec2::new(x + dx, y + dy), radius, cloud_color);
        }
    }
}

/// Murky water with drifting lily pads.
fn swamp<S: Surface + ?Sized>(surface: &mut S, bounds: Bounds, time_ms: f64) {
    surface.fill_vertical_gradient(
        Vec2::ZERO,
        bounds.size(),
        &[
            GradientStop::new(0.0, Color::rgb(0x4A6B3A)),
            GradientStop::new(0.6, Color::rgb(0x2F4F2F)),
            GradientStop::new(1.0, Color::rgb(0x1C3324)),
        ],
    );

    // Ripples
    let ripple_color = Color::WHITE.with_alpha(0.08);
    for ripple in 0..6 {
        let y = (ripple as f32 + 0.5) * (bounds.height / 6.0) + wave(time_ms, 0.0008, f64::from(ripple)) * 6.0;

        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(bounds.width, y), 1.0, ripple_color);
    }

    let pad_color = Color::rgb(0x3E8E41);
    for pad in 0..5 {
        let offset = f64::from(pad);
        let x = (pad as f32).mul_add(bounds.width / 5.0, bounds.width / 10.0)
            + wave(time_ms, 0.0004, offset) * 20.0;
        let y = (pad % 2) as f32 * (bounds.height / 4.0)
            + bounds.height / 8.0
            + wave(time_ms, 0.0007, offset) * 4.0;

        surface.fill_ellipse(
            Vec2::new(x, y),
            Vec2::new(28.0, 12.0),
            wave(time_ms, 0.0002, offset) * 0.2,
            pad_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::Background;
    use crate::{
        math::Bounds,
        surface::{DrawCommand, Recorder},
    };

    #[test]
    fn every_backdrop_starts_with_a_gradient() {
        for background in [Background::Underwater, Background::Meadow, Background::Swamp] {
            let mut recorder = Recorder::new();
            background.draw(&mut recorder, Bounds::new(1200.0, 800.0), 1234.0);

            assert!(
                recorder.count(|command| matches!(
                    command,
                    DrawCommand::FillVerticalGradient { .. }
                )) == 1,
                "{background:?}"
            );
            assert_eq!(recorder.depth(), 0);
        }
    }

    #[test]
    fn light_rays_sway() {
        let rays = |time_ms| {
            let mut recorder = Recorder::new();
            Background::Underwater.draw(&mut recorder, Bounds::new(1200.0, 800.0), time_ms);

            recorder
                .commands()
                .iter()
                .filter_map(|command| match command {
                    DrawCommand::StrokeLine { from, .. } => Some(from.x),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        let start = rays(0.0);
        let later = rays(1500.0);

        assert_eq!(start.len(), 5);
        assert!(start.iter().zip(&later).any(|(a, b)| (a - b).abs() > 1.0));
    }
}
