//! Map the fixed logical drawing surface to the variable size it's displayed at.

use glam::Vec2;
use glamour::Size2;
use serde::Deserialize;

use crate::math::Bounds;

/// How the space available for the canvas is derived from the page layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Windows this wide or narrower use the mobile layout.
    ///
    /// Defaults to `768.0`.
    pub mobile_breakpoint: f32,
    /// Horizontal space kept free around the canvas in the mobile layout.
    ///
    /// Defaults to `20.0`.
    pub mobile_margin: f32,
    /// Fraction of the window height the canvas may take in the mobile layout.
    ///
    /// Defaults to `0.75`.
    pub mobile_height_fraction: f32,
    /// Horizontal space kept free inside the container in the desktop layout.
    ///
    /// Defaults to `40.0`.
    pub desktop_margin: f32,
    /// Fraction of the window height the canvas may take in the desktop layout.
    ///
    /// Defaults to `0.6`.
    pub desktop_height_fraction: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_margin: 20.0,
            mobile_height_fraction: 0.75,
            desktop_margin: 40.0,
            desktop_height_fraction: 0.6,
        }
    }
}

/// Measurements of the page the canvas is displayed in, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Width of the element the canvas is placed in.
    pub width: f32,
    /// Inner width of the browser window.
    pub window_width: f32,
    /// Inner height of the browser window.
    pub window_height: f32,
}

/// Logical drawing surface with the size it's currently displayed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Fixed size all drawing happens in.
    logical: Size2,
    /// Size on screen.
    displayed: Size2,
    /// Displayed size divided by logical size, per axis.
    scale: Vec2,
    /// Layout rules.
    config: ViewportConfig,
}

impl Viewport {
    /// Create a viewport that is displayed at its logical size until the first [`Self::fit`].
    ///
    /// # Panics
    ///
    /// - When the logical size is not strictly positive.
    #[inline]
    #[must_use]
    pub fn new(logical: Size2, config: ViewportConfig) -> Self {
        assert!(
            logical.width > 0.0 && logical.height > 0.0,
            "logical size must be positive"
        );

        Self {
            logical,
            displayed: logical,
            scale: Vec2::ONE,
            config,
        }
    }

    /// Recalculate the displayed size for the page measurements.
    ///
    /// # Returns
    ///
    /// - The new displayed size.
    pub fn fit(&mut self, container: Container) -> Size2 {
        let available = self.available(container);
        self.displayed = fit_displayed_size(self.logical, available);

        // Recalculate the scale factors
        self.scale = Vec2::new(
            self.displayed.width / self.logical.width,
            self.displayed.height / self.logical.height,
        );

        log::debug!(
            "Fitted {}x{} viewport into {}x{}, scale {:.3}",
            self.logical.width,
            self.logical.height,
            self.displayed.width,
            self.displayed.height,
            self.scale.x
        );

        self.displayed
    }

    /// Maximum size the canvas may be displayed at for the page measurements.
    ///
    /// Never bigger than the logical size.
    #[must_use]
    pub fn available(&self, container: Container) -> Size2 {
        let (width, height) = if container.window_width <= self.config.mobile_breakpoint {
            // On narrow screens cover most of the window
            (
                container.window_width - self.config.mobile_margin,
                container.window_height * self.config.mobile_height_fraction,
            )
        } else {
            (
                container.width - self.config.desktop_margin,
                container.window_height * self.config.desktop_height_fraction,
            )
        };

        Size2::new(
            width.min(self.logical.width),
            height.min(self.logical.height),
        )
    }

    /// Convert a pointer position to logical coordinates.
    ///
    /// # Arguments
    ///
    /// * `pointer` - Position of the pointer relative to the page.
    /// * `canvas_top_left` - Position of the top left corner of the displayed canvas relative to the page.
    #[inline]
    #[must_use]
    pub fn logical_from_pointer(&self, pointer: Vec2, canvas_top_left: Vec2) -> Vec2 {
        (pointer - canvas_top_left) / self.scale
    }

    /// Convert a logical position to a position relative to the page.
    ///
    /// Inverse of [`Self::logical_from_pointer`].
    #[inline]
    #[must_use]
    pub fn displayed_from_logical(&self, logical: Vec2, canvas_top_left: Vec2) -> Vec2 {
        logical * self.scale + canvas_top_left
    }

    /// Fixed size all drawing happens in.
    #[inline]
    #[must_use]
    pub const fn logical_size(&self) -> Size2 {
        self.logical
    }

    /// Size on screen.
    #[inline]
    #[must_use]
    pub const fn displayed_size(&self) -> Size2 {
        self.displayed
    }

    /// Displayed size divided by logical size, per axis.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Logical drawing area.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from(self.logical)
    }
}

/// Biggest size with the logical aspect ratio that fits in the available space.
///
/// The available space is clamped to at least one pixel per axis so the result is always positive.
#[must_use]
pub fn fit_displayed_size(logical: Size2, available: Size2) -> Size2 {
    let max_width = available.width.max(1.0);
    let max_height = available.height.max(1.0);
    let aspect_ratio = logical.width / logical.height;

    // Try to fill the width first
    let width = max_width;
    let height = width / aspect_ratio;
    if height <= max_height {
        return Size2::new(width, height);
    }

    // Height doesn't fit, fill the height instead
    Size2::new(max_height * aspect_ratio, max_height)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use glamour::Size2;

    use super::{fit_displayed_size, Container, Viewport, ViewportConfig};

    fn viewport() -> Viewport {
        Viewport::new(Size2::new(1200.0, 800.0), ViewportConfig::default())
    }

    #[test]
    fn desktop_layout_is_limited_by_window_height() {
        let mut viewport = viewport();
        let displayed = viewport.fit(Container {
            width: 1000.0,
            window_width: 1280.0,
            window_height: 800.0,
        });

        // 800 * 0.6 = 480 high, 720 wide
        assert!((displayed.height - 480.0).abs() < 1e-3);
        assert!((displayed.width - 720.0).abs() < 1e-3);
        assert!((viewport.scale().x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn mobile_layout_is_limited_by_window_width() {
        let mut viewport = viewport();
        let displayed = viewport.fit(Container {
            width: 300.0,
            window_width: 375.0,
            window_height: 812.0,
        });

        assert!((displayed.width - 355.0).abs() < 1e-3);
        assert!((displayed.height - 355.0 / 1.5).abs() < 1e-3);
    }

    #[test]
    fn never_bigger_than_logical() {
        let mut viewport = viewport();
        let displayed = viewport.fit(Container {
            width: 4000.0,
            window_width: 4000.0,
            window_height: 3000.0,
        });

        assert!((displayed.width - 1200.0).abs() < 1e-3);
        assert!((displayed.height - 800.0).abs() < 1e-3);
        assert_eq!(viewport.scale(), Vec2::ONE);
    }

    #[test]
    fn fits_inside_and_keeps_aspect_ratio() {
        let logical = Size2::new(1200.0, 800.0);
        for width in (1..200).map(|step| step as f32 * 7.3) {
            for height in (1..200).map(|step| step as f32 * 5.1) {
                let displayed = fit_displayed_size(logical, Size2::new(width, height));

                assert!(displayed.width <= width + 1e-3);
                assert!(displayed.height <= height + 1e-3);
                assert!((displayed.width / displayed.height - 1.5).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn degenerate_space_keeps_scale_positive() {
        let mut viewport = viewport();
        viewport.fit(Container {
            width: 0.0,
            window_width: 10.0,
            window_height: 0.0,
        });

        assert!(viewport.scale().x > 0.0);
        assert!(viewport.scale().y > 0.0);
    }

    #[test]
    fn pointer_round_trip() {
        let mut viewport = viewport();
        viewport.fit(Container {
            width: 900.0,
            window_width: 1024.0,
            window_height: 700.0,
        });
        let top_left = Vec2::new(62.0, 181.5);

        for logical in [
            Vec2::ZERO,
            Vec2::new(1200.0, 800.0),
            Vec2::new(600.0, 400.0),
            Vec2::new(13.7, 791.2),
        ] {
            let displayed = viewport.displayed_from_logical(logical, top_left);
            let back = viewport.logical_from_pointer(displayed, top_left);

            assert!((back - logical).length() < 1e-3, "{logical} -> {back}");
        }
    }
}
