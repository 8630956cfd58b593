//! Scene configuration.

use glamour::Size2;
use serde::Deserialize;

use crate::{error::Error, viewport::ViewportConfig};

/// Initial configuration passed when building and mounting scenes.
///
/// There's three ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use menagerie::Config;
/// Config {
///   target_fps: 30,
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use menagerie::Config;
/// Config::default().with_target_fps(30);
/// ```
///
/// # Example
///
/// ```rust
/// # use menagerie::Config;
/// let config = Config::from_toml_str("target_fps = 30").unwrap();
/// assert_eq!(config.target_fps, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the logical drawing surface, all entities live in this coordinate space.
    ///
    /// Defaults to `1200.0`.
    pub logical_width: f32,
    /// Height of the logical drawing surface.
    ///
    /// Defaults to `800.0`.
    pub logical_height: f32,
    /// Maximum amount of frames processed per second.
    ///
    /// Defaults to `60`.
    pub target_fps: u32,
    /// Frame rate used instead of [`Self::target_fps`] on constrained devices.
    ///
    /// Defaults to `30`.
    pub constrained_target_fps: u32,
    /// Quiet time after the last resize event before the canvas is resized.
    ///
    /// Defaults to `100`.
    pub resize_debounce_ms: u32,
    /// Delay after the page is ready before the scenes are constructed.
    ///
    /// Defaults to `500`.
    pub startup_delay_ms: u32,
    /// How the displayed size of the canvas is calculated.
    pub viewport: ViewportConfig,
    /// Amount of entities spawned in each scene.
    pub population: Population,
    /// Amount of entities spawned in each scene on constrained devices.
    pub constrained_population: Population,
}

impl Config {
    /// Parse a configuration from a TOML string.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// - When the TOML is malformed.
    /// - When the resulting configuration is invalid, see [`Self::validate`].
    #[inline]
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Check whether all values are in range.
    ///
    /// # Errors
    ///
    /// - When the logical size is not strictly positive and finite.
    /// - When any of the frame rates is zero.
    #[inline]
    pub fn validate(&self) -> Result<(), Error> {
        let valid_side = |side: f32| side.is_finite() && side > 0.0;
        if !(valid_side(self.logical_width) && valid_side(self.logical_height)) {
            return Err(Error::config(format!(
                "logical size must be positive and finite, got {}x{}",
                self.logical_width, self.logical_height
            )));
        }

        if self.target_fps == 0 || self.constrained_target_fps == 0 {
            return Err(Error::config("frame rates must be at least 1"));
        }

        Ok(())
    }

    /// Derive the configuration for the detected device class.
    ///
    /// On constrained devices the frame rate and the population are lowered.
    #[inline]
    #[must_use]
    pub fn for_device(mut self, constrained: bool) -> Self {
        if constrained {
            self.target_fps = self.constrained_target_fps;
            self.population = self.constrained_population.clone();
        }

        self
    }

    /// Size of the logical drawing surface.
    #[inline]
    #[must_use]
    pub fn logical_size(&self) -> Size2 {
        Size2::new(self.logical_width, self.logical_height)
    }

    /// Set the size of the logical drawing surface.
    #[inline]
    #[must_use]
    pub fn with_logical_size(mut self, width: f32, height: f32) -> Self {
        self.logical_width = width;
        self.logical_height = height;

        self
    }

    /// Set the maximum amount of frames processed per second.
    #[inline]
    #[must_use]
    pub const fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;

        self
    }

    /// Set the frame rate for constrained devices.
    #[inline]
    #[must_use]
    pub const fn with_constrained_target_fps(mut self, constrained_target_fps: u32) -> Self {
        self.constrained_target_fps = constrained_target_fps;

        self
    }

    /// Set the quiet time after the last resize event.
    #[inline]
    #[must_use]
    pub const fn with_resize_debounce_ms(mut self, resize_debounce_ms: u32) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;

        self
    }

    /// Set the amount of entities spawned in each scene.
    #[inline]
    #[must_use]
    pub fn with_population(mut self, population: Population) -> Self {
        self.population = population;

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logical_width: 1200.0,
            logical_height: 800.0,
            target_fps: 60,
            constrained_target_fps: 30,
            resize_debounce_ms: 100,
            startup_delay_ms: 500,
            viewport: ViewportConfig::default(),
            population: Population::default(),
            constrained_population: Population::constrained(),
        }
    }
}

/// Markers in the user agent string of phones and tablets.
const CONSTRAINED_USER_AGENTS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Whether the browser runs on a phone or tablet, judging by its user agent.
#[must_use]
pub fn is_constrained_user_agent(user_agent: &str) -> bool {
    CONSTRAINED_USER_AGENTS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Amount of entities of each kind spawned when a scene is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Population {
    /// Fish in the fish tank.
    pub fish: usize,
    /// Bubbles rising in the fish tank.
    pub bubbles: usize,
    /// Flowers in the flower field.
    pub flowers: usize,
    /// Butterflies above the flower field.
    pub butterflies: usize,
    /// Fish keeping the crocodile company in the pond.
    pub pond_fish: usize,
}

impl Population {
    /// Smaller population for constrained devices.
    #[inline]
    #[must_use]
    pub const fn constrained() -> Self {
        Self {
            fish: 10,
            bubbles: 16,
            flowers: 25,
            butterflies: 5,
            pond_fish: 6,
        }
    }
}

impl Default for Population {
    fn default() -> Self {
        Self {
            fish: 15,
            bubbles: 24,
            flowers: 25,
            butterflies: 5,
            pond_fish: 6,
        }
    }
}
