#![forbid(unsafe_code)]

//! Decorative animated scenes for HTML canvases.
//!
//! # Features
//!
//! - A fish tank with swimming fish and rising bubbles.
//! - A flower field with swaying flowers and fluttering butterflies.
//! - A crocodile pond where the crocodile snaps when it's picked up.
//! - Fish, flowers and the crocodile can be dragged around with the mouse or a finger.
//! - Canvases keep a fixed logical resolution and are scaled to fit the page, also on small screens.
//!
//! # Non-Goals
//!
//! - Interaction between entities, every entity moves on its own.
//! - Physics, entities bounce off the edges and that's it.
//! - Rendering anything but simple vector shapes.
//!
//! # Usage
//!
//! Build for the web and include canvases with the ids `fishCanvas`, `flowerCanvas` and `crocodileCanvas` in the page, every scene is mounted on its own canvas.
//! Missing canvases are logged and skipped.
//!
//! Scenes can also be driven without a browser, by drawing on a [`surface::Recorder`]:
//!
//! ```
//! use menagerie::{frame_loop::FrameLoop, scene::SceneKind, surface::Recorder, Config};
//!
//! let config = Config::default();
//! let mut frame_loop = FrameLoop::new(SceneKind::FishTank.build(&config), config.target_fps);
//! let mut recorder = Recorder::new();
//!
//! frame_loop.tick(1000.0 / 60.0, &mut recorder);
//! assert_eq!(frame_loop.frames(), 1);
//! ```
//!
//! # Configuration
//!
//! Everything has a sensible default, see [`Config`].

pub mod color;
pub mod config;
pub mod entity;
mod error;
pub mod frame_loop;
pub mod input;
pub mod math;
pub mod random;
pub mod scene;
pub mod surface;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
mod web;

pub use config::Config;
pub use error::Error;
pub use frame_loop::FrameLoop;
pub use scene::{Scene, SceneKind};
