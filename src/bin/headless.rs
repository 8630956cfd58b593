//! Run every scene without a browser and log what would have been drawn.
//!
//! Set `MENAGERIE_CONFIG` to the path of a TOML file to override the defaults and `MENAGERIE_FRAMES` to change the amount of simulated frames.

use menagerie::{
    frame_loop::{FrameLoop, FrameOutcome},
    surface::Recorder,
    Config, SceneKind,
};
use miette::{Context, IntoDiagnostic, Result};

/// Amount of frames simulated when `MENAGERIE_FRAMES` isn't set.
const DEFAULT_FRAMES: u64 = 120;

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = match std::env::var_os("MENAGERIE_CONFIG") {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Error reading config file {path:?}"))?;

            Config::from_toml_str(&source)?
        }
        None => Config::default(),
    };

    let frames = match std::env::var("MENAGERIE_FRAMES") {
        Ok(frames) => frames
            .parse()
            .into_diagnostic()
            .wrap_err("Error parsing MENAGERIE_FRAMES")?,
        Err(_) => DEFAULT_FRAMES,
    };

    // Refresh exactly at the target frame rate
    let interval_ms = 1000.0 / f64::from(config.target_fps);

    for kind in SceneKind::ALL {
        let mut frame_loop = FrameLoop::new(kind.build(&config), config.target_fps);
        let mut recorder = Recorder::new();
        let mut commands = 0;

        for frame in 1..=frames {
            recorder.clear();

            if frame_loop.tick(frame as f64 * interval_ms, &mut recorder) == FrameOutcome::Rendered {
                commands += recorder.len();
            }
        }

        log::info!(
            "{kind}: {} entities, {} frames rendered, {commands} draw commands",
            frame_loop.scene().entities().len(),
            frame_loop.frames()
        );
    }

    Ok(())
}
