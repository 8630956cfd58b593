//! Errors that can occur while setting up a scene.

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong when configuring or mounting a scene.
///
/// A failure only affects the scene it was raised for, the other scenes on the page are still mounted.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum Error {
    /// No canvas element with the requested id exists on the page.
    #[error("canvas element '{id}' could not be found")]
    #[diagnostic(
        code(menagerie::surface_not_found),
        help("add a `<canvas>` element with a matching `id` attribute to the page")
    )]
    SurfaceNotFound {
        /// Id of the element that was looked up.
        id: String,
    },
    /// The canvas element exists but did not hand out a 2D drawing context.
    #[error("canvas element '{id}' has no 2D drawing context")]
    #[diagnostic(code(menagerie::context))]
    Context {
        /// Id of the canvas element.
        id: String,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    #[diagnostic(code(menagerie::config))]
    Config {
        /// What is wrong with the configuration.
        reason: String,
    },
    /// The configuration file could not be parsed.
    #[error("error parsing configuration")]
    #[diagnostic(code(menagerie::config_parse))]
    ConfigParse(#[from] toml::de::Error),
    /// A browser API call threw an exception.
    #[error("browser call failed: {0}")]
    #[diagnostic(code(menagerie::js))]
    Js(String),
}

impl Error {
    /// Construct a configuration error.
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
