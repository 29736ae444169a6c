//! DCL wireframe projection pipeline.
//!
//! This crate drives the [`linalg`] transform kernel: it builds a [`wireframe::Scene`] (a mesh,
//! a [`wireframe::Camera`] and a [`wireframe::Viewport`]), animates it one [`frame::Frame`] at a
//! time, and projects the mesh into 2D screen coordinates.
//!
//! # 3D Coordinates
//!
//! X points to the right, Y points up, and the camera looks along +Z in view space. Screen space
//! has its origin in the top-left corner, with Y pointing down.
//!
//! # Environment Variables
//!
//! The `dcl` binary is configured via environment variables (see [`config::Config`]):
//!
//! * `DCL_FRAMES`: number of frames to render before exiting (default: 60).
//! * `DCL_WIDTH`, `DCL_HEIGHT`: size of the screen in cells (default: 80x40).
//! * `DCL_FOV`: vertical field of view in degrees (default: 90).
//! * `DCL_FPS`: frame rate the animation is paced at (default: 30).
//! * `DCL_PROJECTION`: the projection path to use. Allowed values are:
//!   * `matrix`: multiplies the model, view and perspective matrices and relies on the perspective
//!     divide of [`Vector::transform_by`] (the default).
//!   * `canvas`: transforms into view space and then uses the simple screen projection of
//!     [`Vector::project`].
//!
//! Logging is controlled by the usual `RUST_LOG` variable.
//!
//! [`Vector::transform_by`]: linalg::Vector::transform_by
//! [`Vector::project`]: linalg::Vector::project

use log::LevelFilter;

pub use dcl_linalg as linalg;

pub mod config;
pub mod frame;
pub mod wireframe;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and DCL will log at *trace* level.
/// Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
