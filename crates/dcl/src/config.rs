//! Environment-based configuration of the renderer.

use std::{env, env::VarError, fmt, str::FromStr};

use anyhow::{anyhow, bail};

/// Which projection path [`Scene`][crate::wireframe::Scene] uses to reach screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Model, view and perspective matrices, followed by the perspective divide.
    #[default]
    Matrix,
    /// View matrix, followed by the simple `fov / (distance + z)` screen projection.
    Canvas,
}

impl FromStr for Projection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matrix" => Ok(Projection::Matrix),
            "canvas" => Ok(Projection::Canvas),
            _ => bail!("expected `matrix` or `canvas`"),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Projection::Matrix => "matrix",
            Projection::Canvas => "canvas",
        })
    }
}

/// Renderer settings.
///
/// Every field corresponds to one of the environment variables listed in the [crate docs][crate].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of frames to render.
    pub frames: u32,
    /// Screen width in cells.
    pub width: u32,
    /// Screen height in cells.
    pub height: u32,
    /// Vertical field of view, in degrees.
    pub fov: f64,
    pub fps: u32,
    pub projection: Projection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: 60,
            width: 80,
            height: 40,
            fov: 90.0,
            fps: 30,
            projection: Projection::Matrix,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables keep their default value.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending variable if a value is not valid Unicode, cannot be
    /// parsed, or is out of range.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Reads the configuration through `lookup`, which is called with each variable name and
    /// behaves like [`std::env::var`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::env::VarError;
    /// # use dcl::config::Config;
    /// let config = Config::from_lookup(|name| match name {
    ///     "DCL_FRAMES" => Ok("5".to_string()),
    ///     _ => Err(VarError::NotPresent),
    /// })?;
    /// assert_eq!(config.frames, 5);
    /// assert_eq!(config.width, 80);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_lookup(
        mut lookup: impl FnMut(&str) -> Result<String, VarError>,
    ) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            frames: var(&mut lookup, "DCL_FRAMES", defaults.frames)?,
            width: var(&mut lookup, "DCL_WIDTH", defaults.width)?,
            height: var(&mut lookup, "DCL_HEIGHT", defaults.height)?,
            fov: var(&mut lookup, "DCL_FOV", defaults.fov)?,
            fps: var(&mut lookup, "DCL_FPS", defaults.fps)?,
            projection: var(&mut lookup, "DCL_PROJECTION", defaults.projection)?,
        };

        if config.width == 0 || config.height == 0 {
            bail!(
                "invalid screen size {}x{}; `DCL_WIDTH` and `DCL_HEIGHT` must be non-zero",
                config.width,
                config.height,
            );
        }
        if !(config.fov > 0.0 && config.fov < 180.0) {
            bail!(
                "invalid value set for `DCL_FOV` variable: {}; must be between 0 and 180 degrees",
                config.fov
            );
        }
        if config.fps == 0 {
            bail!("invalid value set for `DCL_FPS` variable: must be non-zero");
        }

        log::debug!("using configuration: {:?}", config);
        Ok(config)
    }
}

fn var<T>(
    lookup: &mut impl FnMut(&str) -> Result<String, VarError>,
    name: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid value set for `{name}` variable: '{v}' ({e})")),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(s)) => bail!(
            "invalid value set for `{name}` variable: {}",
            s.to_string_lossy()
        ),
    }
}
