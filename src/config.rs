// Command-line flags and the immutable runtime configuration built from them.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Minimum time between two pointer-driven redraws.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(50);

/// Settings shared (read-only) by the compositor and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Colour-code eye whites and log every computed transform and gaze.
    pub debug: bool,
    /// Track every pointer move; when off, only button releases move the pupils.
    pub follow: bool,
    pub update_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            follow: true,
            update_interval: UPDATE_INTERVAL,
        }
    }
}

/// A mascot whose eyes follow the mouse pointer
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Enable debug mode
    #[arg(long)]
    pub debug: bool,

    /// Follow mouse (set to false to only look on button release)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub follow: bool,

    /// Minimum milliseconds between pointer redraws
    #[arg(long, default_value_t = 50)]
    pub interval_ms: u64,

    /// Load the sprite from this file instead of the bundled one
    #[arg(long)]
    pub asset: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 480)]
    pub width: usize,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: usize,

    /// Window title
    #[arg(long, default_value = "eyetrack")]
    pub title: String,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            debug: self.debug,
            follow: self.follow,
            update_interval: Duration::from_millis(self.interval_ms),
        }
    }
}
