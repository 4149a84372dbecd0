use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Runtime configuration, loaded from a YAML file with kebab-case keys.
///
/// Every field except `photo-library-path` has a default matching the
/// deployed device, so a one-line config is enough to get started.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Folder holding the fixed image and the slideshow images.
    pub photo_library_path: PathBuf,

    /// Base name (file stem, matched case-insensitively) of the image shown
    /// while the mode switch is engaged.
    #[serde(default = "Configuration::default_fixed_image_name")]
    pub fixed_image_name: String,

    #[serde(default)]
    pub canvas: CanvasSize,

    /// Cadence at which the switch and shutdown button levels are sampled.
    #[serde(
        default = "Configuration::default_poll_interval",
        with = "humantime_serde"
    )]
    pub poll_interval: Duration,

    /// Dwell time per slideshow image.
    #[serde(
        default = "Configuration::default_slide_interval",
        with = "humantime_serde"
    )]
    pub slide_interval: Duration,

    /// BCM pin of the image mode switch (active low, internal pull-up).
    #[serde(default = "Configuration::default_switch_pin")]
    pub switch_pin: u8,

    /// BCM pin of the shutdown button (active low, internal pull-up).
    #[serde(default = "Configuration::default_shutdown_pin")]
    pub shutdown_pin: u8,

    /// Command run (via `sh -c`) when the shutdown button is pressed.
    #[serde(default = "Configuration::default_shutdown_command")]
    pub shutdown_command: String,
}

/// Fixed canvas the images are composited onto, in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CanvasSize {
    #[serde(default = "CanvasSize::default_width")]
    pub width: u32,
    #[serde(default = "CanvasSize::default_height")]
    pub height: u32,
}

impl CanvasSize {
    const fn default_width() -> u32 {
        1024
    }

    const fn default_height() -> u32 {
        600
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

impl Configuration {
    fn default_fixed_image_name() -> String {
        "who knows_1".to_string()
    }

    const fn default_poll_interval() -> Duration {
        Duration::from_millis(200)
    }

    const fn default_slide_interval() -> Duration {
        Duration::from_secs(10)
    }

    const fn default_switch_pin() -> u8 {
        17
    }

    const fn default_shutdown_pin() -> u8 {
        27
    }

    fn default_shutdown_command() -> String {
        "sudo shutdown -h now".to_string()
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cfg: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Consume and return the configuration after checking its values.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.canvas.width > 0 && self.canvas.height > 0,
            "canvas dimensions must be non-zero"
        );
        ensure!(
            !self.poll_interval.is_zero(),
            "poll-interval must be positive"
        );
        ensure!(
            !self.slide_interval.is_zero(),
            "slide-interval must be positive"
        );
        ensure!(
            self.switch_pin != self.shutdown_pin,
            "switch-pin and shutdown-pin must differ"
        );
        ensure!(
            !self.fixed_image_name.trim().is_empty(),
            "fixed-image-name must not be empty"
        );
        Ok(self)
    }
}
