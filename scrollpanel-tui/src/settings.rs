//! `settings.toml`: panel geometry, styles and the stylesheet.
//!
//! ```toml
//! items = 120
//!
//! [panel]
//! height = 12
//! bar_class = "thumb"
//! track_style = { fill = "│", foreground = "grey" }
//!
//! [classes.thumb]
//! background = "oklch(0.7, 0.15, 145)"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scrollpanel::{PanelConfig, Style, Stylesheet};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::paths;

/// Everything the demo reads from disk.
#[derive(Debug, Clone)]
pub struct Settings {
    pub panel: PanelConfig,
    pub classes: Stylesheet,
    /// Number of demo lines in the panel.
    pub items: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            panel: terminal_panel(),
            classes: Stylesheet::default(),
            items: 200,
        }
    }
}

/// Panel defaults sized for a terminal rather than pixels.
fn terminal_panel() -> PanelConfig {
    PanelConfig::new()
        .width(48)
        .height(16)
        .bar_width(2)
        .bar_height(4)
        .wheel_step(3.0)
}

/// On-disk shape. Panel keys are all optional so a partial `[panel]` table
/// only overrides what it names.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    items: Option<usize>,
    panel: PanelSection,
    classes: Stylesheet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PanelSection {
    width: Option<u16>,
    height: Option<u16>,
    bar_width: Option<u16>,
    bar_height: Option<u16>,
    wheel_step: Option<f32>,
    bar_style: Option<Style>,
    bar_class: Option<String>,
    track_style: Option<Style>,
    track_class: Option<String>,
    content_style: Option<Style>,
    content_class: Option<String>,
}

impl PanelSection {
    fn apply(self, mut config: PanelConfig) -> PanelConfig {
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.bar_width {
            config.bar_width = v;
        }
        if let Some(v) = self.bar_height {
            config.bar_height = v;
        }
        if let Some(v) = self.wheel_step {
            config.wheel_step = v;
        }
        if let Some(v) = self.bar_style {
            config.bar_style = v;
        }
        if let Some(v) = self.track_style {
            config.track_style = v;
        }
        if let Some(v) = self.content_style {
            config.content_style = v;
        }
        config.bar_class = self.bar_class.or(config.bar_class);
        config.track_class = self.track_class.or(config.track_class);
        config.content_class = self.content_class.or(config.content_class);
        config
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: SettingsFile = toml::from_str(text)?;
        let defaults = Settings::default();

        Ok(Self {
            panel: file.panel.apply(defaults.panel),
            classes: file.classes,
            items: file.items.unwrap_or(defaults.items),
        })
    }

    /// Check values the file format accepts but the panel cannot use.
    /// Returns the offending key and why.
    fn validate(&self) -> std::result::Result<(), (&'static str, String)> {
        let step = self.panel.wheel_step;
        if !step.is_finite() || step < 0.0 {
            return Err((
                "panel.wheel_step",
                format!("expected a finite, non-negative number, got {step}"),
            ));
        }
        Ok(())
    }

    /// Load from `explicit` if given, otherwise from the config directory.
    ///
    /// An explicit path must exist. The default location is optional: when
    /// it is missing the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match paths::settings_file() {
                Some(path) => (path, false),
                None => {
                    log::info!("no config directory, using default settings");
                    return Ok(Self::default());
                }
            },
        };
        Self::load_from(path, required)
    }

    fn load_from(path: PathBuf, required: bool) -> Result<Self> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                log::info!("{} not found, using default settings", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(AppError::ReadSettings { path, source }),
        };

        let settings = Self::from_toml(&text)
            .map_err(|source| AppError::ParseSettings { path: path.clone(), source })?;
        if let Err((key, reason)) = settings.validate() {
            return Err(AppError::InvalidSetting { path, key, reason });
        }
        log::info!(
            "loaded {} ({} classes)",
            path.display(),
            settings.classes.len()
        );
        Ok(settings)
    }
}
