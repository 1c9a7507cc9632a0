//! Specimen configuration system
//!
//! Loads preview settings from `specimen.toml`, then applies environment
//! variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "specimen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for the previewer
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SpecimenConfig {
    /// Font selection
    pub font: FontConfig,
    /// Sample text and sizing
    pub preview: PreviewConfig,
    /// Target canvas
    pub canvas: CanvasConfig,
}

/// Font selection
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Path to the font file to preview; a system sans-serif when unset
    pub path: Option<PathBuf>,
    /// Face index within a collection
    pub index: usize,
}

/// Layout direction of the preview widget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
    Auto,
}

impl Direction {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Sample text and sizing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Sample lines; the face's default specimen when unset
    pub lines: Option<Vec<String>>,
    /// Preview size in pixels per em
    pub text_size: f32,
    /// Vertical spacing added to every line in pixels
    pub line_spacing: f32,
    /// Space below the last line in pixels
    pub section_spacing: f32,
    /// Widget direction, decides which edge lines are anchored to
    pub direction: Direction,
    /// BCP 47 language used for shaping
    pub language: Option<String>,
}

/// Target canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    /// Uniform padding in pixels
    pub padding: f32,
    /// Device scale factor (HiDPI)
    pub scale: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            lines: None,
            text_size: 36.0,
            line_spacing: 2.0,
            section_spacing: 16.0,
            direction: Direction::Ltr,
            language: None,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 6.0,
            scale: 1.0,
        }
    }
}

impl SpecimenConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (specimen.toml in the
    /// current directory) or return default configuration if that fails
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read(_)) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(path) = std::env::var("SPECIMEN_FONT") {
            self.font.path = Some(PathBuf::from(path));
        }
        if let Some(index) = env_parse::<usize>("SPECIMEN_FONT_INDEX") {
            self.font.index = index;
        }
        if let Some(size) = env_parse::<f32>("SPECIMEN_TEXT_SIZE") {
            self.preview.text_size = size;
        }
        if let Some(dir) = std::env::var("SPECIMEN_DIRECTION")
            .ok()
            .and_then(|v| Direction::parse(&v))
        {
            self.preview.direction = dir;
        }
        if let Some(width) = env_parse::<f32>("SPECIMEN_CANVAS_WIDTH") {
            self.canvas.width = width;
        }
        if let Some(height) = env_parse::<f32>("SPECIMEN_CANVAS_HEIGHT") {
            self.canvas.height = height;
        }
        if let Some(scale) = env_parse::<f32>("SPECIMEN_SCALE") {
            self.canvas.scale = scale;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from specimen.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {key}={value:?}: not a valid value");
            None
        }
    }
}
