use crate::item::{FontSpec, IconName, MenuItem};
use crate::wheel::animation::{Repeat, Timing};
use directories::ProjectDirs;
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, DurationSecondsWithFrac, serde_as};
use std::f64::consts::FRAC_PI_4;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Compass position of the first button. Later buttons follow clockwise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(serialize = "North", serialize = "n", serialize = "0")]
    North,
    #[strum(serialize = "NorthEast", serialize = "ne", serialize = "1")]
    NorthEast,
    #[strum(serialize = "East", serialize = "e", serialize = "2")]
    East,
    #[strum(serialize = "SouthEast", serialize = "se", serialize = "3")]
    SouthEast,
    #[strum(serialize = "South", serialize = "s", serialize = "4")]
    South,
    #[strum(serialize = "SouthWest", serialize = "sw", serialize = "5")]
    SouthWest,
    #[default]
    #[strum(serialize = "West", serialize = "w", serialize = "6")]
    West,
    #[strum(serialize = "NorthWest", serialize = "nw", serialize = "7")]
    NorthWest,
}

impl Direction {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx % 8)
    }

    /// Layout start angle putting the first button at this compass point.
    /// West is the rest position (angle 0); angles grow clockwise on screen.
    pub fn start_angle(&self) -> f64 {
        ((self.as_index() + 2) % 8) as f64 * FRAC_PI_4
    }
}

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpinConfig {
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    pub period: Duration,
    pub repeat: Repeat,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
            repeat: Repeat::Forever,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    #[serde(default)]
    pub bold: bool,
}

/// A menu item as written in the config file. Colours are `#rrggbb` hex.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: Option<String>,
    pub icon: Option<IconName>,
    pub font: Option<FontConfig>,
    pub text_color: Option<String>,
    pub text_highlight_color: Option<String>,
    pub background_color: Option<String>,
}

impl ItemConfig {
    pub fn to_menu_item(&self) -> Result<MenuItem, ConfigError> {
        Ok(MenuItem {
            label: self.label.clone(),
            icon: self.icon.clone(),
            action: None,
            font: self.font.as_ref().map(|f| FontSpec {
                bold: f.bold,
                ..FontSpec::new(f.family.clone(), f.size)
            }),
            text_color: self.text_color.as_deref().map(parse_color).transpose()?,
            text_highlight_color: self
                .text_highlight_color
                .as_deref()
                .map(parse_color)
                .transpose()?,
            background_color: self
                .background_color
                .as_deref()
                .map(parse_color)
                .transpose()?,
        })
    }
}

pub fn parse_color(hex: &str) -> Result<Srgba<f64>, ConfigError> {
    Srgb::<u8>::from_str(hex)
        .map(|c| c.into_format::<f64>().with_alpha(1.0))
        .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    pub diameter: f64,
    pub hide_on_button_action: bool,
    pub stationary: bool,
    pub rotate_on_display: bool,
    pub rotate_on_hide: bool,
    pub equal_size_buttons: bool,
    pub start: Direction,
    pub display: Timing,
    pub hide: Timing,
    pub spin: SpinConfig,
    pub items: Vec<ItemConfig>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            diameter: 200.0,
            hide_on_button_action: false,
            stationary: false,
            rotate_on_display: false,
            rotate_on_hide: false,
            equal_size_buttons: true,
            start: Direction::default(),
            display: Timing::default(),
            hide: Timing::default(),
            spin: SpinConfig::default(),
            items: Vec::new(),
        }
    }
}

impl WheelConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn menu_items(&self) -> Result<Vec<MenuItem>, ConfigError> {
        self.items.iter().map(ItemConfig::to_menu_item).collect()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid colour '{0}', expected #rrggbb")]
    InvalidColor(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "ferris", "ferris-wheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<WheelConfig, ConfigError> {
    load_config_from(&get_config_path()?)
}

/// Reads `path` if it exists, then overlays `FERRIS_*` environment variables
/// (`__` separates nested keys, e.g. `FERRIS_DISPLAY__DURATION`).
pub fn load_config_from(path: &Path) -> Result<WheelConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("FERRIS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> WheelConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default wheel config: {}", e);
            WheelConfig::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
