use crate::error::ConfigError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub placement: PlacementSection,
    pub timer: TimerSection,
    pub library: Vec<LibrarySticker>,
}

impl BoardConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// The library entry a dragged payload names, if it names one.
    pub fn library_sticker(&self, src: &str) -> Option<&LibrarySticker> {
        self.library.iter().find(|sticker| sticker.src == src)
    }
}

/// Where freshly created items land, in container coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlacementSection {
    pub note: Point,
    pub sticker: Point,
    pub timer: Point,
}

impl Default for PlacementSection {
    fn default() -> Self {
        Self {
            note: Point::new(10.0, 10.0),
            sticker: Point::new(10.0, 10.0),
            timer: Point::new(20.0, 20.0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimerSection {
    pub minutes: u32,
    pub seconds: u32,
    pub tick_interval_ms: u32,
    pub expired_message: String,
}

impl TimerSection {
    pub const DEFAULT_EXPIRED_MESSAGE: &'static str = "Time's up!";
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            minutes: 25,
            seconds: 0,
            tick_interval_ms: 1000,
            expired_message: Self::DEFAULT_EXPIRED_MESSAGE.to_string(),
        }
    }
}

/// A preset image offered by the read-only sticker gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LibrarySticker {
    pub name: String,
    pub src: String,
}
