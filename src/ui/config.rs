use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::SwingLabError;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1024.,
            height: 768.,
        }
    }
}

impl From<WindowSize> for Vec2 {
    fn from(value: WindowSize) -> Self {
        Vec2::new(value.width, value.height)
    }
}

/// Window placement persisted between runs.
///
/// Screen interaction state is deliberately not part of the config: the
/// performance view state always starts from its defaults.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub performance_window_position: WindowPosition,
    pub performance_window_size: WindowSize,
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("swinglab").join(CONFIG_FILE_NAME);
        Self::load_from(&config_path)
    }

    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let file = std::fs::File::open(path).ok()?;
        serde_json::from_reader(file).ok()
    }

    pub fn save(&self) -> Result<(), SwingLabError> {
        let config_path = dirs::config_dir()
            .ok_or(SwingLabError::NoConfigDir)?
            .join("swinglab")
            .join(CONFIG_FILE_NAME);
        self.save_to(&config_path)
    }

    fn save_to(&self, path: &Path) -> Result<(), SwingLabError> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SwingLabError::ConfigIOError { source: e })?;
        }

        let file =
            std::fs::File::create(path).map_err(|e| SwingLabError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| SwingLabError::ConfigSerializeError { source: e })
    }
}
