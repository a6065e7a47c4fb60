//! Player settings
//!
//! Feedback toggles, theme, and the per-sensor data collection opt-ins the
//! ritual flow consults before reading any sensor.

use kagura_core::SensorSnapshot;
use serde::{Deserialize, Serialize};

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

/// Per-sensor opt-in flags
///
/// A disabled sensor is never read; its snapshot field stays `None` and the
/// generator skips the corresponding rarity contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCollection {
    pub location: bool,
    pub battery_level: bool,
    pub motion_data: bool,
    pub light_sensor: bool,
}

impl Default for DataCollection {
    fn default() -> Self {
        Self {
            location: true,
            battery_level: true,
            motion_data: true,
            light_sensor: true,
        }
    }
}

impl DataCollection {
    /// Strip opted-out readings from a snapshot before generation
    pub fn filter(&self, snapshot: &SensorSnapshot) -> SensorSnapshot {
        let mut filtered = snapshot.clone();
        if !self.location {
            filtered.location = None;
        }
        if !self.battery_level {
            filtered.battery_level = None;
        }
        if !self.motion_data {
            filtered.accelerometer = None;
        }
        if !self.light_sensor {
            filtered.light_level = None;
        }
        filtered
    }
}

/// All player-facing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub vibration: bool,
    pub notifications: bool,
    pub theme: Theme,
    pub sound_effects: bool,
    pub music: bool,
    #[serde(default)]
    pub data_collection: DataCollection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vibration: true,
            notifications: true,
            theme: Theme::System,
            sound_effects: true,
            music: true,
            data_collection: DataCollection::default(),
        }
    }
}

impl Settings {
    pub fn toggle_vibration(&mut self) {
        self.vibration = !self.vibration;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn toggle_sound_effects(&mut self) {
        self.sound_effects = !self.sound_effects;
    }

    pub fn toggle_music(&mut self) {
        self.music = !self.music;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
