//! Sensor snapshots captured during the summoning ritual
//!
//! Every field is independently optional: a missing value means the sensor
//! was unavailable or the player opted out of collecting it, never zero.

use serde::{Deserialize, Serialize};

/// Geographic coordinates from the device location sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// 3-axis accelerometer reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Snapshot of device sensors taken while the ritual runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub location: Option<GeoPoint>,
    /// Battery charge fraction in [0, 1]
    pub battery_level: Option<f32>,
    /// Ambient illuminance in lux (non-negative, unbounded)
    pub light_level: Option<f32>,
    pub accelerometer: Option<MotionVector>,
    /// UI color scheme reported by the device ("light" / "dark")
    pub color_scheme: Option<String>,
    /// RFC 3339 capture time
    pub timestamp: Option<String>,
    /// IANA timezone or UTC offset of the capture
    pub timezone: Option<String>,
}

impl SensorSnapshot {
    /// Snapshot with nothing collected
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(GeoPoint {
            latitude,
            longitude,
        });
        self
    }

    pub fn with_battery_level(mut self, level: f32) -> Self {
        self.battery_level = Some(level);
        self
    }

    pub fn with_light_level(mut self, lux: f32) -> Self {
        self.light_level = Some(lux);
        self
    }

    pub fn with_accelerometer(mut self, x: f32, y: f32, z: f32) -> Self {
        self.accelerometer = Some(MotionVector { x, y, z });
        self
    }

    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_no_readings() {
        let snapshot = SensorSnapshot::empty();
        assert!(snapshot.location.is_none());
        assert!(snapshot.battery_level.is_none());
        assert!(snapshot.light_level.is_none());
        assert!(snapshot.accelerometer.is_none());
        assert!(snapshot.timestamp.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let snapshot = SensorSnapshot::empty()
            .with_location(52.52, 13.405)
            .with_battery_level(0.8)
            .with_light_level(450.0)
            .with_accelerometer(0.0, 0.1, 9.8)
            .with_timezone("Europe/Berlin");

        assert_eq!(
            snapshot.location,
            Some(GeoPoint {
                latitude: 52.52,
                longitude: 13.405
            })
        );
        assert_eq!(snapshot.battery_level, Some(0.8));
        assert_eq!(snapshot.light_level, Some(450.0));
        assert_eq!(snapshot.timezone.as_deref(), Some("Europe/Berlin"));
    }
}
