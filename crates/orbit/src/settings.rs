use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};
use serde_with::formats::Flexible;
use serde_with::{DurationMilliSecondsWithFrac, DurationSecondsWithFrac, serde_as};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_INIT_SPEED: f64 = 4.5;
pub const DEFAULT_CONTINUOUS_SPEED: f64 = 0.5;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 200.0;
pub const DEFAULT_FRAME_LENGTH: Duration = Duration::from_nanos(1_000_000_000 / 24); // 24fps
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(2);
pub const DEFAULT_ZOOM: Duration = Duration::from_millis(500);
/// glib timeouts have millisecond resolution, anything shorter spins.
pub const MIN_FRAME_LENGTH: Duration = Duration::from_millis(1);

/// Icon sizes as measured by the host, used when radii are not configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMetrics {
    pub icon_width: f64,
    pub zoomed_icon_width: f64,
}

impl IconMetrics {
    pub fn new(icon_width: f64, zoomed_icon_width: f64) -> Self {
        Self {
            icon_width,
            zoomed_icon_width,
        }
    }
}

/// User-facing tuning knobs. Anything left out falls back to a default.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    /// Degrees per frame during load-in (0.1-10).
    pub init_speed: Option<f64>,
    #[serde_as(as = "Option<DurationMilliSecondsWithFrac<f64, Flexible>>")]
    #[serde(default, rename = "frame_length_ms")]
    pub frame_length: Option<Duration>,
    /// Degrees per frame once the widget has settled (0.1-10).
    pub continuous_speed: Option<f64>,
    pub icon_radius: Option<f64>,
    pub icon_zoom_radius: Option<f64>,
    pub circle_radius: Option<f64>,
    #[serde_as(as = "Option<DurationSecondsWithFrac<f64, Flexible>>")]
    #[serde(default, rename = "transition_secs")]
    pub transition: Option<Duration>,
    #[serde_as(as = "Option<DurationMilliSecondsWithFrac<f64, Flexible>>")]
    #[serde(default, rename = "zoom_ms")]
    pub zoom: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub init_speed: f64,
    pub frame_length: Duration,
    pub continuous_speed: f64,
    pub geometry: Geometry,
    pub transition: Duration,
    pub zoom: Duration,
}

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("frame length must be at least 1ms (got {0:?})")]
    FrameTooShort(Duration),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidRadius { field: &'static str, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    InvalidSpeed { field: &'static str, value: f64 },
    #[error("init_speed must be positive or the load-in never completes (got {0})")]
    NonPositiveInitSpeed(f64),
}

impl Settings {
    pub fn resolve(
        overrides: &SettingsOverrides,
        metrics: IconMetrics,
    ) -> Result<Self, SettingsError> {
        let geometry = Geometry::new(
            overrides.circle_radius.unwrap_or(DEFAULT_CIRCLE_RADIUS),
            overrides.icon_radius.unwrap_or(metrics.icon_width / 2.0),
            overrides
                .icon_zoom_radius
                .unwrap_or(metrics.zoomed_icon_width / 2.0),
        );

        let settings = Self {
            init_speed: overrides.init_speed.unwrap_or(DEFAULT_INIT_SPEED),
            frame_length: overrides.frame_length.unwrap_or(DEFAULT_FRAME_LENGTH),
            continuous_speed: overrides
                .continuous_speed
                .unwrap_or(DEFAULT_CONTINUOUS_SPEED),
            geometry,
            transition: overrides.transition.unwrap_or(DEFAULT_TRANSITION),
            zoom: overrides.zoom.unwrap_or(DEFAULT_ZOOM),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_length < MIN_FRAME_LENGTH {
            return Err(SettingsError::FrameTooShort(self.frame_length));
        }

        let g = &self.geometry;
        [
            ("circle_radius", g.circle_radius),
            ("icon_radius", g.icon_radius),
            ("icon_zoom_radius", g.icon_zoom_radius),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        .map_or(Ok(()), |(field, value)| {
            Err(SettingsError::InvalidRadius { field, value })
        })?;

        [
            ("init_speed", self.init_speed),
            ("continuous_speed", self.continuous_speed),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map_or(Ok(()), |(field, value)| {
            Err(SettingsError::InvalidSpeed { field, value })
        })?;

        if self.init_speed <= 0.0 {
            return Err(SettingsError::NonPositiveInitSpeed(self.init_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: IconMetrics = IconMetrics {
        icon_width: 40.0,
        zoomed_icon_width: 120.0,
    };

    #[test]
    fn test_defaults_use_measured_icons() {
        let s = Settings::resolve(&SettingsOverrides::default(), METRICS).unwrap();
        assert_eq!(s.init_speed, 4.5);
        assert_eq!(s.continuous_speed, 0.5);
        assert_eq!(s.frame_length, Duration::from_nanos(41_666_666));
        assert_eq!(s.geometry, Geometry::new(200.0, 20.0, 60.0));
        assert_eq!(s.transition, Duration::from_secs(2));
        assert_eq!(s.zoom, Duration::from_millis(500));
    }

    #[test]
    fn test_overrides_deserialization() {
        let json = r#"{
            "init_speed": 3,
            "frame_length_ms": 20.5,
            "circle_radius": 120,
            "icon_radius": 16,
            "transition_secs": "1.5"
        }"#;
        let overrides: SettingsOverrides = serde_json::from_str(json).unwrap();
        let s = Settings::resolve(&overrides, METRICS).unwrap();

        assert_eq!(s.init_speed, 3.0);
        assert!((s.frame_length.as_secs_f64() - 0.0205).abs() < 1e-9);
        assert_eq!(s.geometry, Geometry::new(120.0, 16.0, 60.0));
        assert!((s.transition.as_secs_f64() - 1.5).abs() < 1e-9);
        assert_eq!(s.continuous_speed, DEFAULT_CONTINUOUS_SPEED);
    }

    #[test]
    fn test_empty_overrides_deserialize() {
        let overrides: SettingsOverrides = serde_json::from_str("{}").unwrap();
        assert_eq!(overrides, SettingsOverrides::default());
    }

    #[test]
    fn test_validation() {
        let zero_frame = SettingsOverrides {
            frame_length: Some(Duration::ZERO),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(&zero_frame, METRICS),
            Err(SettingsError::FrameTooShort(Duration::ZERO))
        );

        let sub_millisecond = SettingsOverrides {
            frame_length: Some(Duration::from_micros(500)),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(&sub_millisecond, METRICS),
            Err(SettingsError::FrameTooShort(Duration::from_micros(500)))
        );

        let one_millisecond = SettingsOverrides {
            frame_length: Some(MIN_FRAME_LENGTH),
            ..Default::default()
        };
        assert!(Settings::resolve(&one_millisecond, METRICS).is_ok());

        let negative = SettingsOverrides {
            circle_radius: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(&negative, METRICS),
            Err(SettingsError::InvalidRadius {
                field: "circle_radius",
                value: -1.0
            })
        );

        let infinite_speed = SettingsOverrides {
            continuous_speed: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(&infinite_speed, METRICS),
            Err(SettingsError::InvalidSpeed {
                field: "continuous_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_init_speed_must_be_positive() {
        for speed in [0.0, -1.0] {
            let overrides = SettingsOverrides {
                init_speed: Some(speed),
                ..Default::default()
            };
            assert_eq!(
                Settings::resolve(&overrides, METRICS),
                Err(SettingsError::NonPositiveInitSpeed(speed))
            );
        }

        // a stalled continuous speed is allowed, the load-in still finishes
        let still = SettingsOverrides {
            init_speed: Some(0.1),
            continuous_speed: Some(0.0),
            ..Default::default()
        };
        assert!(Settings::resolve(&still, METRICS).is_ok());
    }
}
