use crate::application::widgets::{CursorStyle, PathStyle, SyncStyle};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "config/route_sync";
const DEFAULT_DATA_FILE: &str = "web_info.json";
const ENV_PREFIX: &str = "ROUTE_SYNC";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PlaybackConfig {
    pub rate: f64,
    pub tick_ms: u64,
    pub start: f64,
    pub end: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            tick_ms: 250,
            start: 0.0,
            end: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    pub stroke_color: String,
    pub stroke_opacity: f64,
    pub stroke_weight: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 12,
            stroke_color: "#0000FF".to_string(),
            stroke_opacity: 1.0,
            stroke_weight: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub plot_line_id: String,
    pub plot_line_color: String,
    pub plot_line_width: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            plot_line_id: "location".to_string(),
            plot_line_color: "black".to_string(),
            plot_line_width: 2,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("source.path and source.url are mutually exclusive")]
    ConflictingSources,
    #[error("playback.rate must be a positive number, got {0}")]
    InvalidRate(f64),
    #[error("playback.tick_ms must be greater than zero")]
    ZeroTick,
    #[error("playback.start {start} is after playback.end {end}")]
    InvalidRange { start: f64, end: f64 },
    #[error("playback.{field} must be a finite number, got {value}")]
    NonFinitePosition { field: &'static str, value: f64 },
}

/// Where `web_info.json` is read from
#[derive(Debug, Clone, PartialEq)]
pub enum RouteLocation {
    File(PathBuf),
    Http(String),
}

impl SourceConfig {
    pub fn location(&self) -> Result<RouteLocation, ConfigError> {
        match (&self.path, &self.url) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingSources),
            (None, Some(url)) => Ok(RouteLocation::Http(url.clone())),
            (Some(path), None) => Ok(RouteLocation::File(PathBuf::from(path))),
            (None, None) => Ok(RouteLocation::File(PathBuf::from(DEFAULT_DATA_FILE))),
        }
    }
}

impl PlaybackConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.location()?;

        if !(self.playback.rate.is_finite() && self.playback.rate > 0.0) {
            return Err(ConfigError::InvalidRate(self.playback.rate));
        }
        if self.playback.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if !self.playback.start.is_finite() {
            return Err(ConfigError::NonFinitePosition {
                field: "start",
                value: self.playback.start,
            });
        }
        if let Some(end) = self.playback.end.filter(|end| !end.is_finite()) {
            return Err(ConfigError::NonFinitePosition { field: "end", value: end });
        }
        if let Some(end) = self.playback.end {
            if self.playback.start > end {
                return Err(ConfigError::InvalidRange {
                    start: self.playback.start,
                    end,
                });
            }
        }

        Ok(())
    }

    pub fn sync_style(&self) -> SyncStyle {
        SyncStyle {
            path: PathStyle {
                color: self.map.stroke_color.clone(),
                opacity: self.map.stroke_opacity,
                weight: self.map.stroke_weight,
            },
            cursor: CursorStyle {
                id: self.chart.plot_line_id.clone(),
                color: self.chart.plot_line_color.clone(),
                width: self.chart.plot_line_width,
            },
        }
    }
}

/// Load `config/route_sync.*` (optional) overlaid with `ROUTE_SYNC__*` variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

pub fn load_config_from(name: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.source.location(),
            Ok(RouteLocation::File(PathBuf::from("web_info.json")))
        );
        assert_eq!(config.playback.tick(), Duration::from_millis(250));
        assert_eq!(config.map.zoom, 12);

        let style = config.sync_style();
        assert_eq!(style.path.color, "#0000FF");
        assert_eq!(style.path.weight, 2);
        assert_eq!(style.cursor.id, "location");
        assert_eq!(style.cursor.color, "black");
    }

    #[test]
    fn test_source_location() {
        let url = SourceConfig {
            path: None,
            url: Some("http://localhost:8000/web_info.json".to_string()),
        };
        assert_eq!(
            url.location(),
            Ok(RouteLocation::Http("http://localhost:8000/web_info.json".to_string()))
        );

        let both = SourceConfig {
            path: Some("a.json".to_string()),
            url: Some("http://b".to_string()),
        };
        assert_eq!(both.location(), Err(ConfigError::ConflictingSources));
    }

    #[test]
    fn test_validate_rejects_bad_playback() {
        let mut config = AppConfig::default();
        config.playback.rate = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRate(0.0)));

        let mut config = AppConfig::default();
        config.playback.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));

        let mut config = AppConfig::default();
        config.playback.start = 10.0;
        config.playback.end = Some(5.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                start: 10.0,
                end: 5.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_positions() {
        let mut config = AppConfig::default();
        config.playback.start = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinitePosition { field: "start", .. })
        ));

        let mut config = AppConfig::default();
        config.playback.end = Some(f64::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinitePosition {
                field: "end",
                value: f64::INFINITY
            })
        );

        let mut config = AppConfig::default();
        config.playback.end = Some(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinitePosition { field: "end", .. })
        ));
    }

    #[test]
    fn test_load_rejects_nan_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route_sync.toml");
        std::fs::write(&path, "[playback]\nstart = nan\n").unwrap();

        assert!(load_config_from(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route_sync.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[source]\npath = \"rides/coast.json\"\n\n[playback]\nrate = 4.0\ntick_ms = 100\n\n[chart]\nplot_line_color = \"red\""
        )
        .unwrap();

        let config = load_config_from(path.to_str().unwrap()).unwrap();

        assert_eq!(
            config.source.location(),
            Ok(RouteLocation::File(PathBuf::from("rides/coast.json")))
        );
        assert_eq!(config.playback.rate, 4.0);
        assert_eq!(config.playback.tick_ms, 100);
        assert_eq!(config.playback.start, 0.0);
        assert_eq!(config.chart.plot_line_color, "red");
        assert_eq!(config.chart.plot_line_id, "location");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route_sync.toml");
        std::fs::write(&path, "[playback]\nrate = -1.0\n").unwrap();

        assert!(load_config_from(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let config = load_config_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.playback.rate, 1.0);
    }
}
