use cupid::aspects::AspectMode;
use cupid::ephemeris::time::{parse_birth_time, DEFAULT_BIRTH_TIME};
use cupid::ChartSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried when no explicit config path is given.
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "cupid.toml",
    "configs/cupid.toml",
    "../../configs/cupid.toml",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CupidConfig {
    pub chart: ChartSettings,
    /// env_logger filter used when RUST_LOG is unset
    pub log_level: String,
    /// File the settings came from, if any
    pub source: Option<PathBuf>,
}

impl Default for CupidConfig {
    fn default() -> Self {
        Self {
            chart: ChartSettings::default(),
            log_level: default_log_level(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    aspect_mode: Option<AspectMode>,
    #[serde(default)]
    default_birth_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingToml {
    #[serde(default = "default_log_level")]
    level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
    #[serde(default)]
    logging: Option<LoggingToml>,
}

/// Parse config text. Every key is optional.
pub fn parse_config(text: &str) -> anyhow::Result<CupidConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse cupid.toml: {e}"))?;

    let chart = root.chart.unwrap_or_default();
    let default_birth_time = chart
        .default_birth_time
        .unwrap_or_else(|| DEFAULT_BIRTH_TIME.to_string());
    if parse_birth_time(&default_birth_time).is_err() {
        anyhow::bail!(
            "chart.default_birth_time must be HH:MM (24-hour), got {:?}",
            default_birth_time
        );
    }

    let log_level = root
        .logging
        .map(|l| l.level)
        .unwrap_or_else(default_log_level);

    Ok(CupidConfig {
        chart: ChartSettings {
            aspect_mode: chart.aspect_mode.unwrap_or_default(),
            default_birth_time,
        },
        log_level,
        source: None,
    })
}

pub fn load_config_file(path: &Path) -> anyhow::Result<CupidConfig> {
    if !path.exists() {
        anyhow::bail!("Config file does not exist: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let mut config = parse_config(&text)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Load from `explicit` if given, otherwise the first existing search path,
/// otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<CupidConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    for p in CONFIG_SEARCH_PATHS {
        let path = Path::new(p);
        if path.exists() {
            return load_config_file(path);
        }
    }
    Ok(CupidConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, CupidConfig::default());
        assert_eq!(config.chart.aspect_mode, AspectMode::Literal);
        assert_eq!(config.chart.default_birth_time, "12:00");
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [chart]
            aspect_mode = "shortest_arc"
            default_birth_time = "06:30"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.chart.aspect_mode, AspectMode::ShortestArc);
        assert_eq!(config.chart.default_birth_time, "06:30");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_config("[chart]\naspect_mode = \"nearest\"").is_err());
        assert!(parse_config("[chart]\ndefault_birth_time = \"noon\"").is_err());
        assert!(parse_config("[chart]\norbs = 3").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\naspect_mode = \"shortest_arc\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.chart.aspect_mode, AspectMode::ShortestArc);
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
