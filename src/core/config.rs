//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.campus-hub/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cafeterias: Vec<CafeteriaEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub campus_name: Option<String>,
    pub tick_seconds: Option<u64>,
    pub queue_seed: Option<u64>,
}

/// One tracked cafeteria. `baseline` is the starting waiting count.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CafeteriaEntry {
    pub name: String,
    pub baseline: Option<u8>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CAMPUS_NAME: &str = "Northfield Campus";
pub const DEFAULT_TICK_SECONDS: u64 = 3;
pub const DEFAULT_BASELINE: u8 = 5;

/// The cafeterias tracked when the config names none.
pub fn default_cafeterias() -> Vec<CafeteriaEntry> {
    let entry = |name: &str, baseline: u8| CafeteriaEntry {
        name: name.to_string(),
        baseline: Some(baseline),
    };
    vec![
        entry("North Commons", 6),
        entry("Union Food Court", 12),
        entry("Science Block Cafe", 3),
        entry("Library Espresso Bar", 2),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub campus_name: String,
    pub tick_seconds: u64,
    pub queue_seed: u64,
    pub cafeterias: Vec<CafeteriaEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.campus-hub/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".campus-hub").join("config.toml"))
}

/// Load config from `~/.campus-hub/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CampusConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CampusConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CampusConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CampusConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: CampusConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Campus Hub Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# campus_name = "Northfield Campus"
# tick_seconds = 3          # Queue feed refresh period
# queue_seed = 12345        # Pin the feed's random sequence (or CAMPUS_HUB_SEED)

# [[cafeterias]]
# name = "North Commons"
# baseline = 6              # Starting waiting count, clamped to [0, 25]

# [[cafeterias]]
# name = "Union Food Court"
# baseline = 12
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tick_seconds` and `cli_seed` come from CLI flags (None = not specified).
pub fn resolve(
    config: &CampusConfig,
    cli_tick_seconds: Option<u64>,
    cli_seed: Option<u64>,
) -> ResolvedConfig {
    let campus_name = config
        .general
        .campus_name
        .clone()
        .unwrap_or_else(|| DEFAULT_CAMPUS_NAME.to_string());

    // Tick period: CLI → env → config → default, floored at 1s
    let tick_seconds = cli_tick_seconds
        .or_else(|| env_u64("CAMPUS_HUB_TICK_SECONDS"))
        .or(config.general.tick_seconds)
        .unwrap_or(DEFAULT_TICK_SECONDS)
        .max(1);

    // Seed: CLI → env → config → wall clock at startup. A clock-derived
    // default keeps interactive runs varied while letting tests and bug
    // reports pin the exact sequence.
    let queue_seed = cli_seed
        .or_else(|| env_u64("CAMPUS_HUB_SEED"))
        .or(config.general.queue_seed)
        .unwrap_or_else(clock_seed);

    let cafeterias = if config.cafeterias.is_empty() {
        default_cafeterias()
    } else {
        config.cafeterias.clone()
    };

    ResolvedConfig {
        campus_name,
        tick_seconds,
        queue_seed,
        cafeterias,
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring non-numeric {key}={raw}");
            None
        }
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CampusConfig::default();
        assert!(config.cafeterias.is_empty());
        assert!(config.general.campus_name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CampusConfig::default();
        let resolved = resolve(&config, None, Some(1));
        assert_eq!(resolved.campus_name, DEFAULT_CAMPUS_NAME);
        assert_eq!(resolved.tick_seconds, DEFAULT_TICK_SECONDS);
        assert_eq!(resolved.cafeterias.len(), default_cafeterias().len());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CampusConfig {
            general: GeneralConfig {
                campus_name: Some("Lakeside".to_string()),
                tick_seconds: Some(7),
                queue_seed: Some(99),
            },
            cafeterias: vec![CafeteriaEntry {
                name: "Boathouse Grill".to_string(),
                baseline: Some(4),
            }],
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.campus_name, "Lakeside");
        assert_eq!(resolved.tick_seconds, 7);
        assert_eq!(resolved.queue_seed, 99);
        assert_eq!(resolved.cafeterias.len(), 1);
        assert_eq!(resolved.cafeterias[0].name, "Boathouse Grill");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = CampusConfig {
            general: GeneralConfig {
                tick_seconds: Some(7),
                queue_seed: Some(99),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(2), Some(5));
        assert_eq!(resolved.tick_seconds, 2);
        assert_eq!(resolved.queue_seed, 5);
    }

    #[test]
    fn test_resolve_floors_tick_at_one_second() {
        let resolved = resolve(&CampusConfig::default(), Some(0), Some(1));
        assert_eq!(resolved.tick_seconds, 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
campus_name = "Hillcrest"
tick_seconds = 5
queue_seed = 4242

[[cafeterias]]
name = "Hilltop Diner"
baseline = 8

[[cafeterias]]
name = "Valley Kiosk"
"#;
        let config: CampusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.campus_name.as_deref(), Some("Hillcrest"));
        assert_eq!(config.general.tick_seconds, Some(5));
        assert_eq!(config.general.queue_seed, Some(4242));
        assert_eq!(config.cafeterias.len(), 2);
        assert_eq!(config.cafeterias[0].baseline, Some(8));
        assert_eq!(config.cafeterias[1].baseline, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
campus_name = "Sparse U"
"#;
        let config: CampusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.campus_name.as_deref(), Some("Sparse U"));
        assert!(config.general.tick_seconds.is_none());
        assert!(config.cafeterias.is_empty());
    }
}
