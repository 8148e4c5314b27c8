//! Server configuration, provided by the client as `initializationOptions`.

use crate::core::cells::DEFAULT_CELL_MARKER;
use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub cells: CellsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellsConfig {
    /// Regular expression recognizing the lines that introduce a code cell.
    pub marker_pattern: String,
}

impl Default for CellsConfig {
    fn default() -> Self {
        Self {
            marker_pattern: DEFAULT_CELL_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    #[serde(with = "level_filter_serde")]
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::OFF,
        }
    }
}

mod level_filter_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;
    use tracing::metadata::LevelFilter;

    pub fn serialize<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(level)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = String::deserialize(deserializer)?;
        LevelFilter::from_str(&level).map_err(Error::custom)
    }
}
