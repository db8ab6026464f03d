//! Startup configuration, read once from the environment in `main.rs`.
//!
//! | variable               | default         |
//! |------------------------|-----------------|
//! | `TERMOS_HOST`          | `127.0.0.1`     |
//! | `TERMOS_PORT`          | `8080`          |
//! | `TERMOS_DATA_SOURCE`   | `sqlite`        |
//! | `TERMOS_DB_PATH`       | `termos.sqlite` |
//! | `TERMOS_OPEN_BROWSER`  | `true`          |
//!
//! `TERMOS_DATA_SOURCE=mock` keeps the settings in memory, seeded with the
//! built-in templates, and nothing is written to disk.

use std::fmt;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "termos.sqlite";

/// Where the settings store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceMode {
    Sqlite(PathBuf),
    Mock,
}

impl fmt::Display for DataSourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceMode::Sqlite(path) => write!(f, "sqlite:{}", path.display()),
            DataSourceMode::Mock => f.write_str("mock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_source: DataSourceMode,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let host = lookup("TERMOS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TERMOS_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("TERMOS_PORT inválida '{}': {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let data_source = match lookup("TERMOS_DATA_SOURCE").as_deref().map(str::trim) {
            None | Some("") | Some("sqlite") => DataSourceMode::Sqlite(PathBuf::from(
                lookup("TERMOS_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            )),
            Some("mock") => DataSourceMode::Mock,
            Some(other) => return Err(format!("TERMOS_DATA_SOURCE desconhecida: {}", other)),
        };

        let open_browser = match lookup("TERMOS_OPEN_BROWSER").as_deref().map(str::trim) {
            None => true,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => return Err(format!("TERMOS_OPEN_BROWSER inválido: {}", other)),
        };

        Ok(Self {
            host,
            port,
            data_source,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(
            config.data_source,
            DataSourceMode::Sqlite(PathBuf::from("termos.sqlite"))
        );
        assert!(config.open_browser);
    }

    #[test]
    fn mock_mode_and_overrides() {
        let config = config(&[
            ("TERMOS_HOST", "0.0.0.0"),
            ("TERMOS_PORT", "9000"),
            ("TERMOS_DATA_SOURCE", "mock"),
            ("TERMOS_OPEN_BROWSER", "false"),
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.data_source, DataSourceMode::Mock);
        assert!(!config.open_browser);
    }

    #[test]
    fn custom_db_path() {
        let config = config(&[("TERMOS_DB_PATH", "/var/lib/termos/db.sqlite")]).unwrap();
        assert_eq!(config.data_source.to_string(), "sqlite:/var/lib/termos/db.sqlite");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(config(&[("TERMOS_PORT", "oitenta")]).is_err());
        assert!(config(&[("TERMOS_DATA_SOURCE", "rest")]).is_err());
        assert!(config(&[("TERMOS_OPEN_BROWSER", "talvez")]).is_err());
    }
}
