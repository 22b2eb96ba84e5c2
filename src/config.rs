/// 환경 변수 기반 설정
// region:    --- Imports
use crate::catalog::filter::{ItemOrder, StatusFilter};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Config
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub tick_interval: Duration,
    pub default_filter: StatusFilter,
    pub order: ItemOrder,
    pub currency: String,
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: 1,
            tick_interval: Duration::from_secs(1),
            default_filter: StatusFilter::All,
            order: ItemOrder::IdAsc,
            currency: "zł".to_string(),
            init_schema: false,
        }
    }
}

impl Config {
    /// 프로세스 환경 변수에서 설정 읽기
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 읽기
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or(&lookup, "AUCTION_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "AUCTION_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let tick_ms: u64 = parse_or(&lookup, "AUCTION_TICK_MS", 1000)?;
        if tick_ms == 0 {
            return Err(ConfigError::Invalid {
                var: "AUCTION_TICK_MS",
                value: "0".to_string(),
            });
        }

        let default_filter = match lookup("AUCTION_DEFAULT_FILTER") {
            Some(v) => StatusFilter::from_str(&v).map_err(|_| ConfigError::Invalid {
                var: "AUCTION_DEFAULT_FILTER",
                value: v,
            })?,
            None => defaults.default_filter,
        };

        let order = match lookup("AUCTION_ORDER") {
            Some(v) => ItemOrder::from_str(&v)?,
            None => defaults.order,
        };

        let init_schema = match lookup("AUCTION_INIT_SCHEMA") {
            Some(v) => parse_bool("AUCTION_INIT_SCHEMA", v)?,
            None => defaults.init_schema,
        };

        Ok(Self {
            database_url,
            max_connections,
            tick_interval: Duration::from_millis(tick_ms),
            default_filter,
            order,
            currency: lookup("AUCTION_CURRENCY").unwrap_or(defaults.currency),
            init_schema,
        })
    }
}
// endregion: --- Config

// region:    --- Helpers
fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}
// endregion: --- Helpers
