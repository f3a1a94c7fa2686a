use std::net::SocketAddr;
use std::path::PathBuf;
use axum::http::HeaderValue;
use crate::error::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_PRIZE_SHEET_PATH: &str = "prizes.json";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub prize_sheet_path: PathBuf,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR {:?}: {}", bind_addr, e)))?;

        let allowed_origins = get("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| Error::Config(format!("ALLOWED_ORIGINS entry {:?}", origin)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bind_addr,
            prize_sheet_path: PathBuf::from(get("PRIZE_SHEET_PATH", DEFAULT_PRIZE_SHEET_PATH)),
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
            allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.prize_sheet_path, PathBuf::from("prizes.json"));
        assert_eq!(config.allowed_origins, vec![HeaderValue::from_static("http://127.0.0.1:8080")]);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BIND_ADDR", "0.0.0.0:8000"),
            ("ALLOWED_ORIGINS", "https://draw.example.com, http://localhost:8080"),
            ("STATIC_DIR", "dist"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_bad_bind_addr() {
        let result = Config::from_lookup(|key| (key == "BIND_ADDR").then(|| "nope".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
