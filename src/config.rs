use std::path::PathBuf;

/// Where the key-value store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreLocation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            store: StoreLocation::File(PathBuf::from("./data/asset-store.json")),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = std::env::var("APP_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {v:?}: {e}"))?,
            Err(_) => defaults.port,
        };
        let store = std::env::var("ASSET_STORE_PATH")
            .map(|v| parse_store_location(&v))
            .unwrap_or(defaults.store);
        Ok(Self { host, port, store })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_store_location(raw: &str) -> StoreLocation {
    match raw.trim() {
        ":memory:" => StoreLocation::Memory,
        path => StoreLocation::File(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_loopback() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn memory_marker_selects_memory_store() {
        assert_eq!(parse_store_location(":memory:"), StoreLocation::Memory);
        assert_eq!(
            parse_store_location(" /tmp/assets.json "),
            StoreLocation::File(PathBuf::from("/tmp/assets.json"))
        );
    }
}
