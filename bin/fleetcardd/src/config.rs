//! Server configuration.
//!
//! Loaded from a TOML file; every field has a default so the server
//! also runs with no config at all.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use cards::FetchConfig;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub upstream: UpstreamSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// max-age for successful card responses, in seconds.
    pub cache_max_age: u32,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { cache_max_age: 300 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamSection {
    /// Upstream request timeout, in seconds.
    pub timeout_secs: u64,
    /// Overrides the default User-Agent sent upstream.
    pub user_agent: Option<String>,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: None,
        }
    }
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    /// A bare name resolves to `/etc/fleetcard/<name>.toml`; anything
    /// containing `/` or `.` is used as a path directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/fleetcard/{}.toml", name_or_path))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Reject settings that cannot work at runtime.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.upstream.timeout_secs == 0 {
            anyhow::bail!("upstream.timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn fetch_config(&self) -> FetchConfig {
        let mut fetch = FetchConfig {
            timeout: Duration::from_secs(self.upstream.timeout_secs),
            ..FetchConfig::default()
        };
        if let Some(ua) = &self.upstream.user_agent {
            fetch.user_agent = ua.clone();
        }
        fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_resolves_to_etc() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/fleetcard/prod.toml")
        );
    }

    #[test]
    fn path_like_values_pass_through() {
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("/tmp/x.toml"),
            PathBuf::from("/tmp/x.toml")
        );
    }

    #[test]
    fn empty_config_gets_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.cache_max_age, 300);
        assert_eq!(config.upstream.timeout_secs, 5);
        assert!(config.upstream.user_agent.is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config: ServerConfig = toml::from_str("[upstream]\ntimeout_secs = 0\n").unwrap();
        assert!(config.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: ServerConfig = toml::from_str(
            "[upstream]\ntimeout_secs = 10\nuser_agent = \"probe/1\"\n",
        )
        .unwrap();
        assert_eq!(config.server.cache_max_age, 300);
        assert_eq!(config.upstream.timeout_secs, 10);

        let fetch = config.fetch_config();
        assert_eq!(fetch.timeout, Duration::from_secs(10));
        assert_eq!(fetch.user_agent, "probe/1");
    }
}
