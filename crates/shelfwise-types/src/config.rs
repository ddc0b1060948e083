//! Global configuration for Shelfwise.
//!
//! Deserialized from `config.toml` in the data directory. Every field has
//! a default so a missing or partial file still yields a working config.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Artificial latency of the offline provider, in milliseconds.
    ///
    /// Models the round-trip of the external call the provider stands in
    /// for. The reference behavior is 2000 ms.
    #[serde(default = "default_response_latency_ms")]
    pub response_latency_ms: u64,

    /// Fail every nth assistant request, for exercising the rejection
    /// path. Absent or zero means never fail.
    #[serde(default)]
    pub failure_every: Option<u32>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            response_latency_ms: default_response_latency_ms(),
            failure_every: None,
        }
    }
}

fn default_response_latency_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.response_latency_ms, 2000);
        assert!(config.failure_every.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.response_latency_ms, 2000);
        assert!(config.failure_every.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GlobalConfig = toml::from_str("response_latency_ms = 50").unwrap();
        assert_eq!(config.response_latency_ms, 50);
        assert!(config.failure_every.is_none());

        let config: GlobalConfig = toml::from_str("failure_every = 3").unwrap();
        assert_eq!(config.response_latency_ms, 2000);
        assert_eq!(config.failure_every, Some(3));
    }
}
