//! Runtime configuration.

use std::env;
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "INVENTORY_CHANNEL_CAPACITY";
pub const LISTING_PATH_VAR: &str = "INVENTORY_LISTING_PATH";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_LISTING_PATH: &str = "/inventory";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Settings for an [`InventorySystem`](super::InventorySystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Request buffer of the product store's channel.
    pub channel_capacity: usize,
    /// Where a successful create redirects.
    pub listing_path: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
        }
    }
}

impl InventoryConfig {
    /// Reads overrides from `INVENTORY_CHANNEL_CAPACITY` and `INVENTORY_LISTING_PATH`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(path) = lookup(LISTING_PATH_VAR).filter(|path| !path.is_empty()) {
            config.listing_path = path;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = InventoryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.listing_path, "/inventory");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = InventoryConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, " 128 "),
            (LISTING_PATH_VAR, "/stock"),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 128);
        assert_eq!(config.listing_path, "/stock");
    }

    #[test]
    fn test_zero_or_malformed_capacity_is_rejected() {
        for bad in ["0", "-1", "lots"] {
            let err = InventoryConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidCapacity {
                    var: CHANNEL_CAPACITY_VAR,
                    value: bad.to_string(),
                }
            );
        }
    }
}
