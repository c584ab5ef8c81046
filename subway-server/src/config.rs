//! Server configuration.
//!
//! Every setting has a default and may be overridden through an
//! environment variable:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SUBWAY_ADDR` | `127.0.0.1:8080` |
//! | `SUBWAY_REMOVAL_POLICY` | `merge` (or `tail-only`) |
//! | `SUBWAY_PATH_CACHE` | `true` |
//! | `SUBWAY_PATH_CACHE_CAPACITY` | `10000` |
//! | `SUBWAY_PATH_CACHE_TTL_SECS` | `300` |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::RemovalPolicy;
use crate::network::PathCacheConfig;

/// Error returned when an environment variable holds an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuration for the subway server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// How station removal treats non-terminal stations.
    pub removal_policy: RemovalPolicy,

    /// Path result caching.
    pub path_cache: PathCacheConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            removal_policy: RemovalPolicy::Merge,
            path_cache: PathCacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = parse_var(&lookup, "SUBWAY_ADDR")?.unwrap_or(defaults.bind_addr);
        let removal_policy =
            parse_var(&lookup, "SUBWAY_REMOVAL_POLICY")?.unwrap_or(defaults.removal_policy);
        let enabled =
            parse_var(&lookup, "SUBWAY_PATH_CACHE")?.unwrap_or(defaults.path_cache.enabled);
        let max_capacity = parse_var(&lookup, "SUBWAY_PATH_CACHE_CAPACITY")?
            .unwrap_or(defaults.path_cache.max_capacity);
        let ttl = parse_var(&lookup, "SUBWAY_PATH_CACHE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.path_cache.ttl);

        Ok(Self {
            bind_addr,
            removal_policy,
            path_cache: PathCacheConfig {
                enabled,
                ttl,
                max_capacity,
            },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|e: T::Err| ConfigError {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}

impl FromStr for RemovalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "merge" => Ok(RemovalPolicy::Merge),
            "tail-only" | "tail_only" | "tailonly" => Ok(RemovalPolicy::TailOnly),
            _ => Err("expected `merge` or `tail-only`".to_string()),
        }
    }
}
