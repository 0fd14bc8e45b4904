use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::loader::error::ConfigLoadError;

pub fn parse_duration(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: raw.to_string(),
            source,
        }
    })
}

/// Add a missing `http://` scheme, drop trailing slashes and check the
/// result parses.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigLoadError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
    Url::parse(&with_scheme).map_err(|source| ConfigLoadError::InvalidBaseUrl {
        value: raw.to_string(),
        source,
    })?;
    Ok(with_scheme)
}

/// Install the global fmt subscriber. `filter` comes from configuration
/// (`COMPENDIUM_LOG`, then `RUST_LOG`, then the file or default).
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_use_humantime() {
        assert_eq!(
            parse_duration("timeout", "1m 30s").ok(),
            Some(Duration::from_secs(90))
        );
        assert!(parse_duration("timeout", "soon").is_err());
    }

    #[test]
    fn base_urls_are_normalized() {
        assert_eq!(
            normalize_base_url("127.0.0.1:8000/").ok().as_deref(),
            Some("http://127.0.0.1:8000")
        );
        assert_eq!(
            normalize_base_url("https://api.example.test").ok().as_deref(),
            Some("https://api.example.test")
        );
    }
}
