use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Remote base URL, when present, is an http(s) URL
/// - Remote timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if let Some(remote) = &config.remote {
        let url = remote.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "remote.base_url cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "remote.base_url must start with http:// or https://, got {}",
                url
            )));
        }
        if remote.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "remote.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RemoteConfig, ServerConfig};
    use std::net::IpAddr;

    fn with_remote(base_url: &str, timeout_secs: u64) -> Config {
        Config {
            remote: Some(RemoteConfig {
                base_url: base_url.to_string(),
                timeout_secs,
            }),
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
        assert!(validate_config(&with_remote("https://triage.example.com/api", 30)).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_remote_url() {
        assert!(matches!(
            validate_config(&with_remote("  ", 30)),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            validate_config(&with_remote("ftp://triage.example.com", 30)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_remote_timeout_zero_fails() {
        let err = validate_config(&with_remote("http://localhost:5000/api", 0)).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }
}
