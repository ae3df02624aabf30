//! Configuration validation.

use super::Config;
use crate::domain::FixtureError;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<(), FixtureError> {
    // Path will be created if it doesn't exist, so just check it's valid
    if config.log_path.to_string_lossy().contains('\0') {
        return Err(FixtureError::Config(
            "Invalid log_path: contains null character".to_string(),
        ));
    }

    if config.name_max_len == 0 {
        return Err(FixtureError::Config(
            "name_max_len must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_name_max_len_is_rejected() {
        let config = Config {
            name_max_len: 0,
            ..Config::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("name_max_len"));
    }

    #[test]
    fn test_null_in_log_path_is_rejected() {
        let config = Config {
            log_path: PathBuf::from("logs\0dir"),
            ..Config::default()
        };
        assert!(matches!(validate(&config), Err(FixtureError::Config(_))));
    }
}
