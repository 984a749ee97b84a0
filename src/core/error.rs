//! Server startup errors

/// Invalid value in an environment variable
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0/yes/no/on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be one of fastest, default, best; got {value:?}")]
    InvalidCompressionLevel { var: &'static str, value: String },
}

/// Anything that can stop the server from starting or keep it from serving
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load Leptos configuration: {0}")]
    Leptos(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidBool {
            var: "AIME_COMPRESSION",
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "AIME_COMPRESSION must be a boolean (true/false/1/0/yes/no/on/off), got \"maybe\""
        );
    }

    #[test]
    fn test_server_error_wraps_config() {
        let err: ServerError = ConfigError::InvalidCompressionLevel {
            var: "AIME_COMPRESSION_LEVEL",
            value: "max".to_string(),
        }
        .into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }

    #[test]
    fn test_server_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ServerError = io.into();
        assert_eq!(err.to_string(), "I/O error: port taken");
    }
}
