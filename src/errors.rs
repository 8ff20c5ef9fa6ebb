use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while laying out and rendering a kumiko grid
#[derive(Error, Debug)]
pub enum KumikoError {
    /// Side length was zero, negative or not a number
    #[error("Invalid geometry: side length must be positive, got {side_length}")]
    InvalidGeometry { side_length: f64 },

    /// A character binding names a motif that is not registered
    #[error("Unknown motif type '{motif}' for character '{symbol}'")]
    UnknownMotifType {
        symbol: Arc<String>,
        motif: Arc<String>,
    },

    /// Grid content carries no usable rows
    #[error("Malformed grid: {0}")]
    MalformedGrid(Arc<String>),

    /// Repetition factors must both be at least one
    #[error("Invalid repeat factors: {repeat_x}x{repeat_y} (both must be at least 1)")]
    InvalidRepeat { repeat_x: usize, repeat_y: usize },

    /// Configuration text could not be decoded
    #[error("Configuration parse error: {0}")]
    ConfigParse(Arc<String>),

    /// JSON grid content could not be decoded
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result with KumikoError
pub type Result<T> = std::result::Result<T, KumikoError>;

impl From<toml::de::Error> for KumikoError {
    fn from(error: toml::de::Error) -> Self {
        KumikoError::config_parse(error.to_string())
    }
}

impl KumikoError {
    /// Create an unknown motif error for a character binding
    pub fn unknown_motif(symbol: &str, motif: &str) -> Self {
        KumikoError::UnknownMotifType {
            symbol: Arc::new(symbol.to_string()),
            motif: Arc::new(motif.to_string()),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        KumikoError::ConfigParse(Arc::new(message.into()))
    }

    /// Create a malformed grid error
    pub fn malformed_grid(message: impl Into<String>) -> Self {
        KumikoError::MalformedGrid(Arc::new(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_motif_message_names_symbol_and_motif() {
        let err = KumikoError::unknown_motif("X", "hexagon");
        let msg = err.to_string();
        assert!(msg.contains("'X'"));
        assert!(msg.contains("'hexagon'"));
    }

    #[test]
    fn test_invalid_geometry_message() {
        let err = KumikoError::InvalidGeometry { side_length: -2.0 };
        assert!(err.to_string().contains("-2"));
    }
}
