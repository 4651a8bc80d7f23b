//! Weather lookup error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// A catalog or code-table lookup missed.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Transport failure or a non-2xx status.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// User-friendly error message for display in place of the report.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "The selected location is not available. Check your settings.",
            Self::InvalidCoordinates { .. } => "Latitude or longitude is out of range. Check your settings.",
            Self::InvalidEndpoint { .. } => "A weather API address is invalid. Check your settings.",
            Self::Network(e) if e.is_timeout() => "The weather service timed out. Please try again.",
            Self::Network(_) => "Unable to reach the weather service. Check your connection.",
            Self::Parse(_) => "The weather service returned an unexpected response.",
        }
    }

    /// Whether the host may reasonably retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = WeatherError::not_found("city", "999999");
        assert_eq!(err.to_string(), "city not found: 999999");
    }

    #[test]
    fn test_user_messages() {
        assert!(WeatherError::parse("x").user_message().contains("unexpected"));
        assert!(WeatherError::not_found("office", "1")
            .user_message()
            .contains("settings"));
        let err = WeatherError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.user_message().contains("Latitude"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(!WeatherError::parse("bad").is_retryable());
        assert!(!WeatherError::not_found("city", "1").is_retryable());
    }
}
