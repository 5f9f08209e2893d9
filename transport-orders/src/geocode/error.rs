//! Geocoding error types.

/// Errors from the geocoding client and retry protocol.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status code
    #[error("geocoding API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Response body, truncated, for diagnostics.
        body: Option<String>,
    },

    /// Quota still exhausted after the retry ceiling
    #[error("rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "geocoding API error 500: Internal Server Error"
        );

        let err = GeocodeError::RateLimited { attempts: 6 };
        assert_eq!(err.to_string(), "rate limited after 6 attempts");

        let err = GeocodeError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
