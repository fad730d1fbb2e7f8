//! Error types for the Gemini annotation client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The response carried no candidate text to parse.
    #[error("empty response from model")]
    EmptyResponse,

    /// The candidate text was not the expected JSON object.
    #[error("failed to parse model output: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnotatorError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): quota exceeded");

        assert_eq!(
            AnnotatorError::EmptyResponse.to_string(),
            "empty response from model"
        );
    }
}
