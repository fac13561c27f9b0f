use std::time::Duration;

use thiserror::Error;

/// Failure talking to one of the external APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transient failure: {0}")]
    Transient(String),
    #[error("rate limited ({reason}), cooling down for {cool_down:?}")]
    RateLimited { reason: String, cool_down: Duration },
    #[error("report limit reached on the server")]
    ReportLimit,
    #[error("authorization rejected ({code}): {message}")]
    Unauthorized { code: i64, message: String },
    #[error("api error {code}: {message}")]
    Rejected { code: i64, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Errors after which the whole run has to stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transient(_) | ApiError::RateLimited { .. } | ApiError::Malformed(_) => true,
            ApiError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.is_request()
                    || e.is_body()
                    || e.is_decode()
                    || e.status().is_some_and(|s| s.is_server_error() || s.as_u16() == 429)
            }
            ApiError::ReportLimit | ApiError::Unauthorized { .. } | ApiError::Rejected { .. } => {
                false
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("fatal api error, aborting run: {0}")]
    Fatal(#[source] ApiError),
    #[error("failed to write checkpoint: {0}")]
    Checkpoint(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ApiError;

    #[test]
    fn only_authorization_is_fatal() {
        let unauthorized = ApiError::Unauthorized {
            code: 53,
            message: "bad token".to_string(),
        };
        assert!(unauthorized.is_fatal());
        assert!(!unauthorized.is_retryable());

        let limited = ApiError::RateLimited {
            reason: "low points".to_string(),
            cool_down: Duration::from_secs(60),
        };
        assert!(!limited.is_fatal());
        assert!(limited.is_retryable());

        let rejected = ApiError::Rejected {
            code: 71,
            message: "bad param".to_string(),
        };
        assert!(!rejected.is_fatal());
        assert!(!rejected.is_retryable());
    }
}
