use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompendiumError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's `detail` text when it sent
    /// one, otherwise `Request failed (<status>)`.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Preference error: {0}")]
    Preference(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CompendiumError {
    pub fn api(status: u16, detail: Option<String>) -> Self {
        let message = detail
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed ({status})"));
        CompendiumError::Api { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CompendiumError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 404s and malformed routes both land on the not-found view.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CompendiumError::NotFound(_)
                | CompendiumError::InvalidRoute(_)
                | CompendiumError::Api { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for CompendiumError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return CompendiumError::Internal(format!(
                "invalid response body: {err}"
            ));
        }
        match err.status() {
            Some(status) => CompendiumError::api(status.as_u16(), None),
            None => CompendiumError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompendiumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_server_detail() {
        let err = CompendiumError::api(422, Some("limit too large".into()));
        assert_eq!(err.to_string(), "limit too large");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn api_error_falls_back_to_status_message() {
        let err = CompendiumError::api(500, None);
        assert_eq!(err.to_string(), "Request failed (500)");

        let blank = CompendiumError::api(503, Some("   ".into()));
        assert_eq!(blank.to_string(), "Request failed (503)");
    }

    #[test]
    fn not_found_covers_404_and_bad_routes() {
        assert!(CompendiumError::api(404, None).is_not_found());
        assert!(CompendiumError::InvalidRoute("abc".into()).is_not_found());
        assert!(!CompendiumError::api(500, None).is_not_found());
        assert!(!CompendiumError::Network("reset".into()).is_not_found());
    }
}
