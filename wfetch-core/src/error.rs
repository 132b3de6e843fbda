use thiserror::Error;

/// Failure modes of a single fetch, distinguished so callers can decide
/// how to surface each case instead of getting one conflated "it failed".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream API answered with something other than 200.
    /// Carries the numeric status code; 4xx and 5xx are not told apart.
    #[error("upstream returned status {code}")]
    UpstreamStatus { code: u16 },

    /// The request never produced a usable response: DNS failure,
    /// connection refused, broken transfer while reading the body.
    #[error("transport failure talking to the weather API")]
    Transport(#[from] reqwest::Error),

    /// Status was 200 but the body did not decode as JSON.
    #[error("weather API returned a 200 with an invalid JSON body")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code for `UpstreamStatus`, `None` for the other variants.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::UpstreamStatus { code } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_display_contains_code() {
        let err = FetchError::UpstreamStatus { code: 401 };
        assert!(err.to_string().contains("401"));
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn decode_error_has_no_status_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::from(json_err);
        assert_eq!(err.status_code(), None);
    }
}
