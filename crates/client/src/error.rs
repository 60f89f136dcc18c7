//! Fetch failure taxonomy.

use thiserror::Error;

/// What went wrong talking to the data source.
///
/// Messages are surfaced verbatim in the view with a caller-triggered retry;
/// there is deliberately no richer structure than "which resource failed".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {resource}: status {status}")]
    Status { resource: &'static str, status: u16 },

    /// The response body did not parse as the expected shape.
    #[error("failed to fetch {resource}: invalid response body")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Login was rejected.
    #[error("login failed")]
    LoginFailed,
}

impl FetchError {
    /// The resource this failure belongs to (`"vendors"`, `"reports"`, ...).
    pub fn resource(&self) -> &'static str {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::Decode { resource, .. } => resource,
            FetchError::LoginFailed => "auth",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_name_the_resource() {
        let err = FetchError::Status { resource: "vendors", status: 503 };
        assert_eq!(err.to_string(), "failed to fetch vendors: status 503");
        assert_eq!(err.resource(), "vendors");
    }
}
