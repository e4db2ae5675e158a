use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Coarse failure category, used by the UI to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreachable host, timeout, reset, or an unexpected HTTP status
    Network,
    /// Response body missing expected fields or malformed
    Decode,
    /// The requested record does not exist upstream
    NotFound,
    /// Local setup failure (worker pool)
    Internal,
}

impl ErrorKind {
    /// Short user-facing description
    pub fn describe(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network error",
            ErrorKind::Decode => "unexpected response from the API",
            ErrorKind::NotFound => "not found",
            ErrorKind::Internal => "internal error",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no record at {url}")]
    NotFound { url: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate record id {id} (`{first}` and `{second}`)")]
    DuplicateRecord {
        id: u32,
        first: String,
        second: String,
    },

    #[error("search name is empty")]
    EmptyName,

    #[error("failed to build fetch pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl ApiError {
    pub fn network(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ApiError::Network {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } | ApiError::Status { .. } => ErrorKind::Network,
            ApiError::Decode { .. } | ApiError::DuplicateRecord { .. } => ErrorKind::Decode,
            ApiError::NotFound { .. } | ApiError::EmptyName => ErrorKind::NotFound,
            ApiError::WorkerPool(_) => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_network_kind() {
        let err = ApiError::Status {
            url: "https://example.test/pokemon/1".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        insta::assert_snapshot!(err.to_string(), @"https://example.test/pokemon/1 returned HTTP 503");
    }

    #[test]
    fn test_duplicate_is_decode_kind() {
        let err = ApiError::DuplicateRecord {
            id: 25,
            first: "pikachu".to_string(),
            second: "pikachu-rock-star".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        insta::assert_snapshot!(err.to_string(), @"duplicate record id 25 (`pikachu` and `pikachu-rock-star`)");
    }

    #[test]
    fn test_network_source_is_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::network("http://localhost:1/pokemon", io);
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
