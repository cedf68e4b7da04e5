use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

/// JSON body of every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error types for the pricing service.
/// Request-level errors become a 4xx with a JSON body; startup errors
/// (config, bind) terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum PricerError {
    #[error("validation error: {message}")]
    Validation { status: StatusCode, message: String },

    #[error("domain error: {0}")]
    Domain(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl PricerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for PricerError {
    fn from(e: JsonRejection) -> Self {
        PricerError::Validation {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<std::io::Error> for PricerError {
    fn from(e: std::io::Error) -> Self {
        PricerError::Io(e.to_string())
    }
}

impl IntoResponse for PricerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "request rejected: {self}");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub type PricerResult<T> = Result<T, PricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_maps_to_422() {
        let e = PricerError::Domain("strike must be positive".into());
        assert_eq!(e.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.to_string(), "domain error: strike must be positive");
    }

    #[test]
    fn test_validation_keeps_status() {
        let e = PricerError::Validation {
            status: StatusCode::BAD_REQUEST,
            message: "bad json".into(),
        };
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let e: PricerError = io.into();
        assert!(matches!(e, PricerError::Io(_)));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
