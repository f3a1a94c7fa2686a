use std::fmt;
use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

#[derive(Debug)]
pub enum Error {
    Config(String),
    SheetIo(std::io::Error),
    SheetFormat(serde_json::Error),
    InvalidRecord(serde_json::Error),
    UnknownAction(String),
    UnknownTier(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::SheetIo(e) => write!(f, "Failed to read prize sheet: {}", e),
            Error::SheetFormat(e) => write!(f, "Malformed prize sheet: {}", e),
            Error::InvalidRecord(e) => write!(f, "Invalid record: {}", e),
            Error::UnknownAction(action) => write!(f, "Unknown action: {}", action),
            Error::UnknownTier(tier) => write!(f, "Unknown tier: {}", tier),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::SheetIo(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SheetFormat(err)
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidRecord(_) | Error::UnknownAction(_) | Error::UnknownTier(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({ "error": self.to_string() });
        let mut response = Response::new(Body::from(body.to_string()));
        *response.status_mut() = status;
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/json"),
        );
        response
    }
}
