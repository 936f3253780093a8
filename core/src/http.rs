//! HTTP transport seam for the host-does-IO pattern.
//!
//! # Design
//! The core describes requests and responses as plain data and never opens a
//! socket itself. Hosts implement [`Transport`] with whatever HTTP stack they
//! already carry (the integration tests use ureq); the workflow layer stays
//! deterministic and testable with a scripted transport.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored,
//! logged, and compared without lifetime concerns.

use std::fmt;

use crate::error::ClientError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PostClient::build_*` methods. `url` is absolute and already
/// carries any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `PostClient::parse_*` methods for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Connection-level failure reported by a [`Transport`].
///
/// Non-2xx statuses are not transport errors; they come back as an
/// [`HttpResponse`] and are interpreted by the `parse_*` methods.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportError {}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Transport(err.0)
    }
}

/// Executes one HTTP round trip on behalf of the core.
///
/// Implementations are expected to be at-most-once: no retries, no
/// cancellation of earlier requests.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
