//! Values exchanged with the transport and passed to interceptors.

use bytes::Bytes;
use std::{collections::BTreeMap, fmt, sync::Arc};

/// Options for one outgoing request.
///
/// Every field is optional so that `RequestInit::default()` stands for "no
/// options given". The framework never validates these values; it only hands
/// them from interceptor to interceptor and finally to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInit {
    /// HTTP method, `None` meaning the transport's default.
    pub method: Option<String>,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Request body.
    pub body: Option<Bytes>,
}

impl RequestInit {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A response as produced by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code.
    pub status: u16,
    /// Reason phrase.
    pub status_text: String,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl Response {
    /// A response with the given status line and no headers or body.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// The uniform shape handed to error interceptors.
///
/// Built once per failed call. `status` and `status_text` are `None` when the
/// transport itself failed, in which case `cause` holds its error.
#[derive(Debug, Clone)]
pub struct NormalizedError {
    /// The call's target.
    pub url: String,
    /// Status of the unsuccessful response.
    pub status: Option<u16>,
    /// Reason phrase of the unsuccessful response.
    pub status_text: Option<String>,
    /// Request options as produced by the request pipeline.
    pub request: RequestInit,
    /// Transport error, if the transport failed.
    pub cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl NormalizedError {
    /// A failure caused by a response that was not successful.
    pub fn from_response(url: impl Into<String>, request: RequestInit, response: &Response) -> Self {
        Self {
            url: url.into(),
            status: Some(response.status),
            status_text: Some(response.status_text.clone()),
            request,
            cause: None,
        }
    }

    /// A failure of the transport itself.
    pub fn from_transport(
        url: impl Into<String>,
        request: RequestInit,
        cause: hookfetch_core::BoxError,
    ) -> Self {
        Self {
            url: url.into(),
            status: None,
            status_text: None,
            request,
            cause: Some(Arc::from(cause)),
        }
    }

    /// Whether no response was received at all.
    pub fn is_transport_failure(&self) -> bool {
        self.status.is_none()
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.status_text.as_deref()) {
            (Some(status), Some(text)) if !text.is_empty() => {
                write!(f, "request to {} failed with status {} {}", self.url, status, text)
            }
            (Some(status), _) => write!(f, "request to {} failed with status {}", self.url, status),
            (None, _) => match &self.cause {
                Some(cause) => write!(f, "request to {} failed: {}", self.url, cause),
                None => write!(f, "request to {} failed", self.url),
            },
        }
    }
}

impl std::error::Error for NormalizedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
