//! Tower integration.
//!
//! [`Fetch`] implements `tower::Service<FetchRequest>`, so a wrapped
//! transport can sit underneath tower middleware or be driven by anything
//! that speaks `Service`.
//!
//! ```rust,ignore
//! use hookfetch::{Fetch, FetchRequest};
//! use tower::ServiceExt;
//!
//! let response = Fetch::new(native)
//!     .oneshot(FetchRequest::new("https://example.test", RequestInit::new()))
//!     .await?;
//! ```

use crate::{
    error::FetchError,
    exchange::{RequestInit, Response},
    fetch::Fetch,
    transport::Transport,
};
use futures::future::BoxFuture;
use std::task::{Context, Poll};

/// The `(target, options)` pair as a single service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Call target.
    pub target: String,
    /// Request options.
    pub init: RequestInit,
}

impl FetchRequest {
    /// Create a request.
    pub fn new(target: impl Into<String>, init: RequestInit) -> Self {
        Self {
            target: target.into(),
            init,
        }
    }
}

impl<T: Transport> tower::Service<FetchRequest> for Fetch<T> {
    type Response = Response;
    type Error = FetchError;
    type Future = BoxFuture<'static, Result<Response, FetchError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness belongs to the transport, which has no such notion here.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: FetchRequest) -> Self::Future {
        let fetch = self.clone();
        Box::pin(async move { Fetch::call(&fetch, request.target, request.init).await })
    }
}
