//! The native request primitive.
//!
//! A [`Transport`] is whatever actually performs the request. hookfetch never
//! looks inside it; it only calls `fetch` between the request and response
//! pipelines. [`Fetch`](crate::fetch::Fetch) implements this same trait, which
//! is what lets a wrapped transport stand in for the native one.

use crate::exchange::{RequestInit, Response};
use futures::future::BoxFuture;
use hookfetch_core::BoxError;
use std::{future::Future, sync::Arc};

/// An asynchronous `(target, options) -> response` primitive.
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch, use [`DynTransport`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Transport`",
    label = "missing `Transport` implementation",
    note = "Transports must implement `fetch(target, init)`; closures can be adapted with `transport_fn`."
)]
pub trait Transport: Send + Sync + 'static {
    /// Performs the request.
    fn fetch(
        &self,
        target: String,
        init: RequestInit,
    ) -> impl Future<Output = Result<Response, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Transport`].
pub trait DynTransport: Send + Sync + 'static {
    /// Performs the request (dynamic dispatch version).
    fn fetch_dyn(&self, target: String, init: RequestInit)
    -> BoxFuture<'_, Result<Response, BoxError>>;
}

// Blanket implementation: Any type implementing Transport implements DynTransport automatically.
impl<T: Transport> DynTransport for T {
    fn fetch_dyn(
        &self,
        target: String,
        init: RequestInit,
    ) -> BoxFuture<'_, Result<Response, BoxError>> {
        Box::pin(self.fetch(target, init))
    }
}

// Allow Arc<dyn DynTransport> to be used where Transport is expected.
impl Transport for Arc<dyn DynTransport> {
    async fn fetch(&self, target: String, init: RequestInit) -> Result<Response, BoxError> {
        (**self).fetch_dyn(target, init).await
    }
}

/// A [`Transport`] backed by a closure. See [`transport_fn`].
pub struct TransportFn<F> {
    f: F,
}

/// Adapts an async closure into a [`Transport`].
///
/// # Example
///
/// ```rust
/// use hookfetch_std::{Response, hookfetch_core::BoxError, transport_fn};
///
/// let transport = transport_fn(|_target, _init| async move {
///     Ok::<_, BoxError>(Response::new(200, "OK"))
/// });
/// ```
pub fn transport_fn<F, Fut>(f: F) -> TransportFn<F>
where
    F: Fn(String, RequestInit) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send,
{
    TransportFn { f }
}

impl<F, Fut> Transport for TransportFn<F>
where
    F: Fn(String, RequestInit) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send,
{
    fn fetch(
        &self,
        target: String,
        init: RequestInit,
    ) -> impl Future<Output = Result<Response, BoxError>> + Send {
        (self.f)(target, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closure_transport() {
        let transport = transport_fn(|target: String, init: RequestInit| async move {
            Ok(Response::new(200, "OK")
                .with_header("x-target", target)
                .with_header("x-method", init.method.unwrap_or_default()))
        });

        let response = transport
            .fetch("/ping".into(), RequestInit::new().with_method("HEAD"))
            .await
            .unwrap();

        assert_eq!(response.headers["x-target"], "/ping");
        assert_eq!(response.headers["x-method"], "HEAD");
    }

    #[tokio::test]
    async fn test_dyn_transport() {
        let transport: Arc<dyn DynTransport> = Arc::new(transport_fn(|_target, _init| async {
            Err::<Response, BoxError>("offline".into())
        }));

        let err = transport
            .fetch("/".into(), RequestInit::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }
}
