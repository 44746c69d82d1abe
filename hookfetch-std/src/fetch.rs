//! The wrapped transport.
//!
//! [`Fetch`] pairs a transport with an interceptor group and is itself a
//! [`Transport`], so it can replace the native primitive anywhere a transport
//! is accepted, including inside another `Fetch`.

use crate::{
    error::FetchError,
    exchange::{RequestInit, Response},
    global::global,
    group::InterceptorGroup,
    orchestrator::execute,
    transport::{DynTransport, Transport},
};
use hookfetch_core::BoxError;
use std::{fmt, sync::Arc};

/// A transport wrapped with an interceptor group.
///
/// # Example
///
/// ```rust,ignore
/// use hookfetch::{Fetch, RequestInit, transport_fn};
///
/// let fetch = Fetch::new(native);
/// let response = fetch.call("https://example.test", RequestInit::new().with_method("POST")).await?;
/// ```
pub struct Fetch<T = Arc<dyn DynTransport>> {
    transport: Arc<T>,
    interceptors: Arc<InterceptorGroup>,
}

impl<T: Transport> Fetch<T> {
    /// Wrap `transport` with the global group.
    pub fn new(transport: T) -> Self {
        Self::with_interceptors(transport, Arc::clone(global()))
    }

    /// Wrap `transport` with `interceptors` (an instance or combined group).
    pub fn with_interceptors(transport: T, interceptors: impl Into<Arc<InterceptorGroup>>) -> Self {
        Self {
            transport: Arc::new(transport),
            interceptors: interceptors.into(),
        }
    }

    /// The group consulted on every call.
    pub fn interceptors(&self) -> &Arc<InterceptorGroup> {
        &self.interceptors
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform a call. Omitted options mean `RequestInit::default()`.
    pub async fn call(
        &self,
        target: impl Into<String>,
        init: impl Into<Option<RequestInit>>,
    ) -> Result<Response, FetchError> {
        let init = init.into().unwrap_or_default();
        execute(&self.interceptors, self.transport.as_ref(), target.into(), init).await
    }
}

/// Wrap `transport`, with the global group when `interceptors` is `None`.
pub fn create_fetch<T: Transport>(
    transport: T,
    interceptors: Option<Arc<InterceptorGroup>>,
) -> Fetch<T> {
    match interceptors {
        Some(group) => Fetch::with_interceptors(transport, group),
        None => Fetch::new(transport),
    }
}

impl<T> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            interceptors: Arc::clone(&self.interceptors),
        }
    }
}

impl<T> fmt::Debug for Fetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetch")
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Transport for Fetch<T> {
    async fn fetch(&self, target: String, init: RequestInit) -> Result<Response, BoxError> {
        self.call(target, init).await.map_err(BoxError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        group::{InterceptorSet, create_interceptors},
        testing::MockTransport,
    };

    #[tokio::test]
    async fn test_default_options() {
        let transport = MockTransport::new();
        let fetch = Fetch::with_interceptors(transport.clone(), InterceptorGroup::new());

        fetch.call("/x", None).await.unwrap();

        assert_eq!(transport.calls()[0].init, RequestInit::default());
    }

    #[tokio::test]
    async fn test_stands_in_for_transport() {
        let inner = create_interceptors(InterceptorSet::new().on_request(|init, next| {
            next.proceed(init.with_header("x-inner", "1"))
        }));
        let outer = create_interceptors(InterceptorSet::new().on_request(|init, next| {
            next.proceed(init.with_header("x-outer", "1"))
        }));
        let transport = MockTransport::new();

        let wrapped = Fetch::with_interceptors(transport.clone(), inner);
        let rewrapped = Fetch::with_interceptors(wrapped, outer);
        rewrapped.call("/nested", RequestInit::new()).await.unwrap();

        let seen = &transport.calls()[0].init;
        assert_eq!(seen.headers.get("x-outer").map(String::as_str), Some("1"));
        assert_eq!(seen.headers.get("x-inner").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_boxed_transport() {
        let transport = MockTransport::new();
        let boxed: Arc<dyn DynTransport> = Arc::new(transport.clone());
        let fetch: Fetch = Fetch::with_interceptors(boxed, InterceptorGroup::new());

        fetch.clone().call("/boxed", None).await.unwrap();

        assert_eq!(transport.call_count(), 1);
    }
}
