//! Registry groups: the request, response and error registries bundled.
//!
//! The global store and every instance are structurally the same
//! [`InterceptorGroup`]. [`create_interceptors`] builds an instance from an
//! [`InterceptorSet`], and [`InterceptorGroup::combine`] merges two groups.

use crate::{
    exchange::{NormalizedError, RequestInit, Response},
    registry::InterceptorRegistry,
};
use hookfetch_core::{Message, Next, SharedInterceptor};
use std::{fmt, sync::Arc};

/// Three independent registries, one per concern.
#[derive(Debug, Default)]
pub struct InterceptorGroup {
    request: InterceptorRegistry<RequestInit>,
    response: InterceptorRegistry<Response>,
    error: InterceptorRegistry<NormalizedError>,
}

impl InterceptorGroup {
    /// A group with three empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interceptors for outgoing request options.
    pub fn request(&self) -> &InterceptorRegistry<RequestInit> {
        &self.request
    }

    /// Interceptors for successful responses.
    pub fn response(&self) -> &InterceptorRegistry<Response> {
        &self.response
    }

    /// Interceptors for normalized failures.
    pub fn error(&self) -> &InterceptorRegistry<NormalizedError> {
        &self.error
    }

    /// Whether any of the three registries has a handler.
    pub fn has_interceptors(&self) -> bool {
        self.request.has_interceptors()
            || self.response.has_interceptors()
            || self.error.has_interceptors()
    }

    /// Clear all three registries.
    pub fn clear(&self) {
        self.request.clear();
        self.response.clear();
        self.error.clear();
    }

    /// Merge `inner` after `self`, per concern.
    ///
    /// The result is a fresh group holding a snapshot of both sources:
    /// `self`'s handlers first, then `inner`'s. Neither source is modified,
    /// and later registrations on either are not reflected.
    pub fn combine(&self, inner: &InterceptorGroup) -> InterceptorGroup {
        InterceptorGroup {
            request: merge(&self.request, &inner.request),
            response: merge(&self.response, &inner.response),
            error: merge(&self.error, &inner.error),
        }
    }
}

fn merge<T: Message>(
    outer: &InterceptorRegistry<T>,
    inner: &InterceptorRegistry<T>,
) -> InterceptorRegistry<T> {
    let mut handlers = outer.get().to_vec();
    let inner = inner.get();
    if !inner.is_empty() {
        handlers.extend(inner.iter().cloned());
    }
    InterceptorRegistry::from_handlers(handlers)
}

/// Optional handlers for building an instance group.
///
/// # Example
/// ```ignore
/// let group = create_interceptors(
///     InterceptorSet::new()
///         .on_request(|init, next| next.proceed(init.with_header("x-client", "demo")))
///         .on_error(|err, next| next.proceed(err)),
/// );
/// ```
#[derive(Clone, Default)]
pub struct InterceptorSet {
    /// Request handler.
    pub request: Option<SharedInterceptor<RequestInit>>,
    /// Response handler.
    pub response: Option<SharedInterceptor<Response>>,
    /// Error handler.
    pub error: Option<SharedInterceptor<NormalizedError>>,
}

impl InterceptorSet {
    /// No handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request handler.
    pub fn on_request<F>(mut self, handler: F) -> Self
    where
        F: Fn(RequestInit, Next<RequestInit>) + Send + Sync + 'static,
    {
        self.request = Some(Arc::new(handler));
        self
    }

    /// Set the response handler.
    pub fn on_response<F>(mut self, handler: F) -> Self
    where
        F: Fn(Response, Next<Response>) + Send + Sync + 'static,
    {
        self.response = Some(Arc::new(handler));
        self
    }

    /// Set the error handler.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(NormalizedError, Next<NormalizedError>) + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for InterceptorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorSet")
            .field("request", &self.request.is_some())
            .field("response", &self.response.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

/// Build a fresh, isolated group from `set`.
///
/// Missing handlers leave their registry empty, which compiles to a
/// pass-through.
pub fn create_interceptors(set: InterceptorSet) -> InterceptorGroup {
    let group = InterceptorGroup::new();
    group.request.add(set.request);
    group.response.add(set.response);
    group.error.add(set.error);
    group
}

impl From<InterceptorSet> for InterceptorGroup {
    fn from(set: InterceptorSet) -> Self {
        create_interceptors(set)
    }
}
