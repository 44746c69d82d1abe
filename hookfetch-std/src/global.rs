//! The process-wide interceptor store.
//!
//! One [`InterceptorGroup`] is created the first time anything touches the
//! store and lives for the rest of the process. [`eject_all`] is its only
//! teardown. Everything else in the crate receives groups explicitly; only the
//! functions below and [`Fetch::new`](crate::fetch::Fetch::new) reach for this
//! one.

use crate::{
    exchange::{NormalizedError, RequestInit, Response},
    group::InterceptorGroup,
    registry::Unregister,
};
use hookfetch_core::Next;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Arc<InterceptorGroup>> =
    LazyLock::new(|| Arc::new(InterceptorGroup::new()));

/// The global group.
pub fn global() -> &'static Arc<InterceptorGroup> {
    &GLOBAL
}

/// Register a global request interceptor.
pub fn use_request<F>(handler: F) -> Unregister
where
    F: Fn(RequestInit, Next<RequestInit>) + Send + Sync + 'static,
{
    GLOBAL.request().use_fn(handler)
}

/// Register a global response interceptor.
pub fn use_response<F>(handler: F) -> Unregister
where
    F: Fn(Response, Next<Response>) + Send + Sync + 'static,
{
    GLOBAL.response().use_fn(handler)
}

/// Register a global error interceptor.
pub fn use_error<F>(handler: F) -> Unregister
where
    F: Fn(NormalizedError, Next<NormalizedError>) + Send + Sync + 'static,
{
    GLOBAL.error().use_fn(handler)
}

/// Remove every global interceptor, in all three concerns.
pub fn eject_all() {
    GLOBAL.clear();
}

/// Merge the global group with `instance`, global handlers first.
///
/// See [`InterceptorGroup::combine`].
pub fn combine_interceptors(instance: &InterceptorGroup) -> InterceptorGroup {
    GLOBAL.combine(instance)
}
