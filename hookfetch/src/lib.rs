//! # hookfetch - Interceptors Around a Native Fetch
//!
//! `hookfetch` wraps an asynchronous `(target, options) -> response` primitive
//! with three ordered interceptor chains: one for outgoing request options,
//! one for successful responses and one for failures. Interceptors are
//! callback style; each receives a value and a [`Next`] continuation and
//! either proceeds or rejects.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookfetch::{Fetch, RequestInit, Response, transport_fn, use_request};
//!
//! // The native primitive.
//! let native = transport_fn(|target, init| async move { my_http_client(target, init).await });
//!
//! // Global interceptors apply to every `Fetch::new`.
//! let token = use_request(|init, next| next.proceed(init.with_header("x-client", "demo")));
//!
//! let fetch = Fetch::new(native);
//! let response = fetch.call("https://example.test", None).await?;
//!
//! token.unregister();
//! ```
//!
//! ## Instances
//!
//! [`create_interceptors`] builds an isolated group; [`combine_interceptors`]
//! merges it after the global handlers:
//!
//! ```rust,ignore
//! let instance = create_interceptors(InterceptorSet::new().on_error(|err, next| next.proceed(err)));
//! let fetch = Fetch::with_interceptors(native, combine_interceptors(&instance));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hookfetch_core::{
    // Errors
    BoxError,
    // Continuation adapter
    Interceptor,
    // Messages
    Message,
    Next,
    PassThrough,
    // Pipeline composer
    Pipeline,
    SharedInterceptor,
    Step,
    adapt,
    compose,
    interceptor_fn,
};

pub use hookfetch_std::{
    // Errors
    Concern,
    // Transport
    DynTransport,
    // Wrapping
    Fetch,
    FetchError,
    // Registries
    InterceptorGroup,
    InterceptorRegistry,
    InterceptorSet,
    // Exchange values
    NormalizedError,
    RequestInit,
    Response,
    Transport,
    TransportFn,
    Unregister,
    // Global store
    combine_interceptors,
    create_fetch,
    create_interceptors,
    eject_all,
    execute,
    global,
    transport_fn,
    use_error,
    use_request,
    use_response,
};

#[cfg(feature = "tower")]
pub use hookfetch_std::FetchRequest;

/// Standard interceptor implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use hookfetch_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hookfetch_std::testing::*;
}

/// Prelude module - common imports for hookfetch.
///
/// # Usage
///
/// ```rust,ignore
/// use hookfetch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        FetchError,
        // Wrapping
        Fetch,
        // Core traits
        Interceptor,
        // Registries
        InterceptorGroup,
        InterceptorSet,
        Next,
        NormalizedError,
        RequestInit,
        Response,
        Transport,
        Unregister,
    };
}
