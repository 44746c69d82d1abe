//! # hookfetch-std
//!
//! Interceptor registries and the fetch wrapper for the hookfetch framework.
//!
//! This crate provides:
//! - **Registries**: [`InterceptorRegistry`], [`InterceptorGroup`], [`Unregister`]
//! - **Global store**: [`global`], [`use_request`], [`use_response`], [`use_error`], [`eject_all`]
//! - **Instances**: [`InterceptorSet`], [`create_interceptors`], [`combine_interceptors`]
//! - **Wrapping**: [`Transport`], [`Fetch`], [`create_fetch`], [`execute`]
//! - **Standard hooks**: [`hooks::LoggingInterceptor`]
//! - **Testing**: [`testing::MockTransport`], [`testing::RecordingInterceptor`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core crate
pub use hookfetch_core;

// Modules
pub mod error;
pub mod exchange;
pub mod fetch;
pub mod global;
pub mod group;
pub mod hooks;
pub mod orchestrator;
pub mod registry;
#[cfg(feature = "tower")]
pub mod service;
pub mod testing;
pub mod transport;

pub use error::{Concern, FetchError};
pub use exchange::{NormalizedError, RequestInit, Response};
pub use fetch::{Fetch, create_fetch};
pub use global::{combine_interceptors, eject_all, global, use_error, use_request, use_response};
pub use group::{InterceptorGroup, InterceptorSet, create_interceptors};
pub use orchestrator::execute;
pub use registry::{InterceptorRegistry, Unregister};
#[cfg(feature = "tower")]
pub use service::FetchRequest;
pub use transport::{DynTransport, Transport, TransportFn, transport_fn};
