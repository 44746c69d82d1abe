//! # hookfetch-core
//!
//! Core primitives for the hookfetch interceptor framework.
//!
//! This crate has minimal dependencies and knows nothing about HTTP. It only
//! describes how a callback-style handler becomes an awaitable step and how
//! steps are chained into a pipeline.
//!
//! # Two Layers
//!
//! ## Layer 1: Continuation Adapter ([`Interceptor`], [`Next`], [`Step`])
//!
//! Handlers are written in callback style: they receive a value together with
//! a [`Next`] continuation and settle by calling [`Next::proceed`] or
//! [`Next::reject`]. [`adapt`] converts a handler into a [`Step`], a uniform
//! "value in, result or failure out" unit.
//!
//! ## Layer 2: Pipeline Composer ([`Pipeline`])
//!
//! [`compose`] chains steps left to right. Running a pipeline awaits each step
//! in turn, feeding its output to the next one, and stops at the first
//! failure. An empty pipeline is a pass-through.
//!
//! # Error Types
//!
//! - [`BoxError`] - the value a handler rejects with

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod continuation;
mod error;
mod message;
mod pipeline;

// Re-exports
pub use continuation::{Interceptor, Next, PassThrough, SharedInterceptor, Step, adapt, interceptor_fn};
pub use error::BoxError;
pub use message::Message;
pub use pipeline::{Pipeline, compose};
