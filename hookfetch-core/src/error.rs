//! Error types shared by every hookfetch crate.

/// A boxed error type for dynamic error handling.
///
/// This is what a handler rejects with. Anything convertible into it (string
/// slices, `String`s, concrete error types) can be passed to
/// [`Next::reject`](crate::Next::reject).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
