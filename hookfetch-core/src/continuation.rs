//! # Continuation Adapter
//!
//! Interceptors are written callback style. They receive a value and a
//! [`Next`] continuation, and they settle the current step by calling either
//! [`Next::proceed`] with the (possibly replaced) value or [`Next::reject`]
//! with an error.
//!
//! [`adapt`] converts such a handler into a [`Step`]: a function from a value
//! to a future of `Result<T, BoxError>`. The pipeline composer only ever sees
//! steps, never raw handlers.
//!
//! # Settling Contract
//!
//! - `Next` is consumed by `proceed`/`reject`, so a step settles at most once.
//! - `Next` may be moved elsewhere (another task, a timer callback) and settled
//!   later; the step simply stays pending until then.
//! - A handler that never settles leaves its step pending forever. Dropping
//!   `Next` unsettled is treated the same way, and with the `tracing` feature
//!   it is reported at `warn` level.

use crate::{error::BoxError, message::Message};
use futures::{
    FutureExt,
    channel::oneshot,
    future::{self, BoxFuture},
};
use std::{fmt, sync::Arc};

/// A callback-style handler for one kind of value.
///
/// Closures of shape `Fn(T, Next<T>)` implement this trait automatically.
///
/// # Example
///
/// ```rust
/// use hookfetch_core::{Interceptor, Next};
///
/// struct Double;
///
/// impl Interceptor<u32> for Double {
///     fn intercept(&self, value: u32, next: Next<u32>) {
///         next.proceed(value * 2);
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Interceptor<{T}>`",
    label = "missing `Interceptor` implementation",
    note = "Interceptors must implement `intercept` for the value type `{T}`, or be a closure `Fn({T}, Next<{T}>)`."
)]
pub trait Interceptor<T: Message>: Send + Sync + 'static {
    /// Handles `value` and settles `next` exactly once, now or later.
    fn intercept(&self, value: T, next: Next<T>);
}

impl<T, F> Interceptor<T> for F
where
    T: Message,
    F: Fn(T, Next<T>) + Send + Sync + 'static,
{
    fn intercept(&self, value: T, next: Next<T>) {
        (self)(value, next)
    }
}

/// A type-erased, shareable interceptor.
///
/// Registries store handlers in this form and identify them by `Arc` pointer,
/// so the same `SharedInterceptor` registered twice runs twice and is removed
/// together.
pub type SharedInterceptor<T> = Arc<dyn Interceptor<T>>;

/// Wraps a closure into a [`SharedInterceptor`].
///
/// Keep a clone of the returned `Arc` if you want to register the exact same
/// handler more than once.
pub fn interceptor_fn<T, F>(handler: F) -> SharedInterceptor<T>
where
    T: Message,
    F: Fn(T, Next<T>) + Send + Sync + 'static,
{
    Arc::new(handler)
}

/// An interceptor that proceeds with its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<T: Message> Interceptor<T> for PassThrough {
    fn intercept(&self, value: T, next: Next<T>) {
        next.proceed(value);
    }
}

/// The continuation handed to an interceptor.
pub struct Next<T> {
    tx: oneshot::Sender<Result<T, BoxError>>,
}

impl<T> Next<T> {
    /// Continues the pipeline with `value`.
    pub fn proceed(self, value: T) {
        self.settle(Ok(value));
    }

    /// Fails the pipeline with `error`. Later steps do not run.
    pub fn reject(self, error: impl Into<BoxError>) {
        self.settle(Err(error.into()));
    }

    /// Settles with an already computed outcome.
    pub fn settle(self, outcome: Result<T, BoxError>) {
        // Nobody is waiting if the step future was dropped.
        let _ = self.tx.send(outcome);
    }
}

impl<T> fmt::Debug for Next<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("waiting", &!self.tx.is_canceled())
            .finish()
    }
}

/// An adapted interceptor: value in, awaitable result out.
pub struct Step<T: Message> {
    handler: SharedInterceptor<T>,
}

impl<T: Message> Step<T> {
    /// A step that resolves to its input.
    pub fn identity() -> Self {
        adapt(Arc::new(PassThrough))
    }

    /// Invokes the handler with `value` and returns a future of its outcome.
    ///
    /// The handler runs before this returns; the future only waits for the
    /// continuation to be settled.
    pub fn call(&self, value: T) -> BoxFuture<'static, Result<T, BoxError>> {
        let (tx, rx) = oneshot::channel();
        self.handler.intercept(value, Next { tx });

        async move {
            match rx.await {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("interceptor dropped its continuation without settling");
                    future::pending().await
                }
            }
        }
        .boxed()
    }
}

impl<T: Message> Clone for Step<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

/// Turns a handler into a [`Step`].
pub fn adapt<T: Message>(handler: SharedInterceptor<T>) -> Step<T> {
    Step { handler }
}
