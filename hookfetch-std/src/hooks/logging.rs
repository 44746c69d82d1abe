//! Logging interceptor for observing values as they pass.

use hookfetch_core::{Interceptor, Message, Next};
use std::fmt::Debug;

/// An interceptor that logs every value and proceeds with it unchanged.
///
/// Works in any of the three registries. Events are emitted only with the
/// `tracing` feature; without it the interceptor is a pass-through.
///
/// ```rust,ignore
/// hookfetch::global().response().use_interceptor(LoggingInterceptor::new("responses"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingInterceptor {
    name: &'static str,
}

impl LoggingInterceptor {
    /// Create a logging interceptor labelled `name`.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The label attached to each event.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingInterceptor {
    fn default() -> Self {
        Self::new("hookfetch")
    }
}

impl<T: Message + Debug> Interceptor<T> for LoggingInterceptor {
    fn intercept(&self, value: T, next: Next<T>) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(interceptor = %self.name, ?value, "Intercepted value");
        }
        next.proceed(value);
    }
}
