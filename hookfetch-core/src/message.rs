//! Message trait for values flowing through a pipeline.

/// A marker trait for values handed from one interceptor to the next.
///
/// Messages must be `Send + Sync + 'static` so a pipeline can be driven from
/// any task. Every type meeting those bounds is a message.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Values passed through interceptors must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Message for T {}
