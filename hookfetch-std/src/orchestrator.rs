//! Request orchestration.
//!
//! [`execute`] is the whole life of one wrapped call:
//!
//! 1. request pipeline over the options (a rejection ends the call here),
//! 2. the transport,
//! 3. the response pipeline for a successful response, or
//! 4. the error pipeline over a [`NormalizedError`] for a transport failure or
//!    an unsuccessful response. This path always fails the call.

use crate::{
    error::{Concern, FetchError},
    exchange::{NormalizedError, RequestInit, Response},
    group::InterceptorGroup,
    transport::Transport,
};
use hookfetch_core::BoxError;

/// Run one call through `group` and `transport`.
///
/// Each pipeline is compiled when it is reached, so the call observes the
/// registries as they are at that moment. With the `tracing` feature the call
/// runs inside a `fetch` span.
pub async fn execute<T: Transport>(
    group: &InterceptorGroup,
    transport: &T,
    target: String,
    init: RequestInit,
) -> Result<Response, FetchError> {
    #[cfg(feature = "tracing")]
    let call = {
        use tracing::Instrument;

        let span = tracing::debug_span!("fetch", url = %target);
        run(group, transport, target, init).instrument(span)
    };
    #[cfg(not(feature = "tracing"))]
    let call = run(group, transport, target, init);

    call.await
}

async fn run<T: Transport>(
    group: &InterceptorGroup,
    transport: &T,
    target: String,
    init: RequestInit,
) -> Result<Response, FetchError> {
    let request = group
        .request()
        .compile()
        .run(init)
        .await
        .map_err(|source| rejected(Concern::Request, source))?;
    #[cfg(feature = "tracing")]
    tracing::trace!("request pipeline resolved");

    let failure = match transport.fetch(target.clone(), request.clone()).await {
        Ok(response) if response.ok() || response.status == 200 => {
            #[cfg(feature = "tracing")]
            tracing::trace!(status = response.status, "transport resolved");
            return group
                .response()
                .compile()
                .run(response)
                .await
                .map_err(|source| rejected(Concern::Response, source));
        }
        Ok(response) => NormalizedError::from_response(target, request, &response),
        Err(cause) => NormalizedError::from_transport(target, request, cause),
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(status = ?failure.status, "call failed, running error pipeline");

    match group.error().compile().run(failure).await {
        Ok(normalized) => Err(FetchError::Failed(Box::new(normalized))),
        Err(source) => Err(rejected(Concern::Error, source)),
    }
}

fn rejected(stage: Concern, source: BoxError) -> FetchError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%stage, error = %source, "interceptor rejected");
    FetchError::Rejected { stage, source }
}
