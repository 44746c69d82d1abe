//! Testing utilities for hookfetch.
//!
//! # Features
//!
//! - [`MockTransport`]: a scripted transport that records every call
//! - [`RecordingInterceptor`]: an interceptor that records every value it sees

use crate::{
    exchange::{RequestInit, Response},
    transport::Transport,
};
use hookfetch_core::{BoxError, Interceptor, Message, Next};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

// ============================================================================
// Mock Transport
// ============================================================================

/// One call received by a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Target passed to the transport.
    pub target: String,
    /// Options passed to the transport.
    pub init: RequestInit,
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(Response),
    Fail(String),
}

#[derive(Debug)]
struct MockState {
    queued: VecDeque<Reply>,
    fallback: Reply,
    calls: Vec<RecordedCall>,
}

/// A transport that answers from a script.
///
/// Queued replies are used first, one per call; once the queue is empty every
/// call gets the fallback reply (`200 OK` unless configured otherwise).
/// Clones share the same script and call log.
///
/// # Example
///
/// ```rust,ignore
/// let transport = MockTransport::new();
/// transport.push_response(Response::new(404, "Not Found"));
///
/// let fetch = Fetch::with_interceptors(transport.clone(), InterceptorGroup::new());
/// assert!(fetch.call("/missing", None).await.is_err());
/// assert_eq!(transport.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// A transport answering `200 OK` to everything.
    pub fn new() -> Self {
        Self::with_fallback(Reply::Respond(Response::new(200, "OK")))
    }

    /// A transport answering `response` to everything.
    pub fn responding(response: Response) -> Self {
        Self::with_fallback(Reply::Respond(response))
    }

    /// A transport failing every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_fallback(Reply::Fail(message.into()))
    }

    fn with_fallback(fallback: Reply) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                queued: VecDeque::new(),
                fallback,
                calls: Vec::new(),
            })),
        }
    }

    /// Queue a response for the next unanswered call.
    pub fn push_response(&self, response: Response) -> &Self {
        self.lock().queued.push_back(Reply::Respond(response));
        self
    }

    /// Queue a failure for the next unanswered call.
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        self.lock().queued.push_back(Reply::Fail(message.into()));
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    async fn fetch(&self, target: String, init: RequestInit) -> Result<Response, BoxError> {
        let reply = {
            let mut state = self.lock();
            state.calls.push(RecordedCall { target, init });
            state
                .queued
                .pop_front()
                .unwrap_or_else(|| state.fallback.clone())
        };
        match reply {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(message) => Err(message.into()),
        }
    }
}

// ============================================================================
// Recording Interceptor
// ============================================================================

/// An interceptor that records each value, then proceeds with it.
///
/// Clones share the same record.
pub struct RecordingInterceptor<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> RecordingInterceptor<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A copy of the recorded values.
    pub fn values(&self) -> Vec<T> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded values.
    pub fn count(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<T: Clone> Default for RecordingInterceptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingInterceptor<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<T: Message + Clone> Interceptor<T> for RecordingInterceptor<T> {
    fn intercept(&self, value: T, next: Next<T>) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value.clone());
        next.proceed(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_script() {
        let transport = MockTransport::new();
        transport
            .push_response(Response::new(201, "Created"))
            .push_failure("reset");

        let first = transport.fetch("/1".into(), RequestInit::new()).await.unwrap();
        let second = transport.fetch("/2".into(), RequestInit::new()).await.unwrap_err();
        let third = transport.fetch("/3".into(), RequestInit::new()).await.unwrap();

        assert_eq!(first.status, 201);
        assert_eq!(second.to_string(), "reset");
        assert_eq!(third.status, 200);
        assert_eq!(
            transport.calls().iter().map(|c| c.target.as_str()).collect::<Vec<_>>(),
            vec!["/1", "/2", "/3"]
        );
    }

    #[tokio::test]
    async fn test_recording_interceptor() {
        let recorder = RecordingInterceptor::<u32>::new();
        let step = hookfetch_core::adapt::<u32>(Arc::new(recorder.clone()));

        step.call(1).await.unwrap();
        step.call(2).await.unwrap();

        assert_eq!(recorder.values(), vec![1, 2]);
        assert_eq!(recorder.count(), 2);
    }
}
