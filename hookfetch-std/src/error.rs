//! Error types for wrapped calls.
//!
//! - [`FetchError`] - what a wrapped call fails with
//! - [`Concern`] - which registry a handler or a rejection belongs to

use crate::exchange::NormalizedError;
use hookfetch_core::BoxError;
use std::fmt;
use thiserror::Error;

/// One of the three interceptor registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    /// Outgoing request options.
    Request,
    /// Successful responses.
    Response,
    /// Normalized failures.
    Error,
}

impl Concern {
    /// Lower-case name, as used in trace events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Concern::Request => "request",
            Concern::Response => "response",
            Concern::Error => "error",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a wrapped call.
#[derive(Error, Debug)]
pub enum FetchError {
    /// An interceptor rejected. `source` is the rejection value, unchanged.
    #[error("{source}")]
    Rejected {
        /// Registry whose pipeline rejected.
        stage: Concern,
        /// The value the interceptor rejected with.
        #[source]
        source: BoxError,
    },

    /// The transport failed or answered unsuccessfully. Holds the value the
    /// error pipeline resolved to.
    #[error(transparent)]
    Failed(Box<NormalizedError>),
}

impl FetchError {
    /// The rejecting registry, if this is a rejection.
    pub fn stage(&self) -> Option<Concern> {
        match self {
            FetchError::Rejected { stage, .. } => Some(*stage),
            FetchError::Failed(_) => None,
        }
    }

    /// The normalized error, if the call reached the error pipeline and it
    /// resolved.
    pub fn normalized(&self) -> Option<&NormalizedError> {
        match self {
            FetchError::Failed(normalized) => Some(normalized),
            FetchError::Rejected { .. } => None,
        }
    }

    /// The rejection value, if an interceptor rejected.
    pub fn rejection(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            FetchError::Rejected { source, .. } => Some(source.as_ref()),
            FetchError::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{RequestInit, Response};

    #[test]
    fn test_rejection_displays_verbatim() {
        let err = FetchError::Rejected {
            stage: Concern::Request,
            source: "X".into(),
        };

        assert_eq!(err.to_string(), "X");
        assert_eq!(err.stage(), Some(Concern::Request));
        assert!(err.normalized().is_none());
        assert_eq!(err.rejection().unwrap().to_string(), "X");
    }

    #[test]
    fn test_failed_exposes_normalized() {
        let normalized =
            NormalizedError::from_response("/x", RequestInit::new(), &Response::new(500, "Boom"));
        let err = FetchError::Failed(Box::new(normalized));

        assert_eq!(err.stage(), None);
        assert_eq!(err.normalized().and_then(|n| n.status), Some(500));
        assert_eq!(err.to_string(), "request to /x failed with status 500 Boom");
    }

    #[test]
    fn test_concern_names() {
        assert_eq!(Concern::Request.to_string(), "request");
        assert_eq!(Concern::Response.as_str(), "response");
        assert_eq!(Concern::Error.as_str(), "error");
    }
}
