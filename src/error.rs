//! Error types for webhook parsing.
//!
//! Every failure in the pipeline is a returned [`Error`] value, never a panic.
//! The variants fall into broader categories (see [`ErrorKind`]) that callers
//! map to transport-level responses; this crate makes no HTTP-status decisions
//! of its own.
//!
//! One variant deserves special handling: [`Error::TriggerNotRegistered`] is
//! the expected outcome for a valid delivery the caller simply did not ask
//! for. Callers should check [`Error::is_selection_miss`] and respond with a
//! neutral "not applicable" status instead of logging it as a failure.

use http::Method;
use thiserror::Error;

use crate::events::Trigger;

/// The category of a parse failure, for mapping to caller-side handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call site is misconfigured (e.g. empty interest set).
    Configuration,
    /// The request itself is malformed: wrong method, missing header, empty body.
    RequestShape,
    /// The delivery names a valid trigger the caller did not register for.
    /// Not a failure; filtering worked as intended.
    SelectionMiss,
    /// The signature did not match the configured secret. Treat as a
    /// security event.
    Authentication,
    /// The body is not valid JSON for the resolved payload shape. Indicates
    /// a sender/schema mismatch.
    Decode,
    /// The trigger names no known payload shape. Indicates drift between the
    /// sender and this crate's event registry; needs a code change, not a retry.
    Unsupported,
}

impl ErrorKind {
    /// Returns true for the non-error filtering outcome.
    pub fn is_selection_miss(self) -> bool {
        self == ErrorKind::SelectionMiss
    }
}

/// A webhook parse failure.
#[derive(Debug, Error)]
pub enum Error {
    /// `parse` was called with an empty interest set.
    #[error("no triggers registered to parse")]
    NoEventsRegistered,

    /// The request method was not POST.
    #[error("invalid HTTP method: {0}")]
    InvalidHttpMethod(Method),

    /// The `X-Gitfox-Trigger` header was absent or empty.
    #[error("missing X-Gitfox-Trigger header")]
    MissingTriggerHeader,

    /// A secret is configured but the `X-Gitfox-Signature` header was absent.
    #[error("missing X-Gitfox-Signature header")]
    MissingSignatureHeader,

    /// The request body was empty.
    #[error("request body is empty")]
    EmptyBody,

    /// The trigger is valid but not in the caller's interest set.
    ///
    /// This is the expected outcome for deliveries the caller filters out;
    /// see [`Error::is_selection_miss`].
    #[error("trigger {0} is not registered for parsing")]
    TriggerNotRegistered(Trigger),

    /// The supplied signature did not match the HMAC computed over the body.
    #[error("HMAC signature verification failed")]
    SignatureMismatch,

    /// The body could not be decoded into the shape for this trigger.
    #[error("decoding {trigger} payload: {source}")]
    Decode {
        /// The trigger whose shape was expected.
        trigger: Trigger,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The trigger header named an event this crate does not recognize.
    #[error("unsupported trigger: {0}")]
    UnsupportedEvent(String),
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoEventsRegistered => ErrorKind::Configuration,
            Error::InvalidHttpMethod(_)
            | Error::MissingTriggerHeader
            | Error::MissingSignatureHeader
            | Error::EmptyBody => ErrorKind::RequestShape,
            Error::TriggerNotRegistered(_) => ErrorKind::SelectionMiss,
            Error::SignatureMismatch => ErrorKind::Authentication,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::UnsupportedEvent(_) => ErrorKind::Unsupported,
        }
    }

    /// Returns true if this is the non-error outcome of interest filtering.
    pub fn is_selection_miss(&self) -> bool {
        self.kind().is_selection_miss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_assigned_per_variant() {
        assert_eq!(Error::NoEventsRegistered.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::InvalidHttpMethod(Method::GET).kind(),
            ErrorKind::RequestShape
        );
        assert_eq!(Error::MissingTriggerHeader.kind(), ErrorKind::RequestShape);
        assert_eq!(
            Error::MissingSignatureHeader.kind(),
            ErrorKind::RequestShape
        );
        assert_eq!(Error::EmptyBody.kind(), ErrorKind::RequestShape);
        assert_eq!(
            Error::TriggerNotRegistered(Trigger::TagCreated).kind(),
            ErrorKind::SelectionMiss
        );
        assert_eq!(Error::SignatureMismatch.kind(), ErrorKind::Authentication);
        assert_eq!(
            Error::UnsupportedEvent("nope".to_string()).kind(),
            ErrorKind::Unsupported
        );
    }

    #[test]
    fn only_trigger_not_registered_is_a_selection_miss() {
        assert!(Error::TriggerNotRegistered(Trigger::BranchCreated).is_selection_miss());
        assert!(!Error::SignatureMismatch.is_selection_miss());
        assert!(!Error::EmptyBody.is_selection_miss());
        assert!(!Error::NoEventsRegistered.is_selection_miss());
    }

    #[test]
    fn decode_error_preserves_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode {
            trigger: Trigger::BranchCreated,
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("branch_created"));
    }
}
