//! The webhook dispatcher: request validation, filtering, verification and
//! decoding in one pass.
//!
//! [`Webhook`] holds the only configuration there is — an optional shared
//! secret — and is immutable after construction, so one instance can serve
//! any number of concurrent requests without synchronization. Each
//! [`Webhook::parse`] call is a fail-fast pipeline with a fixed order:
//!
//! 1. non-empty interest set
//! 2. POST method
//! 3. `X-Gitfox-Trigger` header present
//! 4. trigger known and registered by the caller
//! 5. non-empty body
//! 6. signature verification (only if a secret is configured)
//! 7. JSON decoding into the trigger's payload shape
//!
//! There are no retries anywhere in the pipeline; redelivery is the sender's
//! job.

use http::{HeaderMap, Method, Request};
use tracing::{debug, warn};

use crate::error::Error;
use crate::events::{Trigger, UnknownTrigger};
use crate::payload::{self, Event};
use crate::signature::verify_signature;

/// Header carrying the event-type identifier.
pub const HEADER_TRIGGER: &str = "x-gitfox-trigger";
/// Header carrying the hex-encoded HMAC-SHA256 of the body.
pub const HEADER_SIGNATURE: &str = "x-gitfox-signature";

/// A configured webhook parser.
///
/// Construct with [`Webhook::new`] (signature verification disabled) or via
/// [`Webhook::builder`] to set a shared secret.
#[derive(Debug, Clone, Default)]
pub struct Webhook {
    secret: Option<String>,
}

/// Builder for [`Webhook`].
///
/// Construction is infallible: the only defined option is the shared secret,
/// and an empty secret simply means verification stays disabled.
#[derive(Debug, Clone, Default)]
pub struct WebhookBuilder {
    secret: Option<String>,
}

impl WebhookBuilder {
    /// Sets the shared secret used to verify delivery signatures.
    ///
    /// An empty string is treated as "no secret": verification disabled.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.secret = if secret.is_empty() { None } else { Some(secret) };
        self
    }

    pub fn build(self) -> Webhook {
        Webhook {
            secret: self.secret,
        }
    }
}

impl Webhook {
    /// Creates a parser with signature verification disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WebhookBuilder {
        WebhookBuilder::default()
    }

    /// Verifies and parses a webhook delivery.
    ///
    /// `events` is the caller's interest set: deliveries for any other
    /// trigger return [`Error::TriggerNotRegistered`], which is the expected
    /// filtering outcome rather than a failure (see
    /// [`Error::is_selection_miss`]).
    ///
    /// The request body must already be buffered in memory; signature
    /// verification runs over those exact bytes.
    pub fn parse<B: AsRef<[u8]>>(
        &self,
        request: &Request<B>,
        events: &[Trigger],
    ) -> Result<Event, Error> {
        if events.is_empty() {
            return Err(Error::NoEventsRegistered);
        }
        if request.method() != Method::POST {
            return Err(Error::InvalidHttpMethod(request.method().clone()));
        }

        let trigger_value =
            header_str(request.headers(), HEADER_TRIGGER).ok_or(Error::MissingTriggerHeader)?;
        let trigger: Trigger = trigger_value
            .parse()
            .map_err(|e: UnknownTrigger| Error::UnsupportedEvent(e.0))?;

        if !events.contains(&trigger) {
            debug!(%trigger, "delivery not in interest set, skipping");
            return Err(Error::TriggerNotRegistered(trigger));
        }

        let body = request.body().as_ref();
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        if let Some(secret) = &self.secret {
            let signature = header_str(request.headers(), HEADER_SIGNATURE)
                .ok_or(Error::MissingSignatureHeader)?;
            if !verify_signature(body, signature, secret.as_bytes()) {
                warn!(%trigger, "webhook signature verification failed");
                return Err(Error::SignatureMismatch);
            }
        }

        let event = payload::decode(trigger, body)?;
        debug!(%trigger, "webhook delivery decoded");
        Ok(event)
    }
}

/// Returns a header value as a non-empty string, or `None`.
///
/// An empty header value is treated the same as an absent header.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}
