//! Verified parsing of GitFox webhook deliveries into typed events.
//!
//! This crate is the verification-and-dispatch pipeline between an HTTP
//! server and the code that reacts to webhook events. Given a buffered
//! request and the set of triggers a caller cares about, [`Webhook::parse`]
//! validates the request shape, filters by interest, verifies the
//! HMAC-SHA256 signature when a secret is configured, and decodes the JSON
//! body into exactly one typed [`Event`].
//!
//! The surrounding server (routing, TLS, body size limits) and everything
//! that happens after a payload is decoded are out of scope.
//!
//! # Example
//!
//! ```
//! use gitfox_webhooks::{Trigger, Webhook};
//!
//! let body = br#"{
//!     "trigger": "branch_created",
//!     "repo": {
//!         "id": 1,
//!         "path": "acme/widgets",
//!         "identifier": "widgets",
//!         "default_branch": "main",
//!         "git_url": "https://git.example.com/acme/widgets.git"
//!     },
//!     "principal": {
//!         "id": 4,
//!         "uid": "jdoe",
//!         "display_name": "J. Doe",
//!         "email": "jdoe@example.com",
//!         "type": "user",
//!         "created": 1714550400000,
//!         "updated": 1714550400000
//!     },
//!     "ref": {
//!         "name": "refs/heads/feature",
//!         "repo": {
//!             "id": 1,
//!             "path": "acme/widgets",
//!             "identifier": "widgets",
//!             "default_branch": "main",
//!             "git_url": "https://git.example.com/acme/widgets.git"
//!         }
//!     },
//!     "sha": "0ae5e7c639e68a339446e1d35c6f1b4f9a241f1d",
//!     "old_sha": "0000000000000000000000000000000000000000",
//!     "forced": false
//! }"#;
//!
//! let request = http::Request::builder()
//!     .method(http::Method::POST)
//!     .header("X-Gitfox-Trigger", "branch_created")
//!     .body(body.as_slice())
//!     .unwrap();
//!
//! let hook = Webhook::new();
//! let event = hook.parse(&request, &[Trigger::BranchCreated]).unwrap();
//! assert_eq!(event.trigger, Trigger::BranchCreated);
//! assert_eq!(event.payload.base().repo.path, "acme/widgets");
//! ```
//!
//! To verify signatures, configure a secret:
//!
//! ```
//! use gitfox_webhooks::Webhook;
//!
//! let hook = Webhook::builder().secret("s3cr3t").build();
//! ```

pub mod error;
pub mod events;
pub mod payload;
pub mod segments;
pub mod signature;
pub mod webhook;

#[cfg(test)]
mod test_fixtures;

pub use error::{Error, ErrorKind};
pub use events::{Trigger, UnknownTrigger};
pub use payload::{Event, Payload};
pub use webhook::{Webhook, WebhookBuilder, HEADER_SIGNATURE, HEADER_TRIGGER};
