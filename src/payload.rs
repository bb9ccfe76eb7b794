//! Typed webhook payload shapes and the discriminated JSON decoder.
//!
//! Each shape composes the segments from [`crate::segments`] via
//! `#[serde(flatten)]`, mirroring how GitFox assembles the bodies it sends.
//! Aliased triggers (reopened, merged, required-checks-passed) do not get
//! shapes of their own: [`decode`] resolves the trigger through
//! [`Trigger::decode_target`], decodes the canonical shape, and tags the
//! result with the original trigger.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::events::Trigger;
use crate::segments::{
    BaseSegment, CommentSegment, PullReqSegment, PullReqUpdateSegment, ReferenceDetailsSegment,
    ReferenceSegment, ReferenceUpdateSegment, ReviewSegment, ReviewerSegment,
    TargetReferenceSegment,
};

/// Body of branch and tag lifecycle triggers (created/updated/deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub details: ReferenceDetailsSegment,
    #[serde(flatten)]
    pub update: ReferenceUpdateSegment,
}

/// Body of the `pullreq_created` trigger, and of `pullreq_reopened` via
/// aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub details: ReferenceDetailsSegment,
}

/// Body of the `pullreq_branch_updated` trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqBranchUpdatedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub details: ReferenceDetailsSegment,
    #[serde(flatten)]
    pub update: ReferenceUpdateSegment,
}

/// Body of the `pullreq_closed` trigger, and of `pullreq_merged` via
/// aliasing.
///
/// Structurally identical to [`PullReqPayload`] today; kept as its own type
/// so the two shapes can evolve independently, as they do upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqClosedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub details: ReferenceDetailsSegment,
}

/// Body of the `pullreq_comment_created` trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqCommentPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub details: ReferenceDetailsSegment,
    #[serde(flatten)]
    pub comment: CommentSegment,
}

/// Body of the `pullreq_comment_updated` trigger.
///
/// Unlike [`PullReqCommentPayload`] this carries no reference-details
/// segment; edits do not re-send commit information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqCommentUpdatedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub comment: CommentSegment,
}

/// Body of the `pullreq_updated` trigger (title/description edits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqUpdatedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub update: PullReqUpdateSegment,
}

/// Body of the reviewer lifecycle triggers (`pullreq_reviewer_created`,
/// `pullreq_reviewer_deleted`) and, via aliasing,
/// `pullreq_required_checks_passed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerChangedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub reviewer: ReviewerSegment,
}

/// Body of the `pullreq_review_submitted` trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmittedPayload {
    #[serde(flatten)]
    pub base: BaseSegment,
    #[serde(flatten)]
    pub pull_req: PullReqSegment,
    #[serde(flatten)]
    pub target_reference: TargetReferenceSegment,
    #[serde(flatten)]
    pub reference: ReferenceSegment,
    #[serde(flatten)]
    pub review: ReviewSegment,
}

/// A decoded payload, one variant per canonical shape.
///
/// Serializes transparently as the inner shape, so a payload can be turned
/// back into a wire body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Reference(ReferencePayload),
    PullReq(PullReqPayload),
    PullReqBranchUpdated(PullReqBranchUpdatedPayload),
    PullReqClosed(PullReqClosedPayload),
    PullReqComment(PullReqCommentPayload),
    PullReqCommentUpdated(PullReqCommentUpdatedPayload),
    PullReqUpdated(PullReqUpdatedPayload),
    ReviewerChanged(ReviewerChangedPayload),
    ReviewSubmitted(ReviewSubmittedPayload),
}

impl Payload {
    /// Returns the base segment common to every shape.
    pub fn base(&self) -> &BaseSegment {
        match self {
            Payload::Reference(p) => &p.base,
            Payload::PullReq(p) => &p.base,
            Payload::PullReqBranchUpdated(p) => &p.base,
            Payload::PullReqClosed(p) => &p.base,
            Payload::PullReqComment(p) => &p.base,
            Payload::PullReqCommentUpdated(p) => &p.base,
            Payload::PullReqUpdated(p) => &p.base,
            Payload::ReviewerChanged(p) => &p.base,
            Payload::ReviewSubmitted(p) => &p.base,
        }
    }
}

/// A verified, decoded webhook delivery.
///
/// `trigger` is always the value that arrived on the wire; for aliased
/// triggers the payload holds the canonical shape while the tag keeps the
/// original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub trigger: Trigger,
    pub payload: Payload,
}

/// Decodes a body into the shape for `trigger` and tags the result.
///
/// The caller has already established that `trigger` is of interest and, if a
/// secret is configured, that the body is authentic.
pub(crate) fn decode(trigger: Trigger, body: &[u8]) -> Result<Event, Error> {
    let payload = match trigger.decode_target() {
        Trigger::BranchCreated
        | Trigger::BranchUpdated
        | Trigger::BranchDeleted
        | Trigger::TagCreated
        | Trigger::TagUpdated
        | Trigger::TagDeleted => Payload::Reference(decode_json(trigger, body)?),
        Trigger::PullReqCreated | Trigger::PullReqReopened => {
            Payload::PullReq(decode_json(trigger, body)?)
        }
        Trigger::PullReqBranchUpdated => {
            Payload::PullReqBranchUpdated(decode_json(trigger, body)?)
        }
        Trigger::PullReqClosed | Trigger::PullReqMerged => {
            Payload::PullReqClosed(decode_json(trigger, body)?)
        }
        Trigger::PullReqCommentCreated => Payload::PullReqComment(decode_json(trigger, body)?),
        Trigger::PullReqCommentUpdated => {
            Payload::PullReqCommentUpdated(decode_json(trigger, body)?)
        }
        Trigger::PullReqUpdated => Payload::PullReqUpdated(decode_json(trigger, body)?),
        Trigger::PullReqReviewerCreated
        | Trigger::PullReqReviewerDeleted
        | Trigger::PullReqRequiredChecksPassed => {
            Payload::ReviewerChanged(decode_json(trigger, body)?)
        }
        Trigger::PullReqReviewSubmitted => Payload::ReviewSubmitted(decode_json(trigger, body)?),
    };

    Ok(Event { trigger, payload })
}

fn decode_json<'a, T: Deserialize<'a>>(trigger: Trigger, body: &'a [u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { trigger, source })
}
