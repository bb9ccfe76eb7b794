//! GitFox webhook trigger identifiers.
//!
//! Every webhook delivery carries an `X-Gitfox-Trigger` header naming the
//! event that fired. [`Trigger`] is the closed set of identifiers this crate
//! recognizes; anything else is rejected as unsupported rather than decoded
//! on a best-effort basis.
//!
//! Some triggers are aliases: they reuse another trigger's payload shape and
//! differ only in the name under which the event is delivered. The mapping is
//! recorded in [`Trigger::decode_target`] so the payload decoder never has to
//! maintain duplicate shape definitions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A webhook event-type identifier, as carried in the `X-Gitfox-Trigger` header.
///
/// Matching against the wire value is exact: `"branch_created"` parses,
/// `"Branch_Created"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A branch was created.
    BranchCreated,
    /// A branch was updated (pushed to).
    BranchUpdated,
    /// A branch was deleted.
    BranchDeleted,

    /// A tag was created.
    TagCreated,
    /// A tag was updated.
    TagUpdated,
    /// A tag was deleted.
    TagDeleted,

    /// A pull request was opened.
    PullReqCreated,
    /// A closed pull request was reopened. Decodes the same shape as
    /// [`Trigger::PullReqCreated`].
    PullReqReopened,
    /// The source branch of a pull request received new commits.
    PullReqBranchUpdated,
    /// A pull request was closed without merging.
    PullReqClosed,
    /// A pull request was merged. Decodes the same shape as
    /// [`Trigger::PullReqClosed`].
    PullReqMerged,
    /// A comment was created on a pull request.
    PullReqCommentCreated,
    /// A pull request comment was edited.
    PullReqCommentUpdated,
    /// A pull request's title or description was edited.
    PullReqUpdated,
    /// A reviewer was added to a pull request.
    PullReqReviewerCreated,
    /// A reviewer was removed from a pull request. Same payload shape as
    /// [`Trigger::PullReqReviewerCreated`].
    PullReqReviewerDeleted,
    /// All required checks on a pull request passed. Decodes the same shape
    /// as [`Trigger::PullReqReviewerCreated`].
    PullReqRequiredChecksPassed,
    /// A review was submitted on a pull request.
    PullReqReviewSubmitted,
}

/// Error returned when a trigger string names no known event type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trigger: {0}")]
pub struct UnknownTrigger(pub String);

impl Trigger {
    /// Every trigger this crate recognizes.
    pub const ALL: [Trigger; 18] = [
        Trigger::BranchCreated,
        Trigger::BranchUpdated,
        Trigger::BranchDeleted,
        Trigger::TagCreated,
        Trigger::TagUpdated,
        Trigger::TagDeleted,
        Trigger::PullReqCreated,
        Trigger::PullReqReopened,
        Trigger::PullReqBranchUpdated,
        Trigger::PullReqClosed,
        Trigger::PullReqMerged,
        Trigger::PullReqCommentCreated,
        Trigger::PullReqCommentUpdated,
        Trigger::PullReqUpdated,
        Trigger::PullReqReviewerCreated,
        Trigger::PullReqReviewerDeleted,
        Trigger::PullReqRequiredChecksPassed,
        Trigger::PullReqReviewSubmitted,
    ];

    /// Returns the wire representation of this trigger.
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::BranchCreated => "branch_created",
            Trigger::BranchUpdated => "branch_updated",
            Trigger::BranchDeleted => "branch_deleted",
            Trigger::TagCreated => "tag_created",
            Trigger::TagUpdated => "tag_updated",
            Trigger::TagDeleted => "tag_deleted",
            Trigger::PullReqCreated => "pullreq_created",
            Trigger::PullReqReopened => "pullreq_reopened",
            Trigger::PullReqBranchUpdated => "pullreq_branch_updated",
            Trigger::PullReqClosed => "pullreq_closed",
            Trigger::PullReqMerged => "pullreq_merged",
            Trigger::PullReqCommentCreated => "pullreq_comment_created",
            Trigger::PullReqCommentUpdated => "pullreq_comment_updated",
            Trigger::PullReqUpdated => "pullreq_updated",
            Trigger::PullReqReviewerCreated => "pullreq_reviewer_created",
            Trigger::PullReqReviewerDeleted => "pullreq_reviewer_deleted",
            Trigger::PullReqRequiredChecksPassed => "pullreq_required_checks_passed",
            Trigger::PullReqReviewSubmitted => "pullreq_review_submitted",
        }
    }

    /// Returns the trigger whose payload shape this trigger decodes into.
    ///
    /// For most triggers this is the identity. Aliased triggers map to the
    /// trigger that owns the canonical shape definition; the decoded event is
    /// still tagged with the original trigger, not the target.
    pub fn decode_target(self) -> Trigger {
        match self {
            Trigger::PullReqReopened => Trigger::PullReqCreated,
            Trigger::PullReqMerged => Trigger::PullReqClosed,
            Trigger::PullReqRequiredChecksPassed => Trigger::PullReqReviewerCreated,
            other => other,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trigger::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTrigger(s.to_string()))
    }
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
