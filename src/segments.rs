//! Reusable field groups shared by webhook payload shapes.
//!
//! GitFox composes each payload out of a fixed set of segments: a base
//! segment common to everything, plus reference, pull-request, comment,
//! reviewer and review segments as the event requires. Defining the segments
//! once and flattening them into the shapes (see [`crate::payload`]) keeps
//! the ~20 shapes consistent and makes aliased events trivially share a
//! definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository descriptor, present on every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    /// Full path including the parent space, e.g. `"acme/widgets"`.
    pub path: String,
    pub identifier: String,
    pub default_branch: String,
    pub git_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// A GitFox principal (user or service account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalInfo {
    pub id: i64,
    pub uid: String,
    pub display_name: String,
    pub email: String,
    /// Principal type, e.g. `"user"` or `"serviceaccount"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation time as unix epoch milliseconds.
    pub created: i64,
    /// Last-update time as unix epoch milliseconds.
    pub updated: i64,
}

/// A git identity (name and email) as recorded in commit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    pub name: String,
    pub email: String,
}

/// A git author/committer signature: identity plus timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSignature {
    pub identity: IdentityInfo,
    pub when: DateTime<Utc>,
}

/// A commit as carried in reference payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub author: GitSignature,
    pub committer: GitSignature,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
}

/// A branch or tag name together with its owning repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceInfo {
    pub name: String,
    pub repo: Repository,
}

/// The pull-request descriptor shared by all pull-request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqInfo {
    pub number: i64,
    /// Lifecycle state, e.g. `"open"`, `"closed"`, `"merged"`.
    pub state: String,
    pub is_draft: bool,
    pub title: String,
    pub description: String,
    pub source_repo_id: i64,
    pub source_branch: String,
    pub target_repo_id: i64,
    pub target_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<String>,
    pub author: PrincipalInfo,
    pub pr_url: String,
}

/// A pull-request comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInfo {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub text: String,
    pub created: i64,
    pub updated: i64,
    pub kind: String,
}

/// Inline code-location detail for comments anchored to a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCommentInfo {
    pub outdated: bool,
    pub merge_base_sha: String,
    pub source_sha: String,
    pub path: String,
    pub line_new: i64,
    pub span_new: i64,
    pub line_old: i64,
    pub span_old: i64,
}

// ============================================================================
// Segments
//
// Each segment is flattened into the payload shapes that need it. Field names
// must stay collision-free across segments that appear in the same shape.
// ============================================================================

/// Fields common to every payload: the trigger name as sent on the wire, the
/// repository the event happened in, and the acting principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSegment {
    pub trigger: String,
    pub repo: Repository,
    pub principal: PrincipalInfo,
}

/// The reference (branch or tag) the event concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSegment {
    #[serde(rename = "ref")]
    pub reference: ReferenceInfo,
}

/// Extra details for reference-related payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDetailsSegment {
    pub sha: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_commit: Option<CommitInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<CommitInfo>>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_commits_count: i64,

    /// Deprecated: older GitFox versions put the head commit here. Kept so
    /// deliveries from those versions still decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitInfo>,
}

/// Extra details for reference update payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceUpdateSegment {
    pub old_sha: String,
    pub forced: bool,
}

/// The pull request the event concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqSegment {
    pub pull_req: PullReqInfo,
}

/// The reference a pull request targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetReferenceSegment {
    pub target_ref: ReferenceInfo,
}

/// A comment, optionally carrying inline code-location detail when the
/// comment is anchored to a line in the diff.
///
/// The code-location fields sit at the same JSON level as `comment`, and are
/// present as a group or not at all. Serde is implemented by hand so that a
/// body without them decodes to `code_comment: None` instead of failing on
/// missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSegment {
    pub comment: CommentInfo,
    pub code_comment: Option<CodeCommentInfo>,
}

impl Serialize for CommentSegment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("comment", &self.comment)?;
        if let Some(code) = &self.code_comment {
            map.serialize_entry("outdated", &code.outdated)?;
            map.serialize_entry("merge_base_sha", &code.merge_base_sha)?;
            map.serialize_entry("source_sha", &code.source_sha)?;
            map.serialize_entry("path", &code.path)?;
            map.serialize_entry("line_new", &code.line_new)?;
            map.serialize_entry("span_new", &code.span_new)?;
            map.serialize_entry("line_old", &code.line_old)?;
            map.serialize_entry("span_old", &code.span_old)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CommentSegment {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            comment: CommentInfo,
            #[serde(default)]
            outdated: Option<bool>,
            #[serde(default)]
            merge_base_sha: Option<String>,
            #[serde(default)]
            source_sha: Option<String>,
            #[serde(default)]
            path: Option<String>,
            #[serde(default)]
            line_new: Option<i64>,
            #[serde(default)]
            span_new: Option<i64>,
            #[serde(default)]
            line_old: Option<i64>,
            #[serde(default)]
            span_old: Option<i64>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let code_comment = match (wire.merge_base_sha, wire.source_sha, wire.path) {
            (Some(merge_base_sha), Some(source_sha), Some(path)) => Some(CodeCommentInfo {
                outdated: wire.outdated.unwrap_or_default(),
                merge_base_sha,
                source_sha,
                path,
                line_new: wire.line_new.unwrap_or_default(),
                span_new: wire.span_new.unwrap_or_default(),
                line_old: wire.line_old.unwrap_or_default(),
                span_old: wire.span_old.unwrap_or_default(),
            }),
            _ => None,
        };

        Ok(CommentSegment {
            comment: wire.comment,
            code_comment,
        })
    }
}

/// The reviewer affected by a reviewer lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerSegment {
    pub reviewer: PrincipalInfo,
}

/// The decision and author of a submitted review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSegment {
    /// E.g. `"approved"`, `"changereq"`.
    pub review_decision: String,
    pub reviewer: PrincipalInfo,
}

/// What changed in a pull-request edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReqUpdateSegment {
    pub title_changed: bool,
    pub title_old: String,
    pub title_new: String,
    pub description_changed: bool,
    pub description_old: String,
    pub description_new: String,
}

// Signature dictated by serde's skip_serializing_if.
fn is_zero(n: &i64) -> bool {
    *n == 0
}
