//! Shared JSON fixtures for webhook bodies, one per payload shape.

use serde_json::{json, Value};

use crate::events::Trigger;

const SHA: &str = "0ae5e7c639e68a339446e1d35c6f1b4f9a241f1d";
const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

fn repo() -> Value {
    json!({
        "id": 1,
        "path": "acme/widgets",
        "identifier": "widgets",
        "default_branch": "main",
        "git_url": "https://git.example.com/acme/widgets.git"
    })
}

fn principal(id: i64, uid: &str) -> Value {
    json!({
        "id": id,
        "uid": uid,
        "display_name": "J. Doe",
        "email": format!("{uid}@example.com"),
        "type": "user",
        "created": 1714550400000i64,
        "updated": 1714550400000i64
    })
}

fn base(trigger: Trigger) -> Value {
    json!({
        "trigger": trigger.as_str(),
        "repo": repo(),
        "principal": principal(4, "jdoe")
    })
}

fn reference(name: &str) -> Value {
    json!({ "ref": { "name": name, "repo": repo() } })
}

fn details() -> Value {
    json!({ "sha": SHA })
}

fn reference_update() -> Value {
    json!({ "old_sha": ZERO_SHA, "forced": false })
}

fn pull_req() -> Value {
    json!({
        "pull_req": {
            "number": 17,
            "state": "open",
            "is_draft": false,
            "title": "Align widgets",
            "description": "Fixes the widget alignment regression.",
            "source_repo_id": 1,
            "source_branch": "feature",
            "target_repo_id": 1,
            "target_branch": "main",
            "author": principal(4, "jdoe"),
            "pr_url": "https://git.example.com/acme/widgets/pulls/17"
        }
    })
}

fn target_reference() -> Value {
    json!({ "target_ref": { "name": "refs/heads/main", "repo": repo() } })
}

fn comment() -> Value {
    json!({
        "comment": {
            "id": 9,
            "text": "looks good",
            "created": 1714550400000i64,
            "updated": 1714550400000i64,
            "kind": "comment"
        }
    })
}

fn reviewer() -> Value {
    json!({ "reviewer": principal(7, "rvw") })
}

fn review() -> Value {
    json!({ "review_decision": "approved", "reviewer": principal(7, "rvw") })
}

fn pull_req_update() -> Value {
    json!({
        "title_changed": true,
        "title_old": "Align widgets",
        "title_new": "Align widgets properly",
        "description_changed": false,
        "description_old": "",
        "description_new": ""
    })
}

fn merge(parts: Vec<Value>) -> Value {
    let mut out = serde_json::Map::new();
    for part in parts {
        let Value::Object(map) = part else {
            panic!("fixture parts must be JSON objects");
        };
        out.extend(map);
    }
    Value::Object(out)
}

/// Builds a well-formed JSON body for the given trigger's payload shape.
pub(crate) fn sample_body(trigger: Trigger) -> String {
    let ref_name = if matches!(
        trigger,
        Trigger::TagCreated | Trigger::TagUpdated | Trigger::TagDeleted
    ) {
        "refs/tags/v1.2.3"
    } else {
        "refs/heads/feature"
    };

    let parts = match trigger.decode_target() {
        Trigger::BranchCreated
        | Trigger::BranchUpdated
        | Trigger::BranchDeleted
        | Trigger::TagCreated
        | Trigger::TagUpdated
        | Trigger::TagDeleted => vec![
            base(trigger),
            reference(ref_name),
            details(),
            reference_update(),
        ],
        Trigger::PullReqCreated | Trigger::PullReqReopened => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            details(),
        ],
        Trigger::PullReqBranchUpdated => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            details(),
            reference_update(),
        ],
        Trigger::PullReqClosed | Trigger::PullReqMerged => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            details(),
        ],
        Trigger::PullReqCommentCreated => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            details(),
            comment(),
        ],
        Trigger::PullReqCommentUpdated => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            comment(),
        ],
        Trigger::PullReqUpdated => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            pull_req_update(),
        ],
        Trigger::PullReqReviewerCreated
        | Trigger::PullReqReviewerDeleted
        | Trigger::PullReqRequiredChecksPassed => vec![base(trigger), pull_req(), reviewer()],
        Trigger::PullReqReviewSubmitted => vec![
            base(trigger),
            pull_req(),
            target_reference(),
            reference(ref_name),
            review(),
        ],
    };

    merge(parts).to_string()
}
