//! Wire JSON → typed records → pull request table rows.

use azdo::presentation::{pull_request_rows, render_table};
use azdo::records::PullRequest;
use serde_json::{json, Value};

fn wire_record(id: i64, title: &str, status: &str) -> Value {
    json!({
        "pullRequestId": id,
        "codeReviewId": id,
        "creationDate": "2019-01-11T17:52:46.1234567Z",
        "createdBy": {
            "displayName": "Norman Paulk",
            "uniqueName": "fabrikamfiber16@hotmail.com"
        },
        "title": title,
        "description": "ignored by the table",
        "status": status,
        "repository": {
            "id": "repo-guid",
            "name": "Fabrikam"
        }
    })
}

#[test]
fn batch_renders_in_input_order() {
    let records = vec![
        wire_record(21, "Update the readme", "completed"),
        wire_record(19, "Fix the build", "active"),
    ];
    let items = PullRequest::batch_from_values(records).unwrap();
    let rows = pull_request_rows(&items).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("ID"), Some("21"));
    assert_eq!(rows[0].get("Status"), Some("Completed"));
    assert_eq!(rows[1].get("ID"), Some("19"));
    assert_eq!(rows[1].get("Status"), Some("Active"));

    let table = render_table(&rows);
    assert!(table.contains("Repository"));
    assert!(table.contains("Fabrikam"));
}

#[test]
fn title_longer_than_fifty_is_cut_to_forty_seven_plus_ellipsis() {
    let title = "Refactor the deployment pipeline so that rollbacks finish quickly";
    let items =
        PullRequest::batch_from_values(vec![wire_record(7, title, "active")]).unwrap();
    let rows = pull_request_rows(&items).unwrap();
    let cell = rows[0].get("Title").unwrap();
    assert_eq!(cell.chars().count(), 50);
    assert_eq!(cell, format!("{}...", &title[..47]));
}

#[test]
fn missing_required_key_fails_the_whole_batch() {
    let mut broken = wire_record(3, "ok", "active");
    broken.as_object_mut().unwrap().remove("pullRequestId");
    let records = vec![wire_record(2, "fine", "active"), broken];
    assert!(PullRequest::batch_from_values(records).is_err());
}

#[test]
fn rows_serialize_as_ordered_json_objects() {
    let items =
        PullRequest::batch_from_values(vec![wire_record(19, "Fix the build", "active")])
            .unwrap();
    let rows = pull_request_rows(&items).unwrap();
    let json = serde_json::to_string(&rows[0]).unwrap();
    let id_at = json.find("\"ID\"").unwrap();
    let status_at = json.find("\"Status\"").unwrap();
    assert!(id_at < status_at);
}
