//! Wire JSON → typed records → reviewer table rows.

use azdo::presentation::reviewer_rows;
use azdo::records::Reviewer;
use serde_json::{json, Value};

fn wire_record(name: &str, unique_name: &str, vote: i32, required: bool) -> Value {
    json!({
        "displayName": name,
        "uniqueName": unique_name,
        "id": format!("id-{}", name),
        "vote": vote,
        "isRequired": required,
        "reviewerUrl": "https://dev.azure.com/ignored"
    })
}

#[test]
fn required_rows_precede_optional_rows_sorted_by_name() {
    let records = vec![
        wire_record("Zoe", "zoe@example.com", 0, false),
        wire_record("Bob", "bob@example.com", 10, true),
        wire_record("Amy", "amy@example.com", -5, false),
        wire_record("Ann", "ann@example.com", 5, true),
    ];
    let items = Reviewer::batch_from_values(records).unwrap();
    let rows = reviewer_rows(&items);

    let required: Vec<_> = rows.iter().map(|r| r.get("Required").unwrap()).collect();
    assert_eq!(required, vec!["True", "True", "False", "False"]);
    let names: Vec<_> = rows.iter().map(|r| r.get("Name").unwrap()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Amy", "Zoe"]);
}

#[test]
fn group_identity_masks_email_and_unknown_vote_is_blank() {
    let records = vec![wire_record(
        "Fabrikam Project Team",
        "vstfs:///Classification/TeamProject/abc",
        7,
        true,
    )];
    let items = Reviewer::batch_from_values(records).unwrap();
    let rows = reviewer_rows(&items);
    assert_eq!(rows[0].get("Email"), Some(" "));
    assert_eq!(rows[0].get("Vote"), Some(" "));
}

#[test]
fn vote_labels_follow_the_four_entry_table() {
    let records = vec![
        wire_record("A", "a@example.com", 10, false),
        wire_record("B", "b@example.com", 5, false),
        wire_record("C", "c@example.com", -5, false),
        wire_record("D", "d@example.com", -10, false),
        wire_record("E", "e@example.com", 0, false),
    ];
    let items = Reviewer::batch_from_values(records).unwrap();
    let rows = reviewer_rows(&items);
    let votes: Vec<_> = rows.iter().map(|r| r.get("Vote").unwrap()).collect();
    assert_eq!(
        votes,
        vec![
            "Approved",
            "Approved with suggestions",
            "Waiting for author",
            "Rejected",
            " ",
        ]
    );
}
