use super::*;
use serde_json::json;

#[test]
fn story_deserializes_with_ordered_subtasks() {
    let story: Story = serde_json::from_value(json!({
        "id": "101",
        "key": "ABC-101",
        "fields": {
            "summary": "As a user, I can drag cards",
            "subtasks": [{ "id": "201" }, { "id": "202" }]
        }
    }))
    .unwrap();

    assert_eq!(story.id, "101");
    let ids: Vec<&str> = story.fields.subtasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["201", "202"]);
    // Uninterpreted backend fields are preserved, not dropped.
    assert_eq!(story.extra["key"], json!("ABC-101"));
    assert_eq!(story.fields.extra["summary"], json!("As a user, I can drag cards"));
}

#[test]
fn story_without_fields_defaults_to_empty_subtasks() {
    let story: Story = serde_json::from_value(json!({ "id": "101" })).unwrap();
    assert!(story.fields.subtasks.is_empty());
}

#[test]
fn sprint_keeps_unknown_fields_in_extra() {
    let sprint: Sprint = serde_json::from_value(json!({
        "id": 9,
        "name": "Sprint 9",
        "state": "active",
        "goal": "ship the board"
    }))
    .unwrap();

    assert_eq!(sprint.id, Some(9));
    assert_eq!(sprint.name.as_deref(), Some("Sprint 9"));
    assert_eq!(sprint.extra["state"], json!("active"));
    assert_eq!(sprint.extra["goal"], json!("ship the board"));
}

#[test]
fn subtask_survives_reserialization_with_extras() {
    let original = json!({ "id": "201", "fields": { "status": { "name": "Done" } } });
    let subtask: SubTask = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&subtask).unwrap(), original);
}

#[test]
fn epic_new_has_no_name() {
    let epic = Epic::new("E-1");
    assert_eq!(epic.id, "E-1");
    assert!(epic.name.is_none());
}
