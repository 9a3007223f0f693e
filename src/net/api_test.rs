use super::*;

// =============================================================================
// parse_sprint_response
// =============================================================================

#[test]
fn parse_sprint_unwraps_envelope() {
    let sprint = parse_sprint_response(r#"{ "sprint": { "id": 9, "name": "Sprint 9" } }"#).unwrap();
    assert_eq!(sprint.id, Some(9));
    assert_eq!(sprint.name.as_deref(), Some("Sprint 9"));
}

#[test]
fn parse_sprint_missing_key_is_parse_error() {
    let err = parse_sprint_response(r#"{ "current": {} }"#).unwrap_err();
    assert!(matches!(err, BoardError::ApiParse(_)));
}

#[test]
fn parse_sprint_non_json_is_parse_error() {
    let err = parse_sprint_response("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, BoardError::ApiParse(_)));
}

// =============================================================================
// parse_stories_response
// =============================================================================

#[test]
fn parse_stories_preserves_backend_order() {
    let stories = parse_stories_response(
        r#"{ "stories": [
            { "id": "102", "fields": { "subtasks": [] } },
            { "id": "101", "fields": { "subtasks": [{ "id": "201" }] } }
        ] }"#,
    )
    .unwrap();

    let ids: Vec<&str> = stories.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["102", "101"]);
    assert_eq!(stories[1].fields.subtasks[0].id, "201");
}

#[test]
fn parse_stories_empty_list_is_ok() {
    let stories = parse_stories_response(r#"{ "stories": [] }"#).unwrap();
    assert!(stories.is_empty());
}

#[test]
fn parse_stories_missing_key_is_parse_error() {
    let err = parse_stories_response(r#"{ "issues": [] }"#).unwrap_err();
    assert!(matches!(err, BoardError::ApiParse(_)));
}
