use super::*;

#[test]
fn story_not_found_names_the_id() {
    let err = BoardError::StoryNotFound { story_id: 101 };
    assert_eq!(err.to_string(), "story not found: 101");
}

#[test]
fn api_response_names_the_status() {
    let err = BoardError::ApiResponse { status: 503, body: "unavailable".to_owned() };
    assert_eq!(err.to_string(), "API response error: status 503");
}

#[test]
fn missing_api_url_names_the_var() {
    let err = BoardError::MissingApiUrl { var: "BOARD_API_URL".to_owned() };
    assert!(err.to_string().contains("BOARD_API_URL"));
}
