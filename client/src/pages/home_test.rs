use super::*;

#[test]
fn routes_match_router() {
    assert_eq!(STUDENT_ROUTE, "/chat");
    assert_eq!(VOLUNTEER_ROUTE, "/volunteer");
}

#[test]
fn cards_have_copy() {
    for card in FEATURES.iter().chain(BENEFITS.iter()) {
        assert!(!card.title.is_empty());
        assert!(!card.description.is_empty());
    }
    assert_eq!(FEATURES[0].title, "Chat Anônimo");
}
