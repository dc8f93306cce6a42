use super::*;

#[test]
fn enter_sends() {
    assert!(is_send_key("Enter", false));
}

#[test]
fn shift_enter_is_newline() {
    assert!(!is_send_key("Enter", true));
}

#[test]
fn other_keys_edit() {
    assert!(!is_send_key("a", false));
    assert!(!is_send_key("NumpadEnter", false));
}
