use super::*;
use chatlog::{LogError, Message, StoreError};
use time::macros::datetime;

// =============================================================
// Send notices
// =============================================================

#[test]
fn sent_support_message_confirms() {
    let msg = Message::volunteer("Olá", "Voluntário1", datetime!(2025-03-14 12:00 UTC));
    assert_eq!(send_notice(&Ok(SendOutcome::Sent(msg))), Some(Notice::VOLUNTEER_SENT));
}

#[test]
fn offline_send_asks_to_go_online() {
    assert_eq!(send_notice(&Err(SendError::Offline)), Some(Notice::MUST_BE_ONLINE));
}

#[test]
fn storage_failure_is_generic() {
    let err = SendError::Log(LogError::Write(StoreError::Unavailable));
    assert_eq!(send_notice(&Err(err)), Some(Notice::SEND_FAILED));
}

#[test]
fn blank_send_is_silent() {
    assert_eq!(send_notice(&Ok(SendOutcome::Ignored)), None);
}

// =============================================================
// Availability chrome
// =============================================================

#[test]
fn placeholder_follows_availability() {
    assert_eq!(placeholder(true), "Digite uma mensagem de apoio...");
    assert_eq!(placeholder(false), "Ative seu status online para enviar mensagens");
}

#[test]
fn toggle_reflects_availability() {
    assert_eq!(toggle_label(true), "Online");
    assert_eq!(toggle_label(false), "Offline");
    assert!(toggle_class(true).ends_with("--online"));
    assert!(toggle_class(false).ends_with("--offline"));
}
