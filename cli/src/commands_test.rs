use chatlog::{LogStore, SendError, SteppingClock, WELCOME_TEXT};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::{datetime, offset};

use super::*;

fn store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    (dir, store)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(1)
}

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn stored(store: &FileStore) -> Vec<Message> {
    log_for(store).load()
}

// =============================================================
// init / show
// =============================================================

#[test]
fn init_seeds_once() {
    let (_dir, store) = store();
    let clock = SteppingClock::millis_from_epoch();

    let first = output(|out| init(&store, &clock, out));
    let second = output(|out| init(&store, &clock, out));

    assert!(first.starts_with("1 message(s)"));
    assert!(second.starts_with("1 message(s)"));
    assert_eq!(stored(&store)[0].text, WELCOME_TEXT);
}

#[test]
fn show_empty_log() {
    let (_dir, store) = store();
    assert_eq!(output(|out| show(&store, UtcOffset::UTC, false, out)), "(no messages)\n");
}

#[test]
fn show_json_matches_stored_array() {
    let (_dir, store) = store();
    output(|out| init(&store, &SteppingClock::millis_from_epoch(), out));

    let printed = output(|out| show(&store, UtcOffset::UTC, true, out));
    let decoded: Vec<Message> = serde_json::from_str(&printed).unwrap();
    assert_eq!(decoded, stored(&store));
}

#[test]
fn render_line_tags_volunteers() {
    let at = datetime!(2025-03-14 15:09 UTC);
    assert_eq!(render_line(&Message::student("Oi", "Anônimo1", at), offset!(-3)), "[12:09] Anônimo1: Oi");
    assert_eq!(
        render_line(&Message::volunteer("Olá", "Voluntário2", at), UtcOffset::UTC),
        "[15:09] Voluntário2 (Voluntário): Olá"
    );
}

// =============================================================
// send
// =============================================================

#[test]
fn student_send_seeds_then_appends() {
    let (_dir, store) = store();
    let who = SendAs { alias: Some("Anônimo42".to_owned()), ..SendAs::default() };

    let printed = output(|out| send(&store, SteppingClock::millis_from_epoch(), "Oi", who, &mut rng(), out));

    let log = stored(&store);
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].sender, "Anônimo42");
    assert!(!log[1].is_volunteer);
    assert!(printed.starts_with("sent as Anônimo42"));
}

#[test]
fn random_student_alias_in_range() {
    let (_dir, store) = store();
    output(|out| send(&store, SteppingClock::millis_from_epoch(), "Oi", SendAs::default(), &mut rng(), out));
    assert!(stored(&store)[1].sender.starts_with("Anônimo"));
}

#[test]
fn blank_send_reports_and_writes_only_seed() {
    let (_dir, store) = store();
    let printed = output(|out| send(&store, SteppingClock::millis_from_epoch(), "   ", SendAs::default(), &mut rng(), out));
    assert_eq!(printed, "nothing sent: message is blank\n");
    assert_eq!(stored(&store).len(), 1);
}

#[test]
fn offline_volunteer_send_is_rejected() {
    let (_dir, store) = store();
    let who = SendAs { volunteer: true, ..SendAs::default() };
    let mut out = Vec::new();

    let err = send(&store, SteppingClock::millis_from_epoch(), "Olá", who, &mut rng(), &mut out).unwrap_err();

    assert!(matches!(err, CliError::Send(SendError::Offline)));
    assert_eq!(stored(&store).len(), 1);
}

#[test]
fn online_volunteer_send_is_marked() {
    let (_dir, store) = store();
    let who = SendAs { volunteer: true, online: true, alias: None };
    output(|out| send(&store, SteppingClock::millis_from_epoch(), "Olá", who, &mut rng(), out));

    let last = stored(&store).pop().unwrap();
    assert!(last.is_volunteer);
    assert!(last.sender.starts_with("Voluntário"));
}

#[test]
fn corrupt_log_is_replaced_on_send() {
    let (_dir, store) = store();
    store.write(DEFAULT_KEY, "{not json").unwrap();

    output(|out| send(&store, SteppingClock::millis_from_epoch(), "Oi", SendAs::default(), &mut rng(), out));

    let log = stored(&store);
    assert_eq!(log.len(), 2);
    assert!(log[0].is_system);
}

// =============================================================
// quick / clear
// =============================================================

#[test]
fn quick_lists_catalog() {
    let printed = output(|out| quick(&store().1, SteppingClock::millis_from_epoch(), None, None, &mut rng(), out));
    assert_eq!(printed.lines().count(), QUICK_RESPONSES.len());
    assert!(printed.starts_with("1. Entendo como você está se sentindo."));
}

#[test]
fn quick_sends_canned_reply() {
    let (_dir, store) = store();
    output(|out| quick(&store, SteppingClock::millis_from_epoch(), Some(3), None, &mut rng(), out));

    let last = stored(&store).pop().unwrap();
    assert_eq!(last.text, QUICK_RESPONSES[2]);
    assert!(last.is_volunteer);
}

#[test]
fn quick_rejects_out_of_range() {
    let (_dir, store) = store();
    for index in [0, 6] {
        let mut out = Vec::new();
        let err = quick(&store, SteppingClock::millis_from_epoch(), Some(index), None, &mut rng(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::UnknownQuickResponse { count: 5, .. }));
    }
    assert_eq!(store.read(DEFAULT_KEY), Ok(None));
}

#[test]
fn clear_removes_log() {
    let (_dir, store) = store();
    output(|out| init(&store, &SteppingClock::millis_from_epoch(), out));

    assert_eq!(output(|out| clear(&store, out)), "cleared\n");
    assert_eq!(output(|out| clear(&store, out)), "already empty\n");
    assert!(stored(&store).is_empty());
}
