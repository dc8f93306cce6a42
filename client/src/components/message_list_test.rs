use super::*;
use time::macros::datetime;

fn at() -> time::OffsetDateTime {
    datetime!(2025-03-14 12:00 UTC)
}

#[test]
fn bubble_class_by_author_kind() {
    assert_eq!(bubble_class(&Message::welcome(at())), "message message--system");
    assert_eq!(bubble_class(&Message::student("Oi", "Anônimo1", at())), "message message--student");
    assert_eq!(bubble_class(&Message::volunteer("Olá", "Voluntário1", at())), "message message--volunteer");
}

#[test]
fn student_row_right_only_for_own_alias() {
    let me = Perspective::Student { alias: "Anônimo1".to_owned() };
    assert_eq!(row_class(&me, &Message::student("Oi", "Anônimo1", at())), "message-row message-row--right");
    assert_eq!(row_class(&me, &Message::student("Oi", "Anônimo2", at())), "message-row message-row--left");
    assert_eq!(row_class(&me, &Message::volunteer("Olá", "Voluntário1", at())), "message-row message-row--left");
}

#[test]
fn volunteer_row_right_for_any_volunteer() {
    let row = row_class(&Perspective::Volunteer, &Message::volunteer("Olá", "Voluntário9", at()));
    assert_eq!(row, "message-row message-row--right");
    assert_eq!(row_class(&Perspective::Volunteer, &Message::welcome(at())), "message-row message-row--left");
}
