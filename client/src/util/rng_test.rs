use super::*;
use chatlog::{student_alias, volunteer_alias};

#[test]
fn session_rng_yields_valid_aliases() {
    let mut rng = session_rng();
    assert!(student_alias(&mut rng).starts_with("Anônimo"));
    assert!(volunteer_alias(&mut rng).starts_with("Voluntário"));
}
