//! Per-session display aliases.
//!
//! Aliases are drawn once when a view mounts and never persisted. Two live
//! sessions can draw the same alias; nothing prevents it.

#[cfg(test)]
#[path = "alias_test.rs"]
mod alias_test;

use rand::Rng;

pub const STUDENT_PREFIX: &str = "Anônimo";
/// Students draw from `0..STUDENT_RANGE`.
pub const STUDENT_RANGE: u32 = 1000;

pub const VOLUNTEER_PREFIX: &str = "Voluntário";
/// Volunteers draw from `0..VOLUNTEER_RANGE`.
pub const VOLUNTEER_RANGE: u32 = 100;

/// `Anônimo<0-999>`.
pub fn student_alias<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{STUDENT_PREFIX}{}", rng.random_range(0..STUDENT_RANGE))
}

/// `Voluntário<0-99>`.
pub fn volunteer_alias<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{VOLUNTEER_PREFIX}{}", rng.random_range(0..VOLUNTEER_RANGE))
}
