//! Per-session randomness for alias assignment.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A fresh generator for one page mount.
///
/// Seeded from `Math.random` in the browser and from the wall clock
/// elsewhere, so `rand` never needs an OS entropy source on wasm.
pub fn session_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy())
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy() -> u64 {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    random ^ (js_sys::Date::now() as u64).rotate_left(32)
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy() -> u64 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() as u64
}
