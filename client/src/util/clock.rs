//! Local wall-clock offset for rendering message times.
//!
//! Messages are stored in UTC. The viewer's offset comes from
//! `Date.prototype.getTimezoneOffset` in the browser and is UTC elsewhere.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chatlog::Message;
use time::UtcOffset;

/// The viewer's current UTC offset.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// Convert a JS timezone offset (minutes *behind* UTC) into a [`UtcOffset`].
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    if !minutes.is_finite() {
        return UtcOffset::UTC;
    }
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// `HH:MM` label for a message in the viewer's offset.
pub fn message_time(message: &Message) -> String {
    message.clock_label(local_offset())
}
