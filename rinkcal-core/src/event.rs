//! Derived calendar event types.

use chrono::DateTime;
use chrono_tz::Tz;

/// One calendar entry derived from a single not-yet-played game.
///
/// Times are wall-clock values in the configured zone. The end time is
/// always start + 3h; the schedule feed carries no end times.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub uid: String,
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub location: String,
    pub description: Option<String>,
}
