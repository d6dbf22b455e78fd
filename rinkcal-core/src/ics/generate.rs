//! ICS file generation.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::event::GameEvent;

/// Generate .ics content for a full schedule, one VEVENT per event,
/// preserving input order.
///
/// Output is fully deterministic: the same events serialize to the same
/// bytes, so re-running against an unchanged schedule rewrites the file
/// without modification.
pub fn generate_ics(events: &[GameEvent]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        cal.push(build_vevent(event));
    }

    let cal = cal.done();

    // Post-process to remove unnecessary bloat from the icalendar crate's output
    strip_ics_bloat(&cal.to_string())
}

fn build_vevent(event: &GameEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.title);

    // DTSTAMP - required by RFC 5545. Derived from the event's own start
    // time rather than the wall clock so output stays deterministic.
    let dtstamp = event
        .start
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // Set start/end times as local wall-clock values with a TZID parameter
    add_zoned_property(&mut ics_event, "DTSTART", &event.start);
    add_zoned_property(&mut ics_event, "DTEND", &event.end);

    ics_event.location(&event.location);

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    ics_event.done()
}

/// Datetime with TZID parameter, e.g.
/// `DTSTART;TZID=America/Los_Angeles:20251015T160000`
fn add_zoned_property(ics_event: &mut icalendar::Event, name: &str, time: &DateTime<Tz>) {
    let mut prop = Property::new(name, time.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", time.timezone().name());
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with RINKCAL (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:RINKCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
