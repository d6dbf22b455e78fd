//! Schedule-to-calendar transformation.
//!
//! Walks the schedule in feed order, keeps the games that have not been
//! played yet, and converts each one into a [`GameEvent`] with a
//! zone-aware start time.

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::GameEvent;
use crate::schedule::{GameRecord, GameState, ScheduleResponse};

/// Wire format of `startTimeUTC`.
const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The feed has no end times; every event spans this long.
const GAME_DURATION_HOURS: i64 = 3;

const GAMECENTER_URL: &str = "https://www.nhl.com/gamecenter";

/// How schedule records are turned into events.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Team abbreviation the calendar is for.
    pub team: String,
    /// Zone start times are rendered in. Fixed per install; the feed's
    /// clubTimezone field is intentionally not consulted.
    pub timezone: Tz,
    /// When set, only home games of `team` are kept ("SEA vs. VAN" titles).
    /// Otherwise every upcoming game is kept ("VAN @ SEA" titles, with a
    /// description block).
    pub filter_by_home_team: bool,
}

impl BuildOptions {
    pub fn new(team: &str, timezone: &str, filter_by_home_team: bool) -> ScheduleResult<Self> {
        let timezone = Tz::from_str(timezone)
            .map_err(|_| ScheduleError::UnknownTimezone(timezone.to_string()))?;

        Ok(BuildOptions {
            team: team.to_string(),
            timezone,
            filter_by_home_team,
        })
    }
}

/// Build one calendar event per upcoming game, preserving feed order.
///
/// A malformed start time aborts the whole run; there is no per-event
/// recovery.
pub fn build_events(
    schedule: &ScheduleResponse,
    opts: &BuildOptions,
) -> ScheduleResult<Vec<GameEvent>> {
    let mut events = Vec::new();

    for game in &schedule.games {
        if game.game_state != GameState::Future {
            continue;
        }

        if opts.filter_by_home_team && !game.home_team.abbrev.eq_ignore_ascii_case(&opts.team) {
            continue;
        }

        events.push(build_event(game, opts)?);
    }

    Ok(events)
}

fn build_event(game: &GameRecord, opts: &BuildOptions) -> ScheduleResult<GameEvent> {
    let away = game.away_team.abbrev.as_str();
    let home = game.home_team.abbrev.as_str();

    let start_utc = parse_start_time(&game.start_time_utc)?;
    let start = start_utc.with_timezone(&opts.timezone);
    let end = start + Duration::hours(GAME_DURATION_HOURS);

    let (title, description) = if opts.filter_by_home_team {
        let title = format!("{} vs. {}", home.to_uppercase(), away.to_uppercase());
        (title, None)
    } else {
        (format!("{away} @ {home}"), Some(describe(game, &start)))
    };

    Ok(GameEvent {
        uid: event_uid(game, &start_utc),
        title,
        start,
        end,
        location: game.venue.default.clone(),
        description,
    })
}

fn parse_start_time(raw: &str) -> ScheduleResult<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, START_TIME_FORMAT).map_err(|source| {
        ScheduleError::TimestampFormat {
            value: raw.to_string(),
            source,
        }
    })?;

    Ok(naive.and_utc())
}

/// Stable per-game UID so that re-running against an unchanged schedule
/// rewrites the file byte for byte.
fn event_uid(game: &GameRecord, start_utc: &DateTime<Utc>) -> String {
    match game.id {
        Some(id) => format!("nhl-{id}@rinkcal"),
        None => format!(
            "{}-{}-{}@rinkcal",
            game.away_team.abbrev.to_lowercase(),
            game.home_team.abbrev.to_lowercase(),
            start_utc.format("%Y%m%dT%H%M%SZ")
        ),
    }
}

/// Description block for the all-games mode, one fact per line.
fn describe(game: &GameRecord, start: &DateTime<Tz>) -> String {
    let away = &game.away_team.abbrev;
    let home = &game.home_team.abbrev;
    let game_type = game.game_type.as_deref().unwrap_or("Regular Season");

    let mut lines = vec![
        format!("{away} @ {home}"),
        format!("Game Type: {game_type}"),
        format!("Start: {}", start.format("%Y-%m-%d %I:%M %p %Z")),
        format!("Location: {}", game.venue.default),
    ];

    if let Some(id) = game.id {
        lines.push(format!("More Info: {GAMECENTER_URL}/{id}"));
    }

    lines.join("\n")
}
