//! The fetch → filter → transform → write pipeline.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rinkcal_core::{build_events, generate_ics, BuildOptions, ScheduleError, ScheduleResponse};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::ScheduleApi;
use crate::config::Settings;

/// Run one export: fetch the schedule, build an event for every upcoming
/// game, and overwrite `{team}_schedule.ics` in the working directory.
pub async fn run(settings: &Settings) -> Result<()> {
    let api = ScheduleApi::new();
    let url = settings.schedule_url();

    let Some(raw) = api.fetch_schedule(&url).await? else {
        // Transport failure was already logged; nothing to write.
        return Ok(());
    };

    if settings.debug {
        write_json_dump(settings, &raw)?;
    }

    let schedule: ScheduleResponse = serde_json::from_value(raw)
        .map_err(|e| ScheduleError::Parse(e.to_string()))
        .context("Schedule response did not match the expected shape")?;

    if settings.debug {
        write_txt_dump(settings, &schedule)?;
    }

    debug!(
        club_timezone = %schedule.club_timezone,
        games = schedule.games.len(),
        "schedule fetched"
    );

    let opts = BuildOptions::new(
        &settings.team,
        &settings.timezone,
        settings.filter_by_home_team,
    )?;
    let events = build_events(&schedule, &opts)?;

    let ics = generate_ics(&events);
    let path = settings.ics_path();
    std::fs::write(&path, ics).with_context(|| format!("Failed to write {path}"))?;

    info!(events = events.len(), path = %path, "calendar written");
    println!("{} {} ({} events)", "Wrote".green(), path, events.len());

    Ok(())
}

/// Raw API response, pretty-printed. Side effect only.
fn write_json_dump(settings: &Settings, raw: &Value) -> Result<()> {
    let path = settings.dump_json_path();
    let pretty = serde_json::to_string_pretty(raw).context("Failed to serialize raw schedule")?;
    std::fs::write(&path, pretty).with_context(|| format!("Failed to write {path}"))?;

    debug!(%path, "raw response dumped");
    Ok(())
}

/// Parsed schedule structure, pretty-printed. Side effect only.
fn write_txt_dump(settings: &Settings, schedule: &ScheduleResponse) -> Result<()> {
    let path = settings.dump_txt_path();
    std::fs::write(&path, format!("{schedule:#?}"))
        .with_context(|| format!("Failed to write {path}"))?;

    debug!(%path, "parsed schedule dumped");
    Ok(())
}
