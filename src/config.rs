//! Settings file handling.
//!
//! Settings live in a small TOML file with a single `[settings]` table.
//! When the file is absent the built-in defaults below apply, so the tool
//! also runs stand-alone with no configuration at all.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api-web.nhle.com/v1/club-schedule-season";
const DEFAULT_TEAM: &str = "SEA";
const DEFAULT_SEASON: &str = "20252026";
const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

#[derive(Debug, Deserialize)]
struct SettingsFile {
    settings: Settings,
}

/// Runtime configuration for one export run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub team: String,
    pub season: String,

    #[serde(default)]
    pub debug: bool,

    /// Zone event start times are rendered in. Fixed per install; the
    /// feed's clubTimezone field is intentionally not consulted.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// true: only home games of `team` ("SEA vs. VAN" titles).
    /// false: every upcoming game ("VAN @ SEA" titles with descriptions).
    #[serde(default = "default_filter_by_home_team")]
    pub filter_by_home_team: bool,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_filter_by_home_team() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: DEFAULT_BASE_URL.to_string(),
            team: DEFAULT_TEAM.to_string(),
            season: DEFAULT_SEASON.to_string(),
            debug: false,
            timezone: default_timezone(),
            filter_by_home_team: default_filter_by_home_team(),
        }
    }
}

impl Settings {
    /// URL of the schedule endpoint for this team and season.
    pub fn schedule_url(&self) -> String {
        format!("{}/{}/{}", self.base_url, self.team, self.season)
    }

    /// Calendar file, named from the team code, in the working directory.
    pub fn ics_path(&self) -> String {
        format!("{}_schedule.ics", self.team)
    }

    /// Pretty-printed parsed schedule (debug mode only).
    pub fn dump_txt_path(&self) -> String {
        format!("{}_schedule.txt", self.team)
    }

    /// Raw JSON response (debug mode only).
    pub fn dump_json_path(&self) -> String {
        format!("{}_schedule_debug.json", self.team)
    }
}

/// Load settings from `path`, falling back to the built-in defaults when
/// the file does not exist. A file that exists but is missing a required
/// key (or is not valid TOML) is a fatal error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file at {}", path.display()))?;

    let file: SettingsFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse settings file at {}", path.display()))?;

    Ok(file.settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_settings_file() {
        let toml = r#"
            [settings]
            base_url = "https://api-web.nhle.com/v1/club-schedule-season"
            team = "VAN"
            season = "20252026"
            debug = true
            timezone = "America/Vancouver"
            filter_by_home_team = false
        "#;

        let file: SettingsFile = toml::from_str(toml).unwrap();
        let settings = file.settings;

        assert_eq!(settings.team, "VAN");
        assert!(settings.debug);
        assert_eq!(settings.timezone, "America/Vancouver");
        assert!(!settings.filter_by_home_team);
    }

    #[test]
    fn optional_keys_get_defaults() {
        let toml = r#"
            [settings]
            base_url = "https://api-web.nhle.com/v1/club-schedule-season"
            team = "SEA"
            season = "20252026"
        "#;

        let file: SettingsFile = toml::from_str(toml).unwrap();
        let settings = file.settings;

        assert!(!settings.debug);
        assert_eq!(settings.timezone, "America/Los_Angeles");
        assert!(settings.filter_by_home_team);
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let toml = r#"
            [settings]
            base_url = "https://api-web.nhle.com/v1/club-schedule-season"
            season = "20252026"
        "#;

        assert!(toml::from_str::<SettingsFile>(toml).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("rinkcal.toml")).unwrap();

        assert_eq!(settings.team, "SEA");
        assert_eq!(
            settings.schedule_url(),
            "https://api-web.nhle.com/v1/club-schedule-season/SEA/20252026"
        );
    }

    #[test]
    fn output_paths_are_named_from_the_team_code() {
        let settings = Settings::default();

        assert_eq!(settings.ics_path(), "SEA_schedule.ics");
        assert_eq!(settings.dump_txt_path(), "SEA_schedule.txt");
        assert_eq!(settings.dump_json_path(), "SEA_schedule_debug.json");
    }
}
