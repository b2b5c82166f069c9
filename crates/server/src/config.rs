use std::{fs, time::Duration};

use consignment_api::DEFAULT_LOCATIONS;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub locations: Vec<String>,
    pub locations_delay_ms: u64,
    pub fail_submissions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            locations: DEFAULT_LOCATIONS.iter().map(|loc| loc.to_string()).collect(),
            locations_delay_ms: 1000,
            fail_submissions: false,
        }
    }
}

/// Shape of `server.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    locations: Option<FileLocations>,
    locations_delay_ms: Option<u64>,
    fail_submissions: Option<bool>,
}

/// `locations` may be a TOML array or the same comma separated string the
/// env var takes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileLocations {
    List(Vec<String>),
    Csv(String),
}

impl Settings {
    pub fn locations_delay(&self) -> Duration {
        Duration::from_millis(self.locations_delay_ms)
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("APP__LOCATIONS") {
        apply_locations(&mut settings, &v);
    }

    if let Ok(v) = std::env::var("APP__LOCATIONS_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.locations_delay_ms = parsed;
        }
    }

    if let Ok(v) = std::env::var("APP__FAIL_SUBMISSIONS") {
        if let Some(parsed) = parse_flag(&v) {
            settings.fail_submissions = parsed;
        }
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable server.toml");
            return;
        }
    };

    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    match file_cfg.locations {
        Some(FileLocations::List(list)) => apply_locations(settings, &list.join(",")),
        Some(FileLocations::Csv(raw)) => apply_locations(settings, &raw),
        None => {}
    }
    if let Some(v) = file_cfg.locations_delay_ms {
        settings.locations_delay_ms = v;
    }
    if let Some(v) = file_cfg.fail_submissions {
        settings.fail_submissions = v;
    }
}

fn apply_locations(settings: &mut Settings, raw: &str) {
    let locations = parse_locations(raw);
    if !locations.is_empty() {
        settings.locations = locations;
    }
}

/// Splits a comma separated list, dropping blanks and repeated names.
pub fn parse_locations(raw: &str) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !locations.iter().any(|known| known == name) {
            locations.push(name.to_string());
        }
    }
    locations
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
