use std::time::Duration;

pub const DEFAULT_SUCCESS_RESET_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    /// How long the success banner stays up before the form returns to idle.
    pub success_reset_delay: Duration,
    pub event_capacity: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            success_reset_delay: DEFAULT_SUCCESS_RESET_DELAY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl FormSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(v) = std::env::var("APP__SUCCESS_RESET_DELAY_MS") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.success_reset_delay = Duration::from_millis(parsed);
            }
        }
        if let Ok(v) = std::env::var("APP__EVENT_CAPACITY") {
            if let Ok(parsed) = v.parse::<usize>() {
                if parsed > 0 {
                    settings.event_capacity = parsed;
                }
            }
        }

        settings
    }
}
