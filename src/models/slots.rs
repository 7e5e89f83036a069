use serde::{Deserialize, Serialize};

/// Hourly slots offered when the backend cannot be asked.
pub const DEFAULT_TIME_SLOTS: [&str; 9] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM",
    "04:00 PM", "05:00 PM",
];

pub fn default_time_slots() -> Vec<String> {
    DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableTimes {
    pub available_times: Vec<String>,
    #[serde(default)]
    pub booked_times: Vec<String>,
}
