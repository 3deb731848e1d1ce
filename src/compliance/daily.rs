//! Daily hours cap.
//!
//! A day's work may be split into several fragments; the cap applies to
//! their combined duration, not to each block.

use serde::{Deserialize, Serialize};

use crate::config::ComplianceConfig;
use crate::models::Shift;

/// Outcome of a daily hours check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHoursResult {
    pub compliant: bool,
    /// Hours of the supplied same-day fragments.
    pub existing_hours: f64,
    /// Existing plus new hours.
    pub total_hours: f64,
    pub cap_hours: f64,
    pub message: String,
}

pub(super) fn check_daily(
    config: &ComplianceConfig,
    existing_for_day: &[Shift],
    new_duration_hours: f64,
) -> DailyHoursResult {
    let existing: i64 = existing_for_day.iter().map(Shift::duration_minutes).sum();
    let total = existing + (new_duration_hours * 60.0).round() as i64;
    let cap = config.daily_cap_minutes();

    let total_hours = total as f64 / 60.0;
    let cap_hours = cap as f64 / 60.0;
    let compliant = total <= cap;
    let message = if compliant {
        format!("{total_hours:.1}h of {cap_hours:.1}h daily cap")
    } else {
        format!("Daily cap exceeded: {total_hours:.1}h > {cap_hours:.1}h")
    };

    DailyHoursResult {
        compliant,
        existing_hours: existing as f64 / 60.0,
        total_hours,
        cap_hours,
        message,
    }
}
