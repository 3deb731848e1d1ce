//! Weekly hours cap.
//!
//! Sums a staff member's scheduled work in the Monday-start week that
//! contains the proposed start, adds the proposed shift, and compares the
//! projection with the staff member's weekly limit. `art-22` contracts are
//! exempt and always compliant.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::ComplianceConfig;
use crate::error::{Result, ShiftError};
use crate::models::calendar::minutes_between;
use crate::models::{week_range, Shift, Staff};

/// Outcome of a weekly hours check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether the projected total stays within the limit.
    pub compliant: bool,
    /// Hours already scheduled this week.
    pub current_hours: f64,
    /// Hours scheduled this week including the proposed shift.
    pub projected_hours: f64,
    /// Hours left under the limit after the proposed shift.
    /// `None` = unlimited (exempt contract). Negative when over the limit.
    pub remaining_hours: Option<f64>,
    /// Human-readable status.
    pub message: String,
}

/// Scheduled work minutes for `staff_id` in [week_start, week_end).
///
/// Shifts without a scheduled end count as `missing_end_minutes`.
fn scheduled_minutes_in_week(
    staff_id: &str,
    existing: &[Shift],
    week_start: NaiveDateTime,
    week_end: NaiveDateTime,
    missing_end_minutes: i64,
) -> i64 {
    existing
        .iter()
        .filter(|s| s.staff_id == staff_id && s.is_work())
        .filter(|s| s.scheduled_start >= week_start && s.scheduled_start < week_end)
        .map(|s| s.scheduled_minutes().unwrap_or(missing_end_minutes))
        .sum()
}

pub(super) fn check_weekly(
    config: &ComplianceConfig,
    staff: &Staff,
    existing: &[Shift],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<ComplianceResult> {
    if end < start {
        return Err(ShiftError::InvalidArgument(format!(
            "shift end {end} is before start {start}"
        )));
    }

    let (week_start, week_end) = week_range(start.date());
    let current = scheduled_minutes_in_week(
        &staff.id,
        existing,
        week_start,
        week_end,
        config.missing_end_minutes(),
    );
    let projected = current + minutes_between(start, end);
    let current_hours = current as f64 / 60.0;
    let projected_hours = projected as f64 / 60.0;

    let Some(limit) = staff.weekly_limit_minutes(config.default_weekly_hours) else {
        return Ok(ComplianceResult {
            compliant: true,
            current_hours,
            projected_hours,
            remaining_hours: None,
            message: format!(
                "{} contract: exempt from weekly limit ({projected_hours:.1}h scheduled)",
                staff.contract_type
            ),
        });
    };

    let limit_hours = limit as f64 / 60.0;
    let remaining_hours = (limit - projected) as f64 / 60.0;
    let compliant = projected <= limit;
    let message = if compliant {
        format!(
            "Within weekly limit: {projected_hours:.1}h of {limit_hours:.1}h ({remaining_hours:.1}h remaining)"
        )
    } else {
        format!(
            "Exceeds weekly limit: {projected_hours:.1}h of {limit_hours:.1}h ({:.1}h over)",
            -remaining_hours
        )
    };

    Ok(ComplianceResult {
        compliant,
        current_hours,
        projected_hours,
        remaining_hours: Some(remaining_hours),
        message,
    })
}
