//! Compliance rule engine.
//!
//! Stateless validators for labor-time limits. Every check is read-only
//! against the shift data it is handed, so checks for different staff may
//! run concurrently.
//!
//! # Checks
//!
//! | Check | Rule |
//! |-------|------|
//! | Weekly hours | Monday-start week total ≤ staff limit (default 40h); `art-22` exempt |
//! | Daily hours | Same-day fragments total ≤ 10h |
//! | Split shift | Fragments have positive length and do not overlap |
//! | Overtime | 10 min < overrun < 24h; warning ≤ 60 min < critical |
//!
//! Violations are reported as values. Only malformed input (unknown staff,
//! reversed intervals) is an error.
//!
//! # Usage
//!
//! ```
//! use u_shift::compliance::ComplianceEngine;
//!
//! let engine = ComplianceEngine::default();
//! assert!(engine.is_daily_compliant(&[], 10.0));
//! assert!(!engine.is_daily_compliant(&[], 10.5));
//! ```

mod daily;
mod overtime;
mod split;
mod weekly;

pub use daily::DailyHoursResult;
pub use overtime::{EndAnchoring, OvertimeSeverity, OvertimeStatus};
pub use split::SplitShiftResult;
pub use weekly::ComplianceResult;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::ComplianceConfig;
use crate::error::{Result, ShiftError};
use crate::models::calendar::minutes_between;
use crate::models::{Shift, SplitPattern, Staff, TimeWindow};

/// Combined verdict for a manually created or edited shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftReview {
    /// Overall verdict. Exempt staff are not held to the daily cap.
    pub compliant: bool,
    pub weekly: ComplianceResult,
    pub daily: DailyHoursResult,
    pub split: SplitShiftResult,
    /// One line per failed check.
    pub violations: Vec<String>,
}

/// Labor-time validators sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    config: ComplianceConfig,
}

impl ComplianceEngine {
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Weekly hours check for a proposed shift.
    ///
    /// `existing` may contain shifts of any staff and week; only the staff
    /// member's work shifts starting in the week of `start` are counted.
    pub fn check_weekly(
        &self,
        staff: &Staff,
        existing: &[Shift],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ComplianceResult> {
        weekly::check_weekly(&self.config, staff, existing, start, end)
    }

    /// Weekly hours check by staff identifier.
    ///
    /// Fails with `NotFound` when `staff_id` is not in the roster.
    pub fn check_weekly_by_id(
        &self,
        roster: &[Staff],
        existing: &[Shift],
        staff_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ComplianceResult> {
        let staff = roster
            .iter()
            .find(|s| s.id == staff_id)
            .ok_or_else(|| ShiftError::NotFound(staff_id.to_string()))?;
        self.check_weekly(staff, existing, start, end)
    }

    /// Daily hours check: supplied same-day fragments plus `new_duration_hours`.
    pub fn check_daily(&self, existing_for_day: &[Shift], new_duration_hours: f64) -> DailyHoursResult {
        daily::check_daily(&self.config, existing_for_day, new_duration_hours)
    }

    pub fn is_daily_compliant(&self, existing_for_day: &[Shift], new_duration_hours: f64) -> bool {
        self.check_daily(existing_for_day, new_duration_hours).compliant
    }

    /// Split-shift legality of one day's fragments.
    pub fn check_split(&self, fragments: &[Shift]) -> SplitShiftResult {
        split::check_split(fragments)
    }

    /// Split-shift legality of time-of-day windows.
    pub fn check_split_windows(&self, windows: &[TimeWindow]) -> SplitShiftResult {
        split::check_split_windows(windows)
    }

    /// Overtime state of `shift` at `now`.
    pub fn overtime_status(&self, shift: &Shift, now: NaiveDateTime) -> OvertimeStatus {
        overtime::overtime_status(&self.config, shift, now)
    }

    /// Verifies a split pattern is legal and fits the daily cap.
    pub fn validate_pattern(&self, pattern: &SplitPattern) -> Result<()> {
        if pattern.fragments.is_empty() {
            return Err(ShiftError::InvalidConfig(
                "split pattern has no fragments".to_string(),
            ));
        }
        let split = self.check_split_windows(&pattern.fragments);
        if !split.legal {
            return Err(ShiftError::InvalidConfig(split.message));
        }
        let hours = pattern.total_minutes() as f64 / 60.0;
        let daily = self.check_daily(&[], hours);
        if !daily.compliant {
            return Err(ShiftError::InvalidConfig(daily.message));
        }
        Ok(())
    }

    /// Whether one day's split assignment may be added for `staff`.
    ///
    /// Fragments are added to `week_minutes` in order and each running
    /// total must stay within the weekly limit (`art-22` has none); their
    /// combined length must also fit the daily cap. Used by the generator
    /// before it commits a candidate.
    pub fn admits_assignment(
        &self,
        staff: &Staff,
        week_minutes: i64,
        fragments: &[(NaiveDateTime, NaiveDateTime)],
    ) -> bool {
        let day_minutes: i64 = fragments
            .iter()
            .map(|&(start, end)| minutes_between(start, end))
            .sum();
        if !self.is_daily_compliant(&[], day_minutes as f64 / 60.0) {
            return false;
        }
        let Some(limit) = staff.weekly_limit_minutes(self.config.default_weekly_hours) else {
            return true;
        };
        let mut total = week_minutes;
        fragments.iter().all(|&(start, end)| {
            total += minutes_between(start, end);
            total <= limit
        })
    }

    /// Revalidates a manual shift against the staff member's other shifts.
    ///
    /// `others` may include the shift itself (matched by id); it is not
    /// counted twice. Non-work shifts are trivially compliant.
    pub fn review_shift(&self, staff: &Staff, shift: &Shift, others: &[Shift]) -> Result<ShiftReview> {
        let others: Vec<Shift> = others
            .iter()
            .filter(|s| s.id != shift.id && s.staff_id == staff.id)
            .cloned()
            .collect();

        let (start, end) = if shift.is_work() {
            shift
                .effective_interval()
                .unwrap_or((shift.scheduled_start, shift.scheduled_start))
        } else {
            (shift.scheduled_start, shift.scheduled_start)
        };
        let weekly = self.check_weekly(staff, &others, start, end)?;

        let same_day: Vec<Shift> = others
            .iter()
            .filter(|s| s.is_work() && s.date() == shift.date())
            .cloned()
            .collect();
        let new_hours = if shift.is_work() {
            shift.duration_minutes() as f64 / 60.0
        } else {
            0.0
        };
        let daily = self.check_daily(&same_day, new_hours);

        let mut fragments = same_day;
        if shift.is_work() {
            fragments.push(shift.clone());
        }
        let split = self.check_split(&fragments);

        let mut violations = Vec::new();
        if !weekly.compliant {
            violations.push(weekly.message.clone());
        }
        if !daily.compliant && !staff.is_exempt() {
            violations.push(daily.message.clone());
        }
        if !split.legal {
            violations.push(split.message.clone());
        }

        Ok(ShiftReview {
            compliant: violations.is_empty(),
            weekly,
            daily,
            split,
            violations,
        })
    }
}
