//! Shift (assignment) model.
//!
//! A shift records that a staff member is scheduled, off, or sick during
//! a wall-clock interval. Only `work` shifts count toward hour caps.
//! A split shift is stored as two `work` records on the same date.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::minutes_between;
use super::Role;

/// A shift record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Assigned staff identifier.
    pub staff_id: String,
    /// Shift kind.
    pub shift_type: ShiftType,
    /// Scheduled start.
    pub scheduled_start: NaiveDateTime,
    /// Scheduled end. `None` for open-ended records.
    #[serde(default)]
    pub scheduled_end: Option<NaiveDateTime>,
    /// Clock-in time.
    #[serde(default)]
    pub actual_start: Option<NaiveDateTime>,
    /// Clock-out time.
    #[serde(default)]
    pub actual_end: Option<NaiveDateTime>,
    /// Set once the shift has run past its scheduled end.
    #[serde(default)]
    pub is_overtime: bool,
    /// Role the shift was generated for (denormalized for coverage queries).
    #[serde(default)]
    pub role: Option<Role>,
}

/// Shift kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Work,
    DayOff,
    Sick,
}

/// Partial update applied by clock-out or manual edits.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftUpdate {
    pub shift_type: Option<ShiftType>,
    pub scheduled_start: Option<NaiveDateTime>,
    pub scheduled_end: Option<NaiveDateTime>,
    pub actual_start: Option<NaiveDateTime>,
    pub actual_end: Option<NaiveDateTime>,
    pub is_overtime: Option<bool>,
}

impl Shift {
    /// Creates a shift with an explicit identifier.
    pub fn new(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        shift_type: ShiftType,
        scheduled_start: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            shift_type,
            scheduled_start,
            scheduled_end: None,
            actual_start: None,
            actual_end: None,
            is_overtime: false,
            role: None,
        }
    }

    /// Creates a scheduled work shift with a fresh identifier.
    pub fn work(staff_id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(Uuid::new_v4().to_string(), staff_id, ShiftType::Work, start).with_end(end)
    }

    /// Sets the scheduled end.
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.scheduled_end = Some(end);
        self
    }

    /// Sets the role the shift covers.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the clock-in time.
    pub fn with_actual_start(mut self, at: NaiveDateTime) -> Self {
        self.actual_start = Some(at);
        self
    }

    /// Sets the clock-out time.
    pub fn with_actual_end(mut self, at: NaiveDateTime) -> Self {
        self.actual_end = Some(at);
        self
    }

    /// Whether this shift counts toward hour caps.
    #[inline]
    pub fn is_work(&self) -> bool {
        self.shift_type == ShiftType::Work
    }

    /// Whether the staff member has clocked in but not out.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.actual_start.is_some() && self.actual_end.is_none()
    }

    /// Calendar date of the scheduled start.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.scheduled_start.date()
    }

    /// Scheduled duration (minutes), if the scheduled end is known.
    pub fn scheduled_minutes(&self) -> Option<i64> {
        self.scheduled_end
            .map(|end| minutes_between(self.scheduled_start, end))
    }

    /// Interval used for duration checks.
    ///
    /// Scheduled start/end when the scheduled end is known, otherwise
    /// actual start/end when both are recorded.
    pub fn effective_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.scheduled_end, self.actual_start, self.actual_end) {
            (Some(end), _, _) => Some((self.scheduled_start, end)),
            (None, Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Duration of the effective interval (minutes, 0 if unknown).
    pub fn duration_minutes(&self) -> i64 {
        self.effective_interval()
            .map(|(start, end)| minutes_between(start, end))
            .unwrap_or(0)
    }

    /// Applies a partial update in place.
    pub fn apply(&mut self, update: &ShiftUpdate) {
        if let Some(shift_type) = update.shift_type {
            self.shift_type = shift_type;
        }
        if let Some(start) = update.scheduled_start {
            self.scheduled_start = start;
        }
        if let Some(end) = update.scheduled_end {
            self.scheduled_end = Some(end);
        }
        if let Some(at) = update.actual_start {
            self.actual_start = Some(at);
        }
        if let Some(at) = update.actual_end {
            self.actual_end = Some(at);
        }
        if let Some(flag) = update.is_overtime {
            self.is_overtime = flag;
        }
    }
}
