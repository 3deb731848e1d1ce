//! Live overtime detection.
//!
//! Compares wall-clock time with a shift's scheduled end. An overrun
//! within the grace period is not overtime; overruns at or beyond the
//! horizon are treated as stale records rather than live overtime.
//!
//! # End Anchoring
//! With [`EndAnchoring::TimeOfDay`] the scheduled end's time of day is
//! moved onto today's date before comparing, so a shift that crosses
//! midnight is judged against the wrong day. [`EndAnchoring::Absolute`]
//! compares against the real scheduled end.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::ComplianceConfig;
use crate::models::calendar::minutes_between;
use crate::models::Shift;

/// How the scheduled end is placed on the timeline before comparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndAnchoring {
    /// Scheduled end's time of day, on today's date.
    #[default]
    TimeOfDay,
    /// Scheduled end as recorded.
    Absolute,
}

/// Overtime severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeSeverity {
    Warning,
    Critical,
}

/// Overtime state of a shift at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OvertimeStatus {
    /// The shift has no scheduled end.
    NotApplicable,
    /// Not yet due, within grace, or beyond the horizon.
    OnTime,
    Overtime {
        severity: OvertimeSeverity,
        minutes_over: i64,
    },
}

impl OvertimeStatus {
    pub fn is_overtime(&self) -> bool {
        matches!(self, OvertimeStatus::Overtime { .. })
    }

    pub fn severity(&self) -> Option<OvertimeSeverity> {
        match self {
            OvertimeStatus::Overtime { severity, .. } => Some(*severity),
            _ => None,
        }
    }
}

pub(super) fn overtime_status(
    config: &ComplianceConfig,
    shift: &Shift,
    now: NaiveDateTime,
) -> OvertimeStatus {
    let Some(end) = shift.scheduled_end else {
        return OvertimeStatus::NotApplicable;
    };

    let reference = match config.end_anchoring {
        EndAnchoring::TimeOfDay => now.date().and_time(end.time()),
        EndAnchoring::Absolute => end,
    };
    classify(config, minutes_between(reference, now))
}

fn classify(config: &ComplianceConfig, diff: i64) -> OvertimeStatus {
    if diff <= config.overtime_grace_minutes || diff >= config.overtime_horizon_minutes {
        return OvertimeStatus::OnTime;
    }
    let severity = if diff <= config.overtime_critical_minutes {
        OvertimeSeverity::Warning
    } else {
        OvertimeSeverity::Critical
    };
    OvertimeStatus::Overtime {
        severity,
        minutes_over: diff,
    }
}
