//! Coverage of demand by generated shifts.
//!
//! Diffs the demand profile against scheduled work shifts, hour by hour,
//! so callers can see which slots a generation run left unfilled.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required staff-hours | Sum of hourly requirements |
//! | Covered staff-hours | Sum of min(required, scheduled) per hour |
//! | Fill rate | covered / required (1.0 when nothing is required) |
//! | Gaps | Hours where scheduled < required |

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::demand::DemandProfile;
use crate::models::calendar::start_of_day;
use crate::models::{Role, Shift};

/// An hour where demand exceeds scheduled staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub date: NaiveDate,
    pub role: Role,
    pub hour: u32,
    pub required: u32,
    pub scheduled: u32,
}

impl CoverageGap {
    /// Staff missing in this hour.
    pub fn shortfall(&self) -> u32 {
        self.required - self.scheduled
    }
}

/// Demand coverage summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub required_staff_hours: u32,
    pub covered_staff_hours: u32,
    /// Fraction of required staff-hours covered (0.0..1.0).
    pub fill_rate: f64,
    pub gaps: Vec<CoverageGap>,
}

impl CoverageReport {
    /// Computes coverage for `roles` on `dates`.
    ///
    /// A work shift counts toward an hour of its recorded role when it
    /// spans the whole hour.
    pub fn calculate(
        profile: &DemandProfile,
        shifts: &[Shift],
        roles: &[Role],
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        let mut required_total = 0;
        let mut covered_total = 0;
        let mut gaps = Vec::new();

        for date in dates {
            for &role in roles {
                for demand in profile.curve(role, date) {
                    let slot_start = start_of_day(date) + Duration::hours(i64::from(demand.hour));
                    let slot_end = slot_start + Duration::hours(1);
                    let scheduled = shifts
                        .iter()
                        .filter(|s| s.is_work() && s.role == Some(role))
                        .filter_map(Shift::effective_interval)
                        .filter(|&(start, end)| start <= slot_start && end >= slot_end)
                        .count() as u32;

                    required_total += demand.required;
                    covered_total += demand.required.min(scheduled);
                    if scheduled < demand.required {
                        gaps.push(CoverageGap {
                            date,
                            role,
                            hour: demand.hour,
                            required: demand.required,
                            scheduled,
                        });
                    }
                }
            }
        }

        let fill_rate = if required_total == 0 {
            1.0
        } else {
            f64::from(covered_total) / f64::from(required_total)
        };

        Self {
            required_staff_hours: required_total,
            covered_staff_hours: covered_total,
            fill_rate,
            gaps,
        }
    }

    /// Whether every required staff-hour is covered.
    pub fn is_fully_covered(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Gaps for one role on one date.
    pub fn gaps_for(&self, date: NaiveDate, role: Role) -> Vec<&CoverageGap> {
        self.gaps
            .iter()
            .filter(|g| g.date == date && g.role == role)
            .collect()
    }

    /// Total missing staff-hours.
    pub fn total_shortfall(&self) -> u32 {
        self.gaps.iter().map(CoverageGap::shortfall).sum()
    }
}
