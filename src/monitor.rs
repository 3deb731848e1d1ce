//! Overtime monitor.
//!
//! Polled per active shift (clocked in, not clocked out). Delegates to the
//! compliance engine's overtime check and surfaces alerts; it never
//! mutates shift records and keeps no state between calls.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::compliance::{ComplianceEngine, OvertimeSeverity, OvertimeStatus};
use crate::models::Shift;

/// An active shift running past its scheduled end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeAlert {
    pub shift_id: String,
    pub staff_id: String,
    pub severity: OvertimeSeverity,
    pub minutes_over: i64,
    pub scheduled_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct OvertimeMonitor {
    engine: ComplianceEngine,
}

impl OvertimeMonitor {
    pub fn new(engine: ComplianceEngine) -> Self {
        Self { engine }
    }

    /// Overtime state of one shift.
    pub fn check(&self, shift: &Shift, now: NaiveDateTime) -> OvertimeStatus {
        self.engine.overtime_status(shift, now)
    }

    /// Alerts for every active shift in overtime at `now`.
    pub fn scan(&self, shifts: &[Shift], now: NaiveDateTime) -> Vec<OvertimeAlert> {
        shifts
            .iter()
            .filter(|s| s.is_active())
            .filter_map(|shift| match self.check(shift, now) {
                OvertimeStatus::Overtime {
                    severity,
                    minutes_over,
                } => {
                    warn!(
                        shift = %shift.id,
                        staff = %shift.staff_id,
                        ?severity,
                        minutes_over,
                        "shift running over"
                    );
                    Some(OvertimeAlert {
                        shift_id: shift.id.clone(),
                        staff_id: shift.staff_id.clone(),
                        severity,
                        minutes_over,
                        scheduled_end: shift.scheduled_end,
                    })
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_check_delegates() {
        let monitor = OvertimeMonitor::default();
        let s = Shift::work("S1", at(10, 0), at(16, 0)).with_actual_start(at(10, 0));
        assert_eq!(
            monitor.check(&s, at(17, 30)).severity(),
            Some(OvertimeSeverity::Critical)
        );
    }

    #[test]
    fn test_scan_only_active_overtime() {
        let monitor = OvertimeMonitor::default();
        let shifts = vec![
            // Active, 20 min over
            Shift::work("S1", at(10, 0), at(16, 0)).with_actual_start(at(10, 0)),
            // Clocked out
            Shift::work("S2", at(10, 0), at(16, 0))
                .with_actual_start(at(10, 0))
                .with_actual_end(at(16, 20)),
            // Not clocked in
            Shift::work("S3", at(10, 0), at(16, 0)),
            // Active, not yet due
            Shift::work("S4", at(12, 0), at(20, 0)).with_actual_start(at(12, 0)),
        ];
        let alerts = monitor.scan(&shifts, at(16, 20));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].staff_id, "S1");
        assert_eq!(alerts[0].severity, OvertimeSeverity::Warning);
        assert_eq!(alerts[0].minutes_over, 20);
    }

    #[test]
    fn test_scan_does_not_mutate() {
        let monitor = OvertimeMonitor::default();
        let shifts = vec![Shift::work("S1", at(10, 0), at(16, 0)).with_actual_start(at(10, 0))];
        let before = shifts.clone();
        let _ = monitor.scan(&shifts, at(18, 0));
        assert_eq!(shifts, before);
        assert!(!shifts[0].is_overtime);
    }
}
