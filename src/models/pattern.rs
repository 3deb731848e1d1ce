//! Split-shift patterns.
//!
//! A pattern is the fixed set of time-of-day fragments a staff member works
//! when assigned to a role for one day. Patterns are data, keyed by role in
//! the generator configuration, rather than hard-coded per role.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Ordered fragments of one day's work for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPattern {
    /// Fragments in chronological order.
    pub fragments: Vec<TimeWindow>,
}

impl SplitPattern {
    /// Creates a pattern from fragments.
    pub fn new(fragments: Vec<TimeWindow>) -> Self {
        Self { fragments }
    }

    /// Kitchen pattern: 10:00–16:00 + 19:00–23:00 (10h).
    pub fn kitchen() -> Self {
        Self::new(vec![TimeWindow::hours(10, 16), TimeWindow::hours(19, 23)])
    }

    /// Floor pattern: 12:00–17:00 + 18:00–23:00 (10h).
    pub fn waiter() -> Self {
        Self::new(vec![TimeWindow::hours(12, 17), TimeWindow::hours(18, 23)])
    }

    /// Total working time across fragments (minutes).
    pub fn total_minutes(&self) -> i64 {
        self.fragments.iter().map(|f| f.duration_minutes()).sum()
    }

    /// Anchors every fragment onto `date`.
    pub fn on(&self, date: NaiveDate) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        self.fragments.iter().map(|f| f.on(date)).collect()
    }
}
