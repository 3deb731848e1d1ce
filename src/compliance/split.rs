//! Split-shift legality.
//!
//! A day's fragments are legal when each has a positive length and, taken
//! in start order, no fragment begins before the previous one ends.

use serde::{Deserialize, Serialize};

use crate::models::calendar::minutes_between;
use crate::models::{Shift, TimeWindow};

/// Outcome of a split-shift check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitShiftResult {
    pub legal: bool,
    /// Fragments evaluated (those with a known interval).
    pub fragment_count: usize,
    /// Combined fragment duration (minutes).
    pub total_minutes: i64,
    /// Break between consecutive fragments (minutes), in start order.
    pub gaps_minutes: Vec<i64>,
    pub message: String,
}

/// Checks intervals given as (start, end) minutes on a common axis.
fn check_intervals(mut intervals: Vec<(i64, i64)>) -> SplitShiftResult {
    intervals.sort_by_key(|&(start, _)| start);

    let fragment_count = intervals.len();
    let total_minutes: i64 = intervals.iter().map(|(s, e)| e - s).sum();
    let gaps_minutes: Vec<i64> = intervals.windows(2).map(|w| w[1].0 - w[0].1).collect();

    let message = if let Some(i) = intervals.iter().position(|(s, e)| e <= s) {
        format!("Fragment {} has no positive duration", i + 1)
    } else if let Some(i) = gaps_minutes.iter().position(|&g| g < 0) {
        format!(
            "Fragments {} and {} overlap by {} min",
            i + 1,
            i + 2,
            -gaps_minutes[i]
        )
    } else {
        String::new()
    };

    let legal = message.is_empty();
    let message = if legal {
        format!(
            "{fragment_count} fragment(s), {:.1}h total",
            total_minutes as f64 / 60.0
        )
    } else {
        message
    };

    SplitShiftResult {
        legal,
        fragment_count,
        total_minutes,
        gaps_minutes,
        message,
    }
}

/// Checks time-of-day windows, e.g. a configured pattern.
pub(super) fn check_split_windows(windows: &[TimeWindow]) -> SplitShiftResult {
    check_intervals(
        windows
            .iter()
            .map(|w| (w.start_minute, w.end_minute))
            .collect(),
    )
}

/// Checks shift records. Fragments without a known interval are ignored.
pub(super) fn check_split(fragments: &[Shift]) -> SplitShiftResult {
    let intervals: Vec<_> = fragments
        .iter()
        .filter_map(Shift::effective_interval)
        .collect();
    let Some(origin) = intervals.iter().map(|(start, _)| *start).min() else {
        return check_intervals(Vec::new());
    };
    check_intervals(
        intervals
            .into_iter()
            .map(|(s, e)| (minutes_between(origin, s), minutes_between(origin, e)))
            .collect(),
    )
}
