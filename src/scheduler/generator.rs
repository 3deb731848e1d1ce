//! Greedy split-shift schedule generator.
//!
//! # Algorithm
//!
//! 1. Seed per-week accumulators (minutes worked, dates worked) from
//!    existing work shifts; record days off and sick days.
//! 2. Skip dates before `min_date` (or today): no retroactive scheduling.
//! 3. For each date in order, for each configured role:
//!    - required = skeleton crew × peak multiplier (Fri/Sat)
//!    - candidates = role match or `universal`, stably sorted by
//!      distinct days worked this week (fewest first)
//!    - a candidate is skipped when already working that date, off that
//!      date, at the weekly day limit, or at the weekly hours cap
//!    - the role's split pattern is committed all-or-nothing: the
//!      compliance engine must admit every fragment under the weekly cap
//!      and the day's total under the daily cap
//! 4. Return the new shifts sorted by scheduled start.
//!
//! Unfilled slots are not errors; compare the output against the demand
//! profile to find them.
//!
//! # Complexity
//! O(d · r · s log s) where d = days, r = roles, s = staff.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Days, Duration, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::compliance::ComplianceEngine;
use crate::config::GeneratorConfig;
use crate::error::{Result, ShiftError};
use crate::models::calendar::start_of_day;
use crate::models::{is_peak_day, week_start, Shift, ShiftType, Staff};
use crate::validation::validate_roster;

/// Longest range a single run may cover.
pub const MAX_GENERATION_DAYS: i64 = 366;

/// Input container for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// First date to consider.
    pub start_date: NaiveDate,
    /// Number of consecutive dates to consider.
    pub num_days: i64,
    /// Dates before this are skipped. `None` = today.
    pub min_date: Option<NaiveDate>,
}

impl GenerationRequest {
    /// Creates a request covering `num_days` dates from `start_date`.
    pub fn new(start_date: NaiveDate, num_days: i64) -> Self {
        Self {
            start_date,
            num_days,
            min_date: None,
        }
    }

    /// Creates a request covering `start..=end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ShiftError::InvalidArgument(format!(
                "date range ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self::new(start, (end - start).num_days() + 1))
    }

    /// Sets the retroactivity threshold.
    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// First date after the range.
    ///
    /// Saturates at [`NaiveDate::MAX`]; [`validate`](Self::validate) rejects
    /// such ranges before a run.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(self.num_days.max(0).unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Dates in the range, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let count = usize::try_from(self.num_days.max(0)).unwrap_or(usize::MAX);
        self.start_date.iter_days().take(count)
    }

    /// Week-aligned span whose existing shifts must be seen by the run:
    /// Monday of the first week to Monday after the last week.
    pub fn seed_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let last = self.end_date().pred_opt().unwrap_or(self.start_date);
        let after = start_of_day(week_start(last))
            .checked_add_signed(Duration::days(7))
            .unwrap_or(NaiveDateTime::MAX);
        (start_of_day(week_start(self.start_date)), after)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.num_days <= 0 {
            return Err(ShiftError::InvalidArgument(format!(
                "number of days must be positive, got {}",
                self.num_days
            )));
        }
        if self.num_days > MAX_GENERATION_DAYS {
            return Err(ShiftError::InvalidArgument(format!(
                "number of days must be at most {MAX_GENERATION_DAYS}, got {}",
                self.num_days
            )));
        }
        let in_calendar = self
            .start_date
            .checked_add_days(Days::new(self.num_days.unsigned_abs()))
            .is_some();
        if !in_calendar {
            return Err(ShiftError::InvalidArgument(format!(
                "range of {} days from {} leaves the calendar",
                self.num_days, self.start_date
            )));
        }
        Ok(())
    }
}

/// Per-run accumulators, keyed by (staff, week start).
#[derive(Debug, Default)]
struct RunLedger {
    week_minutes: HashMap<(String, NaiveDate), i64>,
    week_days: HashMap<(String, NaiveDate), BTreeSet<NaiveDate>>,
    unavailable: HashSet<(String, NaiveDate)>,
}

impl RunLedger {
    fn seed(
        existing: &[Shift],
        window: (NaiveDateTime, NaiveDateTime),
        missing_end_minutes: i64,
    ) -> Self {
        let mut ledger = Self::default();
        for shift in existing
            .iter()
            .filter(|s| s.scheduled_start >= window.0 && s.scheduled_start < window.1)
        {
            match shift.shift_type {
                ShiftType::Work => ledger.record(
                    &shift.staff_id,
                    shift.date(),
                    shift.scheduled_minutes().unwrap_or(missing_end_minutes),
                ),
                ShiftType::DayOff | ShiftType::Sick => {
                    ledger
                        .unavailable
                        .insert((shift.staff_id.clone(), shift.date()));
                }
            }
        }
        ledger
    }

    fn minutes(&self, staff_id: &str, week: NaiveDate) -> i64 {
        self.week_minutes
            .get(&(staff_id.to_string(), week))
            .copied()
            .unwrap_or(0)
    }

    fn days_worked(&self, staff_id: &str, week: NaiveDate) -> usize {
        self.week_days
            .get(&(staff_id.to_string(), week))
            .map_or(0, BTreeSet::len)
    }

    fn works_on(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.week_days
            .get(&(staff_id.to_string(), week_start(date)))
            .is_some_and(|days| days.contains(&date))
    }

    fn is_unavailable(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.unavailable.contains(&(staff_id.to_string(), date))
    }

    fn record(&mut self, staff_id: &str, date: NaiveDate, minutes: i64) {
        let key = (staff_id.to_string(), week_start(date));
        *self.week_minutes.entry(key.clone()).or_insert(0) += minutes;
        self.week_days.entry(key).or_default().insert(date);
    }
}

/// Greedy, constraint-satisfying roster generator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_shift::models::{Role, Staff};
/// use u_shift::scheduler::{GenerationRequest, ScheduleGenerator};
///
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let roster = vec![Staff::new("K1", Role::Kitchen)];
/// let request = GenerationRequest::new(monday, 1).with_min_date(monday);
///
/// let shifts = ScheduleGenerator::default()
///     .generate(&roster, &[], &request)
///     .unwrap();
/// assert_eq!(shifts.len(), 2); // 10:00–16:00 and 19:00–23:00
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
    engine: ComplianceEngine,
    today: Option<NaiveDate>,
}

impl ScheduleGenerator {
    /// Creates a generator, validating every role pattern once.
    pub fn new(config: GeneratorConfig, engine: ComplianceEngine) -> Result<Self> {
        if config.peak_multiplier == 0 {
            return Err(ShiftError::InvalidConfig(
                "peak_multiplier must be at least 1".to_string(),
            ));
        }
        for staffing in &config.staffing {
            engine.validate_pattern(&staffing.pattern).map_err(|e| {
                ShiftError::InvalidConfig(format!("pattern for role '{}': {e}", staffing.role))
            })?;
        }
        Ok(Self {
            config,
            engine,
            today: None,
        })
    }

    /// Pins the date used as the default retroactivity threshold.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Proposes new shifts for the requested dates.
    ///
    /// `existing` should hold every persisted shift in
    /// [`GenerationRequest::seed_window`]; shifts outside it are ignored.
    /// The result is not persisted.
    pub fn generate(
        &self,
        roster: &[Staff],
        existing: &[Shift],
        request: &GenerationRequest,
    ) -> Result<Vec<Shift>> {
        request.validate()?;

        if let Err(errors) = validate_roster(roster) {
            for e in &errors {
                warn!(kind = ?e.kind, "{}", e.message);
            }
        }

        let rules = self.engine.config();
        let threshold = request
            .min_date
            .or(self.today)
            .unwrap_or_else(|| Local::now().date_naive());
        let mut ledger = RunLedger::seed(existing, request.seed_window(), rules.missing_end_minutes());
        let mut generated = Vec::new();

        for date in request.dates() {
            if date < threshold {
                debug!(%date, %threshold, "skipping date before threshold");
                continue;
            }
            let week = week_start(date);
            let multiplier = if is_peak_day(date) {
                self.config.peak_multiplier
            } else {
                1
            };

            for staffing in &self.config.staffing {
                let required = staffing.skeleton_crew * multiplier;
                let mut candidates: Vec<&Staff> =
                    roster.iter().filter(|s| s.can_fill(staffing.role)).collect();
                candidates.sort_by_key(|s| ledger.days_worked(&s.id, week));

                let mut filled = 0;
                for staff in candidates {
                    if filled >= required {
                        break;
                    }
                    if ledger.works_on(&staff.id, date) || ledger.is_unavailable(&staff.id, date) {
                        continue;
                    }
                    if ledger.days_worked(&staff.id, week) >= rules.max_days_per_week {
                        continue;
                    }
                    let worked = ledger.minutes(&staff.id, week);
                    let fragments = staffing.pattern.on(date);
                    if !self.engine.admits_assignment(staff, worked, &fragments) {
                        debug!(staff = %staff.id, %date, role = %staffing.role, worked, "split shift exceeds hour caps");
                        continue;
                    }

                    generated.extend(fragments.into_iter().map(|(start, end)| {
                        Shift::work(&staff.id, start, end).with_role(staffing.role)
                    }));
                    ledger.record(&staff.id, date, staffing.pattern.total_minutes());
                    filled += 1;
                }

                if filled < required {
                    debug!(%date, role = %staffing.role, filled, required, "demand unmet");
                }
            }
        }

        generated.sort_by_key(|s| s.scheduled_start);
        info!(
            shifts = generated.len(),
            start = %request.start_date,
            days = request.num_days,
            "schedule generated"
        );
        Ok(generated)
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            engine: ComplianceEngine::default(),
            today: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoleStaffing;
    use crate::models::{ContractType, Role, SplitPattern, TimeWindow};

    // 2024-03-04 is a Monday.
    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn week_from_monday() -> GenerationRequest {
        GenerationRequest::new(day(4), 7).with_min_date(day(4))
    }

    fn for_staff<'a>(shifts: &'a [Shift], id: &str) -> Vec<&'a Shift> {
        shifts.iter().filter(|s| s.staff_id == id).collect()
    }

    fn dates_of(shifts: &[&Shift]) -> BTreeSet<NaiveDate> {
        shifts.iter().map(|s| s.date()).collect()
    }

    fn minutes_of(shifts: &[&Shift]) -> i64 {
        shifts.iter().map(|s| s.duration_minutes()).sum()
    }

    #[test]
    fn test_kitchen_and_waiter_week() {
        let roster = vec![
            Staff::new("K1", Role::Kitchen)
                .with_contract(ContractType::FortyFourHours)
                .with_weekly_limit(44.0),
            Staff::new("W1", Role::Waiter)
                .with_contract(ContractType::FortyFourHours)
                .with_weekly_limit(44.0),
        ];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &week_from_monday())
            .unwrap();

        for id in ["K1", "W1"] {
            let own = for_staff(&shifts, id);
            // Mon–Thu fit (40h); a fifth 10h day would exceed 44h.
            assert_eq!(dates_of(&own), (4..=7).map(day).collect::<BTreeSet<_>>());
            assert_eq!(own.len(), 8);
            assert!(minutes_of(&own) <= 2640);
        }

        let kitchen_monday: Vec<_> = for_staff(&shifts, "K1")
            .into_iter()
            .filter(|s| s.date() == day(4))
            .collect();
        assert_eq!(kitchen_monday[0].scheduled_start, at(4, 10));
        assert_eq!(kitchen_monday[0].scheduled_end, Some(at(4, 16)));
        assert_eq!(kitchen_monday[1].scheduled_start, at(4, 19));
        assert_eq!(kitchen_monday[1].scheduled_end, Some(at(4, 23)));
        assert!(kitchen_monday.iter().all(|s| s.role == Some(Role::Kitchen)));

        let waiter_monday: Vec<_> = for_staff(&shifts, "W1")
            .into_iter()
            .filter(|s| s.date() == day(4))
            .collect();
        assert_eq!(waiter_monday[0].scheduled_start, at(4, 12));
        assert_eq!(waiter_monday[1].scheduled_end, Some(at(4, 23)));
    }

    #[test]
    fn test_output_sorted_by_start() {
        let roster = vec![Staff::new("W1", Role::Waiter), Staff::new("K1", Role::Kitchen)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &week_from_monday())
            .unwrap();
        assert!(shifts
            .windows(2)
            .all(|w| w[0].scheduled_start <= w[1].scheduled_start));
    }

    #[test]
    fn test_one_assignment_per_staff_per_day() {
        let roster = vec![
            Staff::new("U1", Role::Universal).with_contract(ContractType::Art22),
            Staff::new("U2", Role::Universal).with_contract(ContractType::Art22),
            Staff::new("U3", Role::Universal),
        ];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &GenerationRequest::new(day(4), 14).with_min_date(day(4)))
            .unwrap();

        let mut per_day: HashMap<(String, NaiveDate), Vec<&Shift>> = HashMap::new();
        for s in &shifts {
            per_day.entry((s.staff_id.clone(), s.date())).or_default().push(s);
        }
        for frags in per_day.values() {
            assert_eq!(frags.len(), 2);
            assert_eq!(frags[0].role, frags[1].role);
        }
    }

    #[test]
    fn test_art22_exempt_from_hours_but_not_days() {
        let roster = vec![Staff::new("K1", Role::Kitchen).with_contract(ContractType::Art22)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &week_from_monday())
            .unwrap();
        let own = for_staff(&shifts, "K1");
        assert_eq!(dates_of(&own).len(), 6);
        assert_eq!(minutes_of(&own), 3600);
        // Sunday is the seventh day and stays empty.
        assert!(!dates_of(&own).contains(&day(10)));
    }

    #[test]
    fn test_weekly_cap_resets_each_week() {
        let roster = vec![Staff::new("K1", Role::Kitchen)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &GenerationRequest::new(day(4), 14).with_min_date(day(4)))
            .unwrap();
        let own = for_staff(&shifts, "K1");
        let first: Vec<_> = own.iter().filter(|s| s.date() < day(11)).copied().collect();
        let second: Vec<_> = own.iter().filter(|s| s.date() >= day(11)).copied().collect();
        assert_eq!(minutes_of(&first), 2400);
        assert_eq!(minutes_of(&second), 2400);
    }

    #[test]
    fn test_load_balancing_alternates() {
        let roster = vec![Staff::new("K1", Role::Kitchen), Staff::new("K2", Role::Kitchen)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &GenerationRequest::new(day(4), 4).with_min_date(day(4)))
            .unwrap();
        assert_eq!(dates_of(&for_staff(&shifts, "K1")), BTreeSet::from([day(4), day(6)]));
        assert_eq!(dates_of(&for_staff(&shifts, "K2")), BTreeSet::from([day(5), day(7)]));
    }

    #[test]
    fn test_peak_day_doubles_headcount() {
        let roster = vec![
            Staff::new("K1", Role::Kitchen),
            Staff::new("K2", Role::Kitchen),
            Staff::new("K3", Role::Kitchen),
        ];
        let generator = ScheduleGenerator::default();
        let friday = generator
            .generate(&roster, &[], &GenerationRequest::new(day(8), 1).with_min_date(day(8)))
            .unwrap();
        assert_eq!(friday.len(), 4);

        let thursday = generator
            .generate(&roster, &[], &GenerationRequest::new(day(7), 1).with_min_date(day(7)))
            .unwrap();
        assert_eq!(thursday.len(), 2);
    }

    #[test]
    fn test_universal_fills_first_role_only() {
        let roster = vec![Staff::new("U1", Role::Universal)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &GenerationRequest::new(day(4), 1).with_min_date(day(4)))
            .unwrap();
        assert_eq!(shifts.len(), 2);
        assert!(shifts.iter().all(|s| s.role == Some(Role::Kitchen)));
    }

    #[test]
    fn test_unmatched_roles_left_unfilled() {
        let roster = vec![Staff::new("B1", Role::Bar), Staff::new("M1", Role::Manager)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &week_from_monday())
            .unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let shifts = ScheduleGenerator::default()
            .generate(&[], &[], &week_from_monday())
            .unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_threshold_skips_earlier_dates() {
        let roster = vec![Staff::new("K1", Role::Kitchen)];
        let request = GenerationRequest::new(day(4), 7).with_min_date(day(6));
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &request)
            .unwrap();
        assert!(shifts.iter().all(|s| s.date() >= day(6)));
        assert_eq!(dates_of(&for_staff(&shifts, "K1")).len(), 4);

        let pinned = ScheduleGenerator::default()
            .with_today(day(9))
            .generate(&roster, &[], &GenerationRequest::new(day(4), 7))
            .unwrap();
        assert_eq!(dates_of(&for_staff(&pinned, "K1")), BTreeSet::from([day(9), day(10)]));
    }

    #[test]
    fn test_existing_shifts_seed_accumulators() {
        let roster = vec![Staff::new("K1", Role::Kitchen)];
        let existing = vec![
            // Already working Tuesday; 25h booked this week.
            Shift::work("K1", at(5, 8), at(5, 18)),
            Shift::work("K1", at(3, 8), at(3, 18)), // previous week, ignored
            Shift::work("K1", at(10, 0), at(10, 15)),
        ];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &existing, &week_from_monday())
            .unwrap();
        let own = for_staff(&shifts, "K1");
        // 25h booked leaves room for one 10h day (35h); a second would reach 45h.
        assert_eq!(dates_of(&own), BTreeSet::from([day(4)]));
    }

    #[test]
    fn test_days_off_block_assignment() {
        let roster = vec![Staff::new("K1", Role::Kitchen), Staff::new("K2", Role::Kitchen)];
        let existing = vec![
            Shift::new("off", "K1", ShiftType::DayOff, at(4, 0)),
            Shift::new("sick", "K2", ShiftType::Sick, at(4, 0)),
        ];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &existing, &GenerationRequest::new(day(4), 1).with_min_date(day(4)))
            .unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_partial_split_never_committed() {
        // 7h left: the 6h first fragment fits but the pair does not.
        let roster = vec![Staff::new("K1", Role::Kitchen).with_weekly_limit(7.0)];
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &[], &week_from_monday())
            .unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_invalid_requests() {
        let generator = ScheduleGenerator::default();
        for n in [0, -3] {
            let err = generator
                .generate(&[], &[], &GenerationRequest::new(day(4), n))
                .unwrap_err();
            assert!(matches!(err, ShiftError::InvalidArgument(_)));
        }
        assert!(matches!(
            GenerationRequest::between(day(10), day(4)),
            Err(ShiftError::InvalidArgument(_))
        ));
        assert_eq!(GenerationRequest::between(day(4), day(10)).unwrap().num_days, 7);
    }

    #[test]
    fn test_oversized_requests_rejected() {
        let generator = ScheduleGenerator::default();
        let roster = vec![Staff::new("K1", Role::Kitchen)];
        for n in [MAX_GENERATION_DAYS + 1, 200_000_000, i64::MAX] {
            let request = GenerationRequest::new(day(4), n).with_min_date(day(4));
            let err = generator.generate(&roster, &[], &request).unwrap_err();
            assert!(matches!(err, ShiftError::InvalidArgument(_)));
        }

        let near_end = GenerationRequest::new(NaiveDate::MAX - Duration::days(2), 30);
        assert!(matches!(
            generator.generate(&roster, &[], &near_end),
            Err(ShiftError::InvalidArgument(_))
        ));
        assert_eq!(near_end.end_date(), NaiveDate::MAX);

        let year = GenerationRequest::new(day(4), MAX_GENERATION_DAYS).with_min_date(day(4));
        assert!(generator.generate(&roster, &[], &year).is_ok());
    }

    #[test]
    fn test_mid_week_start_sees_earlier_shifts() {
        let roster = vec![Staff::new("K1", Role::Kitchen)];
        // Mon–Wed already worked: 30h of 40h, three days.
        let existing: Vec<Shift> = (4..=6)
            .flat_map(|d| SplitPattern::kitchen().on(day(d)))
            .map(|(start, end)| Shift::work("K1", start, end))
            .collect();
        let request = GenerationRequest::new(day(7), 4).with_min_date(day(7)); // Thu → Sun
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &existing, &request)
            .unwrap();

        let own = for_staff(&shifts, "K1");
        assert_eq!(dates_of(&own), BTreeSet::from([day(7)]));
        let booked: i64 = existing.iter().map(Shift::duration_minutes).sum();
        assert_eq!(booked + minutes_of(&own), 2400);
    }

    #[test]
    fn test_mid_week_start_counts_earlier_days() {
        // Five days already worked Mon–Fri under an exempt contract: only
        // one more day fits the six-day limit, even starting on Saturday.
        let roster = vec![Staff::new("M1", Role::Kitchen).with_contract(ContractType::Art22)];
        let existing: Vec<Shift> = (4..=8)
            .flat_map(|d| SplitPattern::kitchen().on(day(d)))
            .map(|(start, end)| Shift::work("M1", start, end))
            .collect();
        let shifts = ScheduleGenerator::default()
            .generate(&roster, &existing, &GenerationRequest::new(day(9), 2).with_min_date(day(9)))
            .unwrap();
        assert_eq!(dates_of(&for_staff(&shifts, "M1")), BTreeSet::from([day(9)]));
    }

    #[test]
    fn test_seed_window_is_week_aligned() {
        let request = GenerationRequest::new(day(6), 7); // Wed → Tue
        assert_eq!(request.seed_window(), (at(4, 0), at(18, 0)));
    }

    #[test]
    fn test_invalid_pattern_rejected_at_construction() {
        let config = GeneratorConfig {
            staffing: vec![RoleStaffing::new(
                Role::Kitchen,
                1,
                SplitPattern::new(vec![TimeWindow::hours(8, 20)]),
            )],
            ..Default::default()
        };
        let err = ScheduleGenerator::new(config, ComplianceEngine::default()).unwrap_err();
        assert!(matches!(err, ShiftError::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_staffing_table() {
        let config = GeneratorConfig {
            staffing: vec![RoleStaffing::new(
                Role::Bar,
                2,
                SplitPattern::new(vec![TimeWindow::hours(18, 24)]),
            )],
            peak_multiplier: 1,
        };
        let generator = ScheduleGenerator::new(config, ComplianceEngine::default()).unwrap();
        let roster = vec![Staff::new("B1", Role::Bar), Staff::new("B2", Role::Bar)];
        let shifts = generator
            .generate(&roster, &[], &GenerationRequest::new(day(8), 1).with_min_date(day(8)))
            .unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].scheduled_end, Some(at(9, 0)));
    }
}
