//! Caller-facing roster service.
//!
//! Wires the repository, compliance engine, generator and overtime monitor
//! together behind the operations a UI or CLI needs. Generated schedules
//! are returned uncommitted; the caller decides whether to persist them.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::compliance::{ComplianceEngine, ComplianceResult, OvertimeStatus, ShiftReview};
use crate::config::RosterConfig;
use crate::error::{Result, ShiftError};
use crate::models::{week_range, Shift, Staff};
use crate::monitor::{OvertimeAlert, OvertimeMonitor};
use crate::repository::ShiftRepository;
use crate::scheduler::{GenerationRequest, ScheduleGenerator};
use crate::validation::validate_shifts;

pub struct RosterService<R> {
    repo: R,
    engine: ComplianceEngine,
    generator: ScheduleGenerator,
    monitor: OvertimeMonitor,
}

impl<R: ShiftRepository> RosterService<R> {
    pub fn new(repo: R, config: RosterConfig) -> Result<Self> {
        config.compliance.validate()?;
        let engine = ComplianceEngine::new(config.compliance);
        let generator = ScheduleGenerator::new(config.generator, engine.clone())?;
        let monitor = OvertimeMonitor::new(engine.clone());
        Ok(Self {
            repo,
            engine,
            generator,
            monitor,
        })
    }

    /// Pins the generator's default retroactivity threshold.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.generator = self.generator.with_today(today);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn engine(&self) -> &ComplianceEngine {
        &self.engine
    }

    /// Proposes shifts for `num_days` dates from `start`. Nothing is persisted.
    pub fn generate_schedule(
        &self,
        start: NaiveDate,
        num_days: i64,
        min_date: Option<NaiveDate>,
    ) -> Result<Vec<Shift>> {
        let mut request = GenerationRequest::new(start, num_days);
        if let Some(min_date) = min_date {
            request = request.with_min_date(min_date);
        }
        request.validate()?;

        let roster = self.repo.list_staff()?;
        let (from, to) = request.seed_window();
        let existing = self.repo.list_shifts(None, from, to)?;
        debug!(staff = roster.len(), existing = existing.len(), "loaded generation inputs");

        self.generator.generate(&roster, &existing, &request)
    }

    /// Persists generated shifts.
    pub fn commit_schedule(&self, shifts: &[Shift]) -> Result<()> {
        self.repo.commit_shifts(shifts)?;
        info!(shifts = shifts.len(), "schedule committed");
        Ok(())
    }

    /// Weekly hours check for a proposed shift of `staff_id`.
    pub fn check_weekly_compliance(
        &self,
        staff_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ComplianceResult> {
        let roster = self.repo.list_staff()?;
        let (from, to) = week_range(start.date());
        let existing = self.repo.list_shifts(Some(staff_id), from, to)?;
        self.engine
            .check_weekly_by_id(&roster, &existing, staff_id, start, end)
    }

    /// Whether `new_duration_hours` more work fits the daily cap.
    pub fn check_daily_compliance(&self, existing_fragments: &[Shift], new_duration_hours: f64) -> bool {
        self.engine
            .is_daily_compliant(existing_fragments, new_duration_hours)
    }

    pub fn get_overtime_status(&self, shift: &Shift, now: NaiveDateTime) -> OvertimeStatus {
        self.monitor.check(shift, now)
    }

    /// Revalidates a manual edit against the staff member's week.
    ///
    /// Violations come back in the review; only unknown staff or malformed
    /// shifts are errors, so the caller may still confirm an override.
    pub fn review_shift_edit(&self, shift: &Shift) -> Result<ShiftReview> {
        let roster = self.repo.list_staff()?;
        let staff: &Staff = roster
            .iter()
            .find(|s| s.id == shift.staff_id)
            .ok_or_else(|| ShiftError::NotFound(shift.staff_id.clone()))?;

        if let Err(errors) = validate_shifts(std::slice::from_ref(shift), &roster) {
            let reasons: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(ShiftError::InvalidArgument(reasons.join("; ")));
        }

        let (from, to) = week_range(shift.date());
        let week = self.repo.list_shifts(Some(&staff.id), from, to)?;
        self.engine.review_shift(staff, shift, &week)
    }

    /// Overtime alerts for active shifts scheduled to start in the last
    /// two days.
    pub fn overtime_alerts(&self, now: NaiveDateTime) -> Result<Vec<OvertimeAlert>> {
        let shifts = self
            .repo
            .list_shifts(None, now - Duration::days(2), now + Duration::minutes(1))?;
        Ok(self.monitor.scan(&shifts, now))
    }
}
