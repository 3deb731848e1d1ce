//! Persistence boundary.
//!
//! The scheduler never queries storage directly; it reads the roster and
//! existing shifts through [`ShiftRepository`] and hands generated shifts
//! back through it. [`InMemoryRepository`] backs tests and embedded use.

use std::sync::RwLock;

use chrono::NaiveDateTime;

use crate::error::{Result, ShiftError};
use crate::models::{Shift, ShiftUpdate, Staff};

/// Storage collaborator for staff and shift records.
pub trait ShiftRepository {
    /// Every staff member on the roster.
    fn list_staff(&self) -> Result<Vec<Staff>>;

    /// Shifts whose scheduled start is in [range_start, range_end),
    /// optionally restricted to one staff member.
    fn list_shifts(
        &self,
        staff_id: Option<&str>,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Result<Vec<Shift>>;

    /// Bulk insert of new shifts.
    fn commit_shifts(&self, shifts: &[Shift]) -> Result<()>;

    /// Applies a partial update and returns the updated record.
    fn update_shift(&self, id: &str, update: &ShiftUpdate) -> Result<Shift>;
}

/// Thread-safe in-memory repository.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    staff: RwLock<Vec<Staff>>,
    shifts: RwLock<Vec<Shift>>,
}

fn poisoned<T>(_: T) -> ShiftError {
    ShiftError::Repository("lock poisoned".to_string())
}

impl InMemoryRepository {
    pub fn new(staff: Vec<Staff>, shifts: Vec<Shift>) -> Self {
        Self {
            staff: RwLock::new(staff),
            shifts: RwLock::new(shifts),
        }
    }

    pub fn with_staff(staff: Vec<Staff>) -> Self {
        Self::new(staff, Vec::new())
    }

    /// Every stored shift, in insertion order.
    pub fn all_shifts(&self) -> Result<Vec<Shift>> {
        Ok(self.shifts.read().map_err(poisoned)?.clone())
    }
}

impl ShiftRepository for InMemoryRepository {
    fn list_staff(&self) -> Result<Vec<Staff>> {
        Ok(self.staff.read().map_err(poisoned)?.clone())
    }

    fn list_shifts(
        &self,
        staff_id: Option<&str>,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Result<Vec<Shift>> {
        let shifts = self.shifts.read().map_err(poisoned)?;
        Ok(shifts
            .iter()
            .filter(|s| staff_id.map_or(true, |id| s.staff_id == id))
            .filter(|s| s.scheduled_start >= range_start && s.scheduled_start < range_end)
            .cloned()
            .collect())
    }

    fn commit_shifts(&self, new_shifts: &[Shift]) -> Result<()> {
        let mut shifts = self.shifts.write().map_err(poisoned)?;
        if let Some(dup) = new_shifts
            .iter()
            .find(|n| shifts.iter().any(|s| s.id == n.id))
        {
            return Err(ShiftError::InvalidArgument(format!(
                "shift '{}' already exists",
                dup.id
            )));
        }
        shifts.extend_from_slice(new_shifts);
        Ok(())
    }

    fn update_shift(&self, id: &str, update: &ShiftUpdate) -> Result<Shift> {
        let mut shifts = self.shifts.write().map_err(poisoned)?;
        let shift = shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ShiftError::NotFound(id.to_string()))?;
        shift.apply(update);
        Ok(shift.clone())
    }
}
