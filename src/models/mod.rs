//! Rostering domain models.
//!
//! Provides the core data types shared by the demand profile, compliance
//! engine, generator and overtime monitor.
//!
//! # Domain Mappings
//!
//! | u-shift | Scheduling term | Restaurant |
//! |---------|-----------------|------------|
//! | Staff | Resource | Cook / Waiter |
//! | Shift | Assignment | Work block, day off, sick leave |
//! | SplitPattern | Calendar windows | Lunch + dinner service |
//! | TimeWindow | Time interval | 12:00–17:00 |

pub mod calendar;
mod pattern;
mod shift;
mod staff;

pub use calendar::{is_peak_day, week_range, week_start, DayClass, TimeWindow};
pub use pattern::SplitPattern;
pub use shift::{Shift, ShiftType, ShiftUpdate};
pub use staff::{ContractType, Role, Staff, DEFAULT_WEEKLY_HOURS};
