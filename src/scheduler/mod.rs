//! Schedule generation and coverage evaluation.
//!
//! `ScheduleGenerator` is a single-pass, greedy, constraint-satisfying
//! allocator: it fills each role's skeleton crew with fixed split-shift
//! patterns, consulting the compliance limits before every commit. It is
//! not an optimizer.
//!
//! `CoverageReport` measures how much of the demand profile a set of
//! shifts covers.
//!
//! # Concurrency
//! A run reads its inputs once and holds no lock. Two concurrent runs over
//! the same staff and dates can double-book; callers must serialize
//! generation against commits for overlapping ranges.

mod coverage;
mod generator;

pub use crate::config::RoleStaffing;
pub use coverage::{CoverageGap, CoverageReport};
pub use generator::{GenerationRequest, ScheduleGenerator, MAX_GENERATION_DAYS};
