//! Staff rostering for the U-Engine ecosystem.
//!
//! Computes weekly shift schedules for a continuously operating service
//! business and validates shifts against labor-time limits.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Staff`, `Shift`, `SplitPattern`, `TimeWindow`,
//!   week and day-class helpers
//! - **`demand`**: Hourly required-headcount curves per role and date
//! - **`compliance`**: Weekly/daily hour caps, split-shift legality, overtime
//! - **`scheduler`**: Greedy split-shift generator and coverage report
//! - **`monitor`**: Overtime alerts for active shifts
//! - **`repository`**: Storage boundary (`ShiftRepository`) and an in-memory store
//! - **`service`**: `RosterService`, the caller-facing API
//! - **`config`**: Serde-backed configuration with defaults
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling references)
//!
//! # Architecture
//!
//! All algorithms operate on in-memory records. Reads and writes go through
//! `ShiftRepository`; no component holds a lock across a generation run.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

pub mod compliance;
pub mod config;
pub mod demand;
pub mod error;
pub mod models;
pub mod monitor;
pub mod repository;
pub mod scheduler;
pub mod service;
pub mod validation;

pub use error::{Result, ShiftError};
