//! Demand profile provider.
//!
//! Maps (role, date) to an hourly required-headcount curve over the
//! operating window [10:00, 24:00). Requirements are the sum of every
//! rule matching the role, the day class and the hour.
//!
//! # Rules
//!
//! | Role | Hours | Days | +Staff |
//! |------|-------|------|--------|
//! | waiter/universal | 12–16 | all | 2 |
//! | waiter/universal | 13–15 | all | 1 |
//! | waiter/universal | 20–23 | standard | 2 |
//! | waiter/universal | 19–24, 20–23 | peak | 2, 2 |
//! | waiter/universal | 12–17 | Sunday | 1 |
//! | kitchen | 10–12, 12–16, 23–24 | all | 1, 2, 1 |
//! | kitchen | 19–23 | standard, Sunday / peak | 2 / 3 |
//! | manager | 10–24 | all | 1 |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::calendar::{CLOSING_HOUR, OPENING_HOUR};
use crate::models::{DayClass, Role};

/// Required headcount for one operating hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyDemand {
    /// Hour of day (10..24).
    pub hour: u32,
    /// Staff required during that hour.
    pub required: u32,
}

/// An additive demand rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRule {
    /// Roles the rule applies to.
    pub roles: Vec<Role>,
    /// Day classes the rule applies to. Empty = every day.
    pub days: Vec<DayClass>,
    /// First hour covered (inclusive).
    pub start_hour: u32,
    /// Last hour covered (exclusive).
    pub end_hour: u32,
    /// Headcount added for each covered hour.
    pub count: u32,
}

impl DemandRule {
    fn new(roles: &[Role], days: &[DayClass], start_hour: u32, end_hour: u32, count: u32) -> Self {
        Self {
            roles: roles.to_vec(),
            days: days.to_vec(),
            start_hour,
            end_hour,
            count,
        }
    }

    fn applies(&self, role: Role, day: DayClass, hour: u32) -> bool {
        self.roles.contains(&role)
            && (self.days.is_empty() || self.days.contains(&day))
            && hour >= self.start_hour
            && hour < self.end_hour
    }
}

/// Deterministic demand curves per role and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandProfile {
    rules: Vec<DemandRule>,
}

impl DemandProfile {
    /// Creates a profile with no rules (zero demand everywhere).
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The restaurant's standard profile.
    pub fn standard() -> Self {
        use DayClass::{Peak, Standard, Sunday};
        const FLOOR: &[Role] = &[Role::Waiter, Role::Universal];
        const KITCHEN: &[Role] = &[Role::Kitchen];

        Self::empty()
            // Lunch service, with a peak-of-peak in the middle
            .with_rule(DemandRule::new(FLOOR, &[], 12, 16, 2))
            .with_rule(DemandRule::new(FLOOR, &[], 13, 15, 1))
            .with_rule(DemandRule::new(FLOOR, &[Standard], 20, 23, 2))
            .with_rule(DemandRule::new(FLOOR, &[Peak], 19, 24, 2))
            .with_rule(DemandRule::new(FLOOR, &[Peak], 20, 23, 2))
            .with_rule(DemandRule::new(FLOOR, &[Sunday], 12, 17, 1))
            // Prep, lunch, dinner, close
            .with_rule(DemandRule::new(KITCHEN, &[], 10, 12, 1))
            .with_rule(DemandRule::new(KITCHEN, &[], 12, 16, 2))
            .with_rule(DemandRule::new(KITCHEN, &[Standard, Sunday], 19, 23, 2))
            .with_rule(DemandRule::new(KITCHEN, &[Peak], 19, 23, 3))
            .with_rule(DemandRule::new(KITCHEN, &[], 23, 24, 1))
            .with_rule(DemandRule::new(
                &[Role::Manager],
                &[],
                OPENING_HOUR,
                CLOSING_HOUR,
                1,
            ))
    }

    /// Adds a rule.
    pub fn with_rule(mut self, rule: DemandRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Hourly requirement curve for every operating hour, in hour order.
    pub fn curve(&self, role: Role, date: NaiveDate) -> Vec<HourlyDemand> {
        let day = DayClass::of(date);
        (OPENING_HOUR..CLOSING_HOUR)
            .map(|hour| HourlyDemand {
                hour,
                required: self.required_for(role, day, hour),
            })
            .collect()
    }

    /// Requirement for a single hour (0 outside operating hours).
    pub fn required_at(&self, role: Role, date: NaiveDate, hour: u32) -> u32 {
        if !(OPENING_HOUR..CLOSING_HOUR).contains(&hour) {
            return 0;
        }
        self.required_for(role, DayClass::of(date), hour)
    }

    /// Highest hourly requirement of the day.
    pub fn peak_requirement(&self, role: Role, date: NaiveDate) -> u32 {
        self.curve(role, date)
            .iter()
            .map(|d| d.required)
            .max()
            .unwrap_or(0)
    }

    fn required_for(&self, role: Role, day: DayClass, hour: u32) -> u32 {
        self.rules
            .iter()
            .filter(|r| r.applies(role, day, hour))
            .map(|r| r.count)
            .sum()
    }
}

impl Default for DemandProfile {
    fn default() -> Self {
        Self::standard()
    }
}
