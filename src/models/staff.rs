//! Staff model.
//!
//! Staff members are the resources a roster assigns to shifts. Each has a
//! role that decides which demand it can cover, and a contract type that
//! decides which hour caps apply.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly hours limit applied when a staff record carries none.
pub const DEFAULT_WEEKLY_HOURS: f64 = 40.0;

/// A member of staff that can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Operational role.
    pub role: Role,
    /// Contract category.
    pub contract_type: ContractType,
    /// Weekly hours cap. `None` = the configured default (40h).
    /// Ignored for `art-22` contracts.
    #[serde(default)]
    pub weekly_hours_limit: Option<f64>,
}

/// Operational role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Kitchen,
    Waiter,
    Bar,
    Manager,
    /// Can cover any role the generator fills.
    Universal,
}

/// Contract category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "44-hours")]
    FortyFourHours,
    /// Exempt from weekly and daily hour-cap enforcement.
    #[serde(rename = "art-22")]
    Art22,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Kitchen => "kitchen",
            Role::Waiter => "waiter",
            Role::Bar => "bar",
            Role::Manager => "manager",
            Role::Universal => "universal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContractType {
    /// Wire name of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Monthly => "monthly",
            ContractType::Hourly => "hourly",
            ContractType::PartTime => "part-time",
            ContractType::FortyFourHours => "44-hours",
            ContractType::Art22 => "art-22",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Staff {
    /// Creates a staff member on an hourly contract with the default limit.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            contract_type: ContractType::Hourly,
            weekly_hours_limit: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contract type.
    pub fn with_contract(mut self, contract_type: ContractType) -> Self {
        self.contract_type = contract_type;
        self
    }

    /// Sets the weekly hours limit.
    pub fn with_weekly_limit(mut self, hours: f64) -> Self {
        self.weekly_hours_limit = Some(hours);
        self
    }

    /// Whether this staff member is exempt from hour caps.
    #[inline]
    pub fn is_exempt(&self) -> bool {
        self.contract_type == ContractType::Art22
    }

    /// Effective weekly limit in hours, or `None` when exempt.
    pub fn weekly_limit_hours(&self, default_hours: f64) -> Option<f64> {
        if self.is_exempt() {
            None
        } else {
            Some(self.weekly_hours_limit.unwrap_or(default_hours))
        }
    }

    /// Effective weekly limit in whole minutes, or `None` when exempt.
    pub fn weekly_limit_minutes(&self, default_hours: f64) -> Option<i64> {
        self.weekly_limit_hours(default_hours)
            .map(|hours| (hours * 60.0).round() as i64)
    }

    /// Whether this staff member may fill a slot for `role`.
    pub fn can_fill(&self, role: Role) -> bool {
        self.role == role || self.role == Role::Universal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_builder() {
        let s = Staff::new("S1", Role::Kitchen)
            .with_name("Ana")
            .with_contract(ContractType::FortyFourHours)
            .with_weekly_limit(44.0);

        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Ana");
        assert_eq!(s.role, Role::Kitchen);
        assert_eq!(s.weekly_limit_hours(DEFAULT_WEEKLY_HOURS), Some(44.0));
        assert_eq!(s.weekly_limit_minutes(DEFAULT_WEEKLY_HOURS), Some(2640));
    }

    #[test]
    fn test_default_limit() {
        let s = Staff::new("S1", Role::Waiter);
        assert_eq!(s.weekly_limit_hours(DEFAULT_WEEKLY_HOURS), Some(40.0));
    }

    #[test]
    fn test_art22_is_unlimited() {
        let s = Staff::new("S1", Role::Bar)
            .with_contract(ContractType::Art22)
            .with_weekly_limit(10.0);
        assert!(s.is_exempt());
        assert_eq!(s.weekly_limit_hours(DEFAULT_WEEKLY_HOURS), None);
        assert_eq!(s.weekly_limit_minutes(DEFAULT_WEEKLY_HOURS), None);
    }

    #[test]
    fn test_can_fill() {
        let k = Staff::new("K", Role::Kitchen);
        let u = Staff::new("U", Role::Universal);
        assert!(k.can_fill(Role::Kitchen));
        assert!(!k.can_fill(Role::Waiter));
        assert!(u.can_fill(Role::Kitchen));
        assert!(u.can_fill(Role::Waiter));
    }

    #[test]
    fn test_wire_names() {
        let s = Staff::new("S1", Role::Universal).with_contract(ContractType::PartTime);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["role"], "universal");
        assert_eq!(json["contract_type"], "part-time");

        let parsed: Staff = serde_json::from_str(
            r#"{"id":"S2","role":"kitchen","contract_type":"44-hours"}"#,
        )
        .unwrap();
        assert_eq!(parsed.contract_type, ContractType::FortyFourHours);
        assert_eq!(parsed.weekly_hours_limit, None);
        assert_eq!(ContractType::Art22.to_string(), "art-22");
    }
}
