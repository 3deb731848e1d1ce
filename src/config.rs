use crate::compliance::EndAnchoring;
use crate::error::{Result, ShiftError};
use crate::models::{Role, SplitPattern, DEFAULT_WEEKLY_HOURS};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComplianceConfig
// ---------------------------------------------------------------------------

/// Labor-time limits enforced by the compliance engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceConfig {
    #[serde(default = "default_daily_cap_hours")]
    pub daily_cap_hours: f64,
    #[serde(default = "default_weekly_hours")]
    pub default_weekly_hours: f64,
    #[serde(default = "default_max_days_per_week")]
    pub max_days_per_week: usize,
    /// Duration assumed for shifts recorded without an end.
    #[serde(default = "default_missing_end_hours")]
    pub missing_end_hours: f64,
    #[serde(default = "default_overtime_grace_minutes")]
    pub overtime_grace_minutes: i64,
    #[serde(default = "default_overtime_critical_minutes")]
    pub overtime_critical_minutes: i64,
    /// Overruns at or beyond this are treated as stale records, not overtime.
    #[serde(default = "default_overtime_horizon_minutes")]
    pub overtime_horizon_minutes: i64,
    #[serde(default)]
    pub end_anchoring: EndAnchoring,
}

fn default_daily_cap_hours() -> f64 {
    10.0
}

fn default_weekly_hours() -> f64 {
    DEFAULT_WEEKLY_HOURS
}

fn default_max_days_per_week() -> usize {
    6
}

fn default_missing_end_hours() -> f64 {
    8.0
}

fn default_overtime_grace_minutes() -> i64 {
    10
}

fn default_overtime_critical_minutes() -> i64 {
    60
}

fn default_overtime_horizon_minutes() -> i64 {
    24 * 60
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            daily_cap_hours: default_daily_cap_hours(),
            default_weekly_hours: default_weekly_hours(),
            max_days_per_week: default_max_days_per_week(),
            missing_end_hours: default_missing_end_hours(),
            overtime_grace_minutes: default_overtime_grace_minutes(),
            overtime_critical_minutes: default_overtime_critical_minutes(),
            overtime_horizon_minutes: default_overtime_horizon_minutes(),
            end_anchoring: EndAnchoring::default(),
        }
    }
}

impl ComplianceConfig {
    pub fn daily_cap_minutes(&self) -> i64 {
        (self.daily_cap_hours * 60.0).round() as i64
    }

    pub fn missing_end_minutes(&self) -> i64 {
        (self.missing_end_hours * 60.0).round() as i64
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.daily_cap_hours > 0.0) {
            return Err(ShiftError::InvalidConfig(format!(
                "daily_cap_hours must be positive, got {}",
                self.daily_cap_hours
            )));
        }
        if !(self.default_weekly_hours > 0.0) {
            return Err(ShiftError::InvalidConfig(format!(
                "default_weekly_hours must be positive, got {}",
                self.default_weekly_hours
            )));
        }
        if self.max_days_per_week == 0 || self.max_days_per_week > 7 {
            return Err(ShiftError::InvalidConfig(format!(
                "max_days_per_week must be within 1..=7, got {}",
                self.max_days_per_week
            )));
        }
        if !(0 <= self.overtime_grace_minutes
            && self.overtime_grace_minutes <= self.overtime_critical_minutes
            && self.overtime_critical_minutes < self.overtime_horizon_minutes)
        {
            return Err(ShiftError::InvalidConfig(format!(
                "overtime thresholds must satisfy 0 <= grace ({}) <= critical ({}) < horizon ({})",
                self.overtime_grace_minutes,
                self.overtime_critical_minutes,
                self.overtime_horizon_minutes
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Skeleton crew and split pattern for one role the generator fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStaffing {
    pub role: Role,
    #[serde(default = "default_skeleton_crew")]
    pub skeleton_crew: u32,
    pub pattern: SplitPattern,
}

fn default_skeleton_crew() -> u32 {
    1
}

impl RoleStaffing {
    pub fn new(role: Role, skeleton_crew: u32, pattern: SplitPattern) -> Self {
        Self {
            role,
            skeleton_crew,
            pattern,
        }
    }
}

/// Roles filled by the generator, in fill order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_staffing")]
    pub staffing: Vec<RoleStaffing>,
    /// Headcount multiplier on peak days.
    #[serde(default = "default_peak_multiplier")]
    pub peak_multiplier: u32,
}

fn default_staffing() -> Vec<RoleStaffing> {
    vec![
        RoleStaffing::new(Role::Kitchen, 1, SplitPattern::kitchen()),
        RoleStaffing::new(Role::Waiter, 1, SplitPattern::waiter()),
    ]
}

fn default_peak_multiplier() -> u32 {
    2
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            staffing: default_staffing(),
            peak_multiplier: default_peak_multiplier(),
        }
    }
}

// ---------------------------------------------------------------------------
// RosterConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub compliance: ComplianceConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl RosterConfig {
    /// Parses and validates a JSON configuration. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: RosterConfig = serde_json::from_str(raw)?;
        config.compliance.validate()?;
        Ok(config)
    }
}
