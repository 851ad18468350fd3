use std::{fmt, str::FromStr};

use serde::Serialize;

/// Access level of a bee. Ordered `New < Advanced < Golden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BeeTier {
    #[default]
    New,
    Advanced,
    Golden,
}

impl BeeTier {
    pub const ALL: [BeeTier; 3] = [BeeTier::New, BeeTier::Advanced, BeeTier::Golden];

    pub fn rank(self) -> u8 {
        match self {
            BeeTier::New => 0,
            BeeTier::Advanced => 1,
            BeeTier::Golden => 2,
        }
    }

    /// Literal used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            BeeTier::New => "New",
            BeeTier::Advanced => "Advanced",
            BeeTier::Golden => "Golden",
        }
    }

    /// Badge text shown next to the username.
    pub fn label(self) -> &'static str {
        match self {
            BeeTier::New => "New Bee",
            BeeTier::Advanced => "Advanced Bee",
            BeeTier::Golden => "Golden Bee",
        }
    }
}

impl PartialOrd for BeeTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BeeTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for BeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeeTier {
    type Err = anyhow::Error;

    /// Only the exact storage literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(BeeTier::New),
            "Advanced" => Ok(BeeTier::Advanced),
            "Golden" => Ok(BeeTier::Golden),
            _ => Err(anyhow::anyhow!("Invalid BeeTier value: {:?}", s)),
        }
    }
}

/// Degree of physical autonomy a task asks the bee to cede.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlLevel {
    Low,
    Medium,
    High,
}

impl ControlLevel {
    pub const ALL: [ControlLevel; 3] = [ControlLevel::Low, ControlLevel::Medium, ControlLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlLevel::Low => "Low",
            ControlLevel::Medium => "Medium",
            ControlLevel::High => "High",
        }
    }
}

impl fmt::Display for ControlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ControlLevel::Low),
            "Medium" => Ok(ControlLevel::Medium),
            "High" => Ok(ControlLevel::High),
            _ => Err(anyhow::anyhow!("Invalid ControlLevel value: {:?}", s)),
        }
    }
}

pub const DEFAULT_USERNAME: &str = "Bee";
pub const DEFAULT_WORK_DAYS: f64 = 120.0;
pub const DEFAULT_PERFORMANCE: f64 = 7.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub username: String,
    pub bee_tier: BeeTier,
    pub is_premium: bool,
    pub work_days: f64,
    pub performance: f64,
    pub contract_accepted: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            bee_tier: BeeTier::New,
            is_premium: false,
            work_days: DEFAULT_WORK_DAYS,
            performance: DEFAULT_PERFORMANCE,
            contract_accepted: false,
        }
    }
}

impl Session {
    pub fn can_upgrade(&self) -> bool {
        crate::core::rules::can_upgrade(self.bee_tier, self.work_days, self.performance)
    }

    /// Whether the "upgrade available" dot is shown on the profile and nav icons.
    pub fn show_upgrade_indicator(&self) -> bool {
        crate::core::rules::show_upgrade_indicator(self.bee_tier, self.work_days, self.performance)
    }
}

/// A job posting. Catalog entries are static and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    pub tier_required: BeeTier,
    pub hourly: f64,
    pub days_per_week: u8,
    pub hours_per_day: u8,
    pub months: u8,
    pub control: ControlLevel,
    pub premium_only: bool,
    pub tag: Option<&'static str>,
}

impl Task {
    /// Hourly rate formatted the way task cards show it.
    pub fn rate_label(&self) -> String {
        format!("${:.2}/hr", self.hourly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order_follows_rank() {
        assert!(BeeTier::New < BeeTier::Advanced);
        assert!(BeeTier::Advanced < BeeTier::Golden);
        assert_eq!(BeeTier::Golden.rank(), 2);
    }

    #[test]
    fn tier_parse_is_exact() {
        assert_eq!("Advanced".parse::<BeeTier>().unwrap(), BeeTier::Advanced);
        assert!("advanced".parse::<BeeTier>().is_err());
        assert!(" New".parse::<BeeTier>().is_err());
    }

    #[test]
    fn tier_labels() {
        assert_eq!(BeeTier::Golden.label(), "Golden Bee");
        assert_eq!(BeeTier::New.to_string(), "New");
    }
}
