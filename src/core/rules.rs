//! Pure decision rules shared by every screen: task gating, the Advanced
//! upgrade predicate and the earnings estimator.

use serde::Serialize;

use crate::core::model::{BeeTier, ControlLevel, Session, Task};

/// Why a bee may or may not apply to a task. The premium gate is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Open,
    PremiumRequired,
    TierTooLow { required: BeeTier },
}

pub fn tier_allows(tier: BeeTier, required: BeeTier) -> bool {
    tier.rank() >= required.rank()
}

pub fn gate(session: &Session, task: &Task) -> Gate {
    if task.premium_only && !session.is_premium {
        Gate::PremiumRequired
    } else if !tier_allows(session.bee_tier, task.tier_required) {
        Gate::TierTooLow {
            required: task.tier_required,
        }
    } else {
        Gate::Open
    }
}

pub const UPGRADE_MIN_WORK_DAYS: f64 = 90.0;
pub const UPGRADE_MIN_PERFORMANCE: f64 = 7.0;

/// New bees with more than 90 work days and a performance above 7 may become Advanced.
pub fn can_upgrade(tier: BeeTier, work_days: f64, performance: f64) -> bool {
    tier == BeeTier::New && work_days > UPGRADE_MIN_WORK_DAYS && performance > UPGRADE_MIN_PERFORMANCE
}

pub fn show_upgrade_indicator(tier: BeeTier, work_days: f64, performance: f64) -> bool {
    can_upgrade(tier, work_days, performance)
}

pub const MIN_HOURS_PER_DAY: f64 = 1.0;
pub const MAX_HOURS_PER_DAY: f64 = 12.0;

/// Base hourly rate per tier and control level.
pub fn base_rate(tier: BeeTier, control: ControlLevel) -> f64 {
    use ControlLevel::*;
    match (tier, control) {
        (BeeTier::New, Low) => 15.0,
        (BeeTier::New, Medium) => 20.0,
        (BeeTier::New, High) => 30.0,
        (BeeTier::Advanced, Low) => 19.0,
        (BeeTier::Advanced, Medium) => 24.0,
        (BeeTier::Advanced, High) => 36.0,
        (BeeTier::Golden, Low) => 32.0,
        (BeeTier::Golden, Medium) => 38.0,
        (BeeTier::Golden, High) => 50.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub hours_per_day: f64,
    pub daily: f64,
    pub monthly: f64,
    pub annual: f64,
}

/// Clamp into `[1, 12]` and snap to the nearest half hour.
pub fn normalize_hours(hours_per_day: f64) -> f64 {
    if !hours_per_day.is_finite() {
        return MIN_HOURS_PER_DAY;
    }
    let clamped = hours_per_day.clamp(MIN_HOURS_PER_DAY, MAX_HOURS_PER_DAY);
    (clamped * 2.0).round() / 2.0
}

pub fn estimate(tier: BeeTier, control: ControlLevel, hours_per_day: f64) -> Estimate {
    let hours_per_day = normalize_hours(hours_per_day);
    let daily = base_rate(tier, control) * hours_per_day;
    Estimate {
        hours_per_day,
        daily,
        monthly: daily * 30.0,
        annual: daily * 365.0,
    }
}

/// Whole-dollar currency text, e.g. `$43,800`.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_task;

    fn session(tier: BeeTier, is_premium: bool) -> Session {
        Session {
            bee_tier: tier,
            is_premium,
            ..Session::default()
        }
    }

    #[test]
    fn apply_gate_matches_rank_and_premium() {
        let catalog = crate::core::catalog::all_tasks().collect::<Vec<_>>();
        for tier in BeeTier::ALL {
            for is_premium in [false, true] {
                let s = session(tier, is_premium);
                for task in &catalog {
                    let open = gate(&s, task) == Gate::Open;
                    let expected = tier.rank() >= task.tier_required.rank()
                        && (!task.premium_only || is_premium);
                    assert_eq!(open, expected, "{} {:?} {}", task.id, tier, is_premium);
                }
            }
        }
    }

    #[test]
    fn premium_gate_wins_over_tier_gate() {
        let lego = find_task("lego-01").unwrap();
        assert_eq!(gate(&session(BeeTier::New, false), lego), Gate::PremiumRequired);
        assert_eq!(gate(&session(BeeTier::Golden, false), lego), Gate::PremiumRequired);
        assert_eq!(
            gate(&session(BeeTier::New, true), lego),
            Gate::TierTooLow { required: BeeTier::Golden }
        );
    }

    #[test]
    fn indicator_agrees_with_upgrade() {
        for tier in BeeTier::ALL {
            for days in [0.0, 90.0, 90.5, 120.0, 260.0] {
                for perf in [0.0, 7.0, 7.01, 7.3, 10.0] {
                    assert_eq!(
                        show_upgrade_indicator(tier, days, perf),
                        can_upgrade(tier, days, perf)
                    );
                }
            }
        }
        assert!(can_upgrade(BeeTier::New, 120.0, 7.3));
        assert!(!can_upgrade(BeeTier::New, 90.0, 7.3));
        assert!(!can_upgrade(BeeTier::New, 120.0, 7.0));
        assert!(!can_upgrade(BeeTier::Advanced, 120.0, 7.3));
    }

    #[test]
    fn estimate_new_medium_six_hours() {
        let e = estimate(BeeTier::New, ControlLevel::Medium, 6.0);
        assert_eq!(e.daily, 120.0);
        assert_eq!(e.monthly, 3600.0);
        assert_eq!(e.annual, 43800.0);
    }

    #[test]
    fn estimate_is_monotonic_in_hours() {
        for tier in BeeTier::ALL {
            for control in ControlLevel::ALL {
                let mut previous = f64::MIN;
                let mut hours = 0.0;
                while hours <= 14.0 {
                    let daily = estimate(tier, control, hours).daily;
                    assert!(daily >= previous);
                    previous = daily;
                    hours += 0.25;
                }
            }
        }
    }

    #[test]
    fn hours_are_clamped_and_snapped() {
        assert_eq!(normalize_hours(0.0), 1.0);
        assert_eq!(normalize_hours(30.0), 12.0);
        assert_eq!(normalize_hours(6.3), 6.5);
        assert_eq!(normalize_hours(f64::NAN), 1.0);
    }

    #[test]
    fn money_is_grouped() {
        assert_eq!(format_money(43800.0), "$43,800");
        assert_eq!(format_money(120.0), "$120");
        assert_eq!(format_money(1_234_567.4), "$1,234,567");
        assert_eq!(format_money(-10.0), "-$10");
    }
}
