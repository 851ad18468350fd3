use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusItem {
    pub title: &'static str,
    pub body: &'static str,
    pub score: Option<&'static str>,
    pub delta: Option<&'static str>,
    pub penalty_cents: Option<i64>,
}

pub static STATUS_FEED: [StatusItem; 3] = [
    StatusItem {
        title: "Congratulations!",
        body: "You ranked in the top 10% of the most hard-working bees this month.",
        score: None,
        delta: None,
        penalty_cents: None,
    },
    StatusItem {
        title: "Work Performance",
        body: "Mismatch between assigned task complexity and sleep state resulted in suboptimal execution quality.",
        score: Some("7.3"),
        delta: Some("-0.3"),
        penalty_cents: None,
    },
    StatusItem {
        title: "You didn't work enough!",
        body: "Warning: Due to insufficient working time, the assigned task was not completed within the required progress window.",
        score: None,
        delta: None,
        penalty_cents: Some(-1000),
    },
];

/// One line of the earnings history. Negative amounts are penalties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsEntry {
    pub title: &'static str,
    pub when: &'static str,
    pub cents: i64,
}

impl EarningsEntry {
    pub fn is_penalty(&self) -> bool {
        self.cents < 0
    }

    pub fn amount_label(&self) -> String {
        format_cents(self.cents)
    }
}

const fn entry(title: &'static str, when: &'static str, cents: i64) -> EarningsEntry {
    EarningsEntry { title, when, cents }
}

pub static EARNINGS_HISTORY: [EarningsEntry; 18] = [
    entry("Nike", "10:27 - Feb 11", 5540),
    entry("P&G", "10:28 - Feb 11", 3789),
    entry("Penalty", "10:29 - Feb 11", -1000),
    entry("Coca Cola", "10:27 - Feb 10", 3040),
    entry("FedEx", "10:28 - Feb 9", 6089),
    entry("Penalty", "10:29 - Feb 8", -500),
    entry("Walmart", "10:28 - Feb 7", 7802),
    entry("Nutella", "10:26 - Feb 6", 2610),
    entry("Penalty", "10:29 - Feb 5", -800),
    entry("Dove", "10:27 - Feb 4", 4175),
    entry("Walmart", "10:28 - Feb 3", 6230),
    entry("Penalty", "10:29 - Feb 2", -1200),
    entry("FedEx", "10:27 - Feb 1", 5920),
    entry("Stride", "10:28 - Jan 31", 1850),
    entry("Penalty", "10:29 - Jan 30", -600),
    entry("PastaHut", "10:27 - Jan 29", 3310),
    entry("H&M", "10:28 - Jan 28", 2240),
    entry("Penalty", "10:29 - Jan 27", -750),
];

pub fn earnings_history() -> &'static [EarningsEntry] {
    &EARNINGS_HISTORY
}

pub fn net_earnings(entries: &[EarningsEntry]) -> i64 {
    entries.iter().map(|e| e.cents).sum()
}

/// Signed dollars with cents, e.g. `+$55.40` or `-$10.00`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { '-' } else { '+' };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_format_like_the_history_tab() {
        assert_eq!(EARNINGS_HISTORY[0].amount_label(), "+$55.40");
        assert_eq!(EARNINGS_HISTORY[2].amount_label(), "-$10.00");
        assert!(EARNINGS_HISTORY[2].is_penalty());
    }

    #[test]
    fn net_subtracts_penalties() {
        let credits: i64 = EARNINGS_HISTORY.iter().filter(|e| e.cents > 0).map(|e| e.cents).sum();
        let penalties: i64 = EARNINGS_HISTORY.iter().filter(|e| e.cents < 0).map(|e| e.cents).sum();
        assert_eq!(credits, 52595);
        assert_eq!(penalties, -4850);
        assert_eq!(net_earnings(earnings_history()), 47745);
    }
}
