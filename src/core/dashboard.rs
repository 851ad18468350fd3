use time::{OffsetDateTime, format_description};

use crate::core::{catalog, model::Task};

/// A contract the bee is currently working on, as shown on the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCard {
    pub task_id: &'static str,
    pub stipend: &'static str,
    /// Percent complete. `None` while awaiting approval.
    pub progress: Option<u8>,
}

impl ContractCard {
    pub fn task(&self) -> &'static Task {
        catalog::resolve_task(self.task_id)
    }

    pub fn is_awaiting(&self) -> bool {
        self.progress.is_none()
    }
}

pub static CURRENT_CONTRACTS: [ContractCard; 3] = [
    ContractCard {
        task_id: "nike-01",
        stipend: "$27.70",
        progress: Some(67),
    },
    ContractCard {
        task_id: "pg-01",
        stipend: "$18.20",
        progress: Some(20),
    },
    ContractCard {
        task_id: "tiktok-01",
        stipend: "$14.00",
        progress: None,
    },
];

/// `YYYY/M/D`, no zero padding.
pub fn date_label(when: OffsetDateTime) -> anyhow::Result<String> {
    let format = format_description::parse("[year]/[month padding:none]/[day padding:none]")?;
    Ok(when.format(&format)?)
}

/// Today's date in local time, or UTC when the local offset cannot be determined.
pub fn today_label() -> anyhow::Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    date_label(now)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn date_label_is_unpadded() {
        let when = datetime!(2026-02-05 10:27 UTC);
        assert_eq!(date_label(when).unwrap(), "2026/2/5");
    }

    #[test]
    fn contract_cards_resolve() {
        assert_eq!(CURRENT_CONTRACTS[0].task().company, "Nike");
        assert!(CURRENT_CONTRACTS[2].is_awaiting());
    }
}
