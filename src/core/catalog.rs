use crate::core::model::{BeeTier, ControlLevel, Task};

/// Postings listed in the task hub, in display order.
pub static HUB_TASKS: [Task; 10] = [
    Task {
        id: "stride-01",
        company: "Stride",
        title: "Leave 5-star reviews on Amazon",
        tier_required: BeeTier::New,
        hourly: 15.0,
        days_per_week: 5,
        hours_per_day: 2,
        months: 3,
        control: ControlLevel::Low,
        premium_only: false,
        tag: Some("New Bee Available"),
    },
    Task {
        id: "pastahut-01",
        company: "PastaHut",
        title: "Chopping vegetables (Onions, garlic, basil)",
        tier_required: BeeTier::Advanced,
        hourly: 24.0,
        days_per_week: 5,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::Medium,
        premium_only: false,
        tag: Some("Advanced Bee"),
    },
    Task {
        id: "hm-01",
        company: "H&M",
        title: "Folding garments to preset orientation",
        tier_required: BeeTier::New,
        hourly: 20.0,
        days_per_week: 5,
        hours_per_day: 5,
        months: 2,
        control: ControlLevel::Medium,
        premium_only: false,
        tag: Some("New Bee Available"),
    },
    Task {
        id: "lego-01",
        company: "LEGO",
        title: "Picking a fixed number of components for each LEGO product",
        tier_required: BeeTier::Golden,
        hourly: 48.0,
        days_per_week: 5,
        hours_per_day: 7,
        months: 6,
        control: ControlLevel::High,
        premium_only: true,
        tag: Some("Golden Bee"),
    },
    Task {
        id: "walmart-01",
        company: "Walmart",
        title: "Repeated barcode scanning of warehouse inventory",
        tier_required: BeeTier::Advanced,
        hourly: 24.0,
        days_per_week: 4,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::Medium,
        premium_only: false,
        tag: Some("Advanced Bee"),
    },
    Task {
        id: "dove-01",
        company: "Dove",
        title: "Assembly-line screen clicking",
        tier_required: BeeTier::New,
        hourly: 15.0,
        days_per_week: 5,
        hours_per_day: 6,
        months: 2,
        control: ControlLevel::Low,
        premium_only: false,
        tag: Some("New Bee Available"),
    },
    Task {
        id: "fedex-01",
        company: "FedEx",
        title: "Loading parcels onto a conveyor belt",
        tier_required: BeeTier::Advanced,
        hourly: 36.0,
        days_per_week: 5,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::High,
        premium_only: false,
        tag: Some("Advanced Bee"),
    },
    Task {
        id: "nutella-01",
        company: "Nutella",
        title: "Feeding materials into chocolate machines at fixed intervals",
        tier_required: BeeTier::New,
        hourly: 20.0,
        days_per_week: 6,
        hours_per_day: 8,
        months: 2,
        control: ControlLevel::Medium,
        premium_only: false,
        tag: Some("New Bee Available"),
    },
    Task {
        id: "sanitation-01",
        company: "SanitationCo.",
        title: "Collecting trash bins along assigned streets",
        tier_required: BeeTier::Advanced,
        hourly: 36.0,
        days_per_week: 5,
        hours_per_day: 7,
        months: 4,
        control: ControlLevel::High,
        premium_only: false,
        tag: Some("Advanced Bee"),
    },
    Task {
        id: "pictake-01",
        company: "PicTake.AI",
        title: "Walk along the street and take random photos every 10 seconds",
        tier_required: BeeTier::Golden,
        hourly: 50.0,
        days_per_week: 6,
        hours_per_day: 3,
        months: 1,
        control: ControlLevel::High,
        premium_only: true,
        tag: Some("Golden Bee"),
    },
];

/// Contracts the bee already holds; not listed in the hub but resolvable by id.
pub static CONTRACT_TASKS: [Task; 3] = [
    Task {
        id: "nike-01",
        company: "Nike",
        title: "Workshop process sampling & material handling",
        tier_required: BeeTier::New,
        hourly: 11.7,
        days_per_week: 5,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::High,
        premium_only: false,
        tag: None,
    },
    Task {
        id: "pg-01",
        company: "P&G",
        title: "Packaging defect detection & visual checks",
        tier_required: BeeTier::New,
        hourly: 8.2,
        days_per_week: 3,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::Medium,
        premium_only: false,
        tag: None,
    },
    Task {
        id: "tiktok-01",
        company: "TikTok",
        title: "Sponsored post interaction alignment",
        tier_required: BeeTier::New,
        hourly: 5.0,
        days_per_week: 5,
        hours_per_day: 5,
        months: 3,
        control: ControlLevel::Low,
        premium_only: false,
        tag: None,
    },
];

/// Stand-in for ids that are no longer in the catalog.
pub static UNKNOWN_TASK: Task = Task {
    id: "",
    company: "Unknown",
    title: "Unknown task",
    tier_required: BeeTier::New,
    hourly: 0.0,
    days_per_week: 0,
    hours_per_day: 0,
    months: 0,
    control: ControlLevel::Low,
    premium_only: false,
    tag: None,
};

/// Ids placed in the approved set the first time it is read empty.
pub const APPROVED_DEFAULT_IDS: [&str; 3] = ["nike-01", "pg-01", "tiktok-01"];

pub fn all_tasks() -> impl Iterator<Item = &'static Task> {
    HUB_TASKS.iter().chain(CONTRACT_TASKS.iter())
}

pub fn find_task(id: &str) -> Option<&'static Task> {
    all_tasks().find(|task| task.id == id)
}

/// Like [`find_task`], falling back to [`UNKNOWN_TASK`].
pub fn resolve_task(id: &str) -> &'static Task {
    find_task(id).unwrap_or(&UNKNOWN_TASK)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    HourlyAsc,
    #[default]
    HourlyDesc,
}

/// Task hub filter. `None` means "All".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub tier: Option<BeeTier>,
    pub control: Option<ControlLevel>,
    pub sort: SortOrder,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.tier.is_none_or(|tier| task.tier_required == tier)
            && self.control.is_none_or(|control| task.control == control)
    }
}

/// Hub postings passing `filter`, sorted by hourly rate. Equal rates keep catalog order.
pub fn visible_tasks(filter: &TaskFilter) -> Vec<&'static Task> {
    let mut tasks: Vec<&'static Task> = HUB_TASKS.iter().filter(|t| filter.matches(t)).collect();
    match filter.sort {
        SortOrder::HourlyAsc => tasks.sort_by(|a, b| a.hourly.total_cmp(&b.hourly)),
        SortOrder::HourlyDesc => tasks.sort_by(|a, b| b.hourly.total_cmp(&a.hourly)),
    }
    tasks
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = all_tasks().map(|t| t.id).collect();
        assert_eq!(ids.len(), HUB_TASKS.len() + CONTRACT_TASKS.len());
    }

    #[test]
    fn unknown_id_resolves_to_placeholder() {
        assert!(find_task("ups-01").is_none());
        let task = resolve_task("ups-01");
        assert_eq!(task.company, "Unknown");
        assert_eq!(task.hourly, 0.0);
    }

    #[test]
    fn default_sort_is_descending() {
        let tasks = visible_tasks(&TaskFilter::default());
        assert_eq!(tasks.len(), HUB_TASKS.len());
        assert_eq!(tasks[0].id, "pictake-01");
        assert!(tasks.windows(2).all(|w| w[0].hourly >= w[1].hourly));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let filter = TaskFilter {
            sort: SortOrder::HourlyAsc,
            ..TaskFilter::default()
        };
        let ids: Vec<_> = visible_tasks(&filter).into_iter().map(|t| t.id).collect();
        // stride and dove both pay 15, stride comes first in the catalog
        assert_eq!(&ids[..2], &["stride-01", "dove-01"]);

        let filter = TaskFilter::default();
        let ids: Vec<_> = visible_tasks(&filter).into_iter().map(|t| t.id).collect();
        let fedex = ids.iter().position(|id| *id == "fedex-01").unwrap();
        let sanitation = ids.iter().position(|id| *id == "sanitation-01").unwrap();
        assert!(fedex < sanitation);
    }

    #[test]
    fn filters_are_exact_match() {
        let filter = TaskFilter {
            tier: Some(BeeTier::Advanced),
            control: Some(ControlLevel::High),
            sort: SortOrder::HourlyDesc,
        };
        let ids: Vec<_> = visible_tasks(&filter).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["fedex-01", "sanitation-01"]);
    }
}
