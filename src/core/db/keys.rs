//! Storage keys. These match what earlier builds of the app wrote, so
//! existing stores keep working.

pub const USERNAME: &str = "username";
pub const BEE_TIER: &str = "beeTier";
pub const IS_PREMIUM: &str = "isPremium";
pub const WORK_DAYS: &str = "workDays";
pub const PERFORMANCE: &str = "performance";
pub const CONTRACT_ACCEPTED: &str = "contractAccepted";
pub const CART: &str = "workCart";
pub const APPLYING: &str = "workApplying";
pub const APPROVED: &str = "workApproved";

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";
