use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use beehire::core::dashboard::{self, CURRENT_CONTRACTS};
use beehire::core::db::APPLYING_STATUS;
use beehire::core::profile::{self, STATUS_FEED};
use beehire::core::rules::format_money;
use beehire::{
    AcceptOutcome, ApplyOutcome, BeeHireDb, BeeTier, ContractRepository, ControlLevel, Route,
    SessionRepository, SortOrder, TaskFilter, UpgradeOutcome, WorkListRepository, find_task,
};

#[derive(Parser)]
#[command(name = "beehire")]
#[command(about = "Gig-work marketplace: tasks, work list, tiers and earnings")]
struct Cli {
    /// Path to the store file
    #[arg(long, value_name = "FILE", env = "BEEHIRE_STORE", default_value = "beehire.db")]
    store: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print machine-readable JSON where supported
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Set the display name
    Login { name: String },
    /// Show the dashboard: name, tier, current contracts
    Status,
    /// List task hub postings
    Tasks {
        #[arg(long)]
        tier: Option<TierArg>,
        #[arg(long)]
        control: Option<ControlArg>,
        #[arg(long, value_enum, default_value_t = SortArg::Desc)]
        sort: SortArg,
    },
    /// Add a task to the cart
    AddToCart { task_id: String },
    /// Remove a task from the cart
    RemoveFromCart { task_id: String },
    /// Apply to a task directly
    Apply { task_id: String },
    /// Move a task from the cart to applying
    Move { task_id: String },
    /// Show cart, applying and approved tasks
    WorkList,
    /// Show, accept or reset the participation contract
    Contract {
        #[command(subcommand)]
        action: ContractAction,
    },
    /// Premium membership and tier upgrade
    Premium {
        #[command(subcommand)]
        action: PremiumAction,
    },
    /// Estimate earnings for a tier, control level and hours per day
    Estimate {
        #[arg(long, default_value = "new")]
        tier: TierArg,
        #[arg(long, default_value = "medium")]
        control: ControlArg,
        #[arg(long, default_value_t = 6.0)]
        hours: f64,
    },
    /// Show the profile: status feed and earnings history
    Profile,
}

#[derive(Subcommand)]
enum ContractAction {
    Show {
        /// Review a read-only copy without being forwarded
        #[arg(long)]
        from_profile: bool,
    },
    Accept {
        /// Tick the agreement box
        #[arg(long)]
        agree: bool,
    },
    Reset,
}

#[derive(Subcommand)]
enum PremiumAction {
    /// Show premium status and upgrade eligibility
    Show,
    /// Start a premium membership
    Subscribe,
    /// Upgrade from New to Advanced Bee
    Upgrade,
}

#[derive(Clone, Copy, ValueEnum)]
enum TierArg {
    New,
    Advanced,
    Golden,
}

impl From<TierArg> for BeeTier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::New => BeeTier::New,
            TierArg::Advanced => BeeTier::Advanced,
            TierArg::Golden => BeeTier::Golden,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ControlArg {
    Low,
    Medium,
    High,
}

impl From<ControlArg> for ControlLevel {
    fn from(value: ControlArg) -> Self {
        match value {
            ControlArg::Low => ControlLevel::Low,
            ControlArg::Medium => ControlLevel::Medium,
            ControlArg::High => ControlLevel::High,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    beehire::logging::init_logging(args.verbose)?;

    let db = BeeHireDb::open(&args.store).await?;
    let session = db.seed_session().await?;

    match args.command {
        Command::Login { name } => {
            if db.set_username(&name).await? {
                println!("Welcome, {}.", name.trim());
            } else {
                println!("A name is required.");
            }
        }
        Command::Status => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("{}  Hello, {}", dashboard::today_label()?, session.username);
                println!("Tier: {}{}", session.bee_tier.label(), upgrade_dot(session.show_upgrade_indicator()));
                println!("Premium: {}", if session.is_premium { "yes" } else { "no" });
                println!("\nYour Current Contract");
                for card in CURRENT_CONTRACTS.iter() {
                    let task = card.task();
                    let progress = match card.progress {
                        Some(p) => format!("{}%", p),
                        None => "Awaiting".to_string(),
                    };
                    println!(
                        "  {:<8} {:<50} {:>7}  {} control, {} days/week  {}",
                        task.company, task.title, card.stipend, task.control, task.days_per_week, progress
                    );
                }
            }
        }
        Command::Tasks { tier, control, sort } => {
            if !enter(&db, Route::TaskHub).await? {
                return Ok(());
            }
            let filter = TaskFilter {
                tier: tier.map(BeeTier::from),
                control: control.map(ControlLevel::from),
                sort: if sort == SortArg::Asc {
                    SortOrder::HourlyAsc
                } else {
                    SortOrder::HourlyDesc
                },
            };
            let tasks = beehire::visible_tasks(&filter);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for task in tasks {
                    println!(
                        "{:<14} {:<14} {:>10}  {:<8} {:<6} {}d/wk {}h/day {}mo{}  {}",
                        task.id,
                        task.company,
                        task.rate_label(),
                        task.tier_required,
                        task.control,
                        task.days_per_week,
                        task.hours_per_day,
                        task.months,
                        if task.premium_only { " [premium]" } else { "" },
                        task.title
                    );
                }
            }
        }
        Command::AddToCart { task_id } => {
            if !enter(&db, Route::TaskHub).await? {
                return Ok(());
            }
            let task = find_task(&task_id).ok_or_else(|| anyhow::anyhow!("Unknown task: {}", task_id))?;
            if db.add_to_cart(task.id).await? {
                println!("Added {} to cart.", task.company);
            } else {
                println!("{} is already in your cart.", task.company);
            }
        }
        Command::RemoveFromCart { task_id } => {
            if !enter(&db, Route::WorkList).await? {
                return Ok(());
            }
            if db.remove_from_cart(&task_id).await? {
                println!("Removed {} from cart.", task_id);
            } else {
                println!("{} is not in your cart.", task_id);
            }
        }
        Command::Apply { task_id } => {
            if !enter(&db, Route::TaskHub).await? {
                return Ok(());
            }
            let task = find_task(&task_id).ok_or_else(|| anyhow::anyhow!("Unknown task: {}", task_id))?;
            report_apply(db.apply(task).await?, task.company);
        }
        Command::Move { task_id } => {
            if !enter(&db, Route::WorkList).await? {
                return Ok(());
            }
            let task = find_task(&task_id).ok_or_else(|| anyhow::anyhow!("Unknown task: {}", task_id))?;
            report_apply(db.move_cart_to_applying(task).await?, task.company);
        }
        Command::WorkList => {
            if !enter(&db, Route::WorkList).await? {
                return Ok(());
            }
            let list = db.work_list().await?;
            println!("Cart ({})", list.cart.len());
            if list.cart.is_empty() {
                println!("  No items in your cart yet.");
            }
            for entry in &list.cart {
                println!(
                    "  {:<14} {:<14} {:>10}{}",
                    entry.id,
                    entry.task.company,
                    entry.task.rate_label(),
                    if entry.is_locked() { "  [locked]" } else { "" }
                );
            }
            println!("Applying ({})", list.applying.len());
            for entry in &list.applying {
                println!("  {:<14} {:<14} {}", entry.id, entry.task.company, APPLYING_STATUS);
            }
            println!("Approved ({})", list.approved.len());
            for entry in &list.approved {
                println!("  {:<14} {:<14} {}", entry.id, entry.task.company, entry.task.title);
            }
        }
        Command::Contract { action } => match action {
            ContractAction::Show { from_profile } => {
                let view = db.open_contract(from_profile).await?;
                if let Some(route) = view.redirect {
                    println!("Contract already accepted; continuing to {}.", route.title());
                } else if view.read_only {
                    println!("Contract (Read Only): accepted.");
                } else {
                    println!("Contract: not accepted. Run `beehire contract accept --agree` to continue.");
                }
            }
            ContractAction::Accept { agree } => match db.accept_contract(agree).await? {
                AcceptOutcome::Accepted => println!("Contract accepted. Task Hub unlocked."),
                AcceptOutcome::AlreadyAccepted => println!("Contract was already accepted."),
                AcceptOutcome::NotChecked => println!("Tick the agreement box (--agree) to continue."),
            },
            ContractAction::Reset => {
                db.reset_contract().await?;
                println!("Contract acceptance cleared.");
            }
        },
        Command::Premium { action } => match action {
            PremiumAction::Show => {
                println!("Premium: {}", if session.is_premium { "active" } else { "inactive" });
                println!(
                    "Advanced upgrade: {} (work days {} > 90, performance {} > 7, New Bee only)",
                    if session.can_upgrade() { "available" } else { "unavailable" },
                    session.work_days,
                    session.performance
                );
            }
            PremiumAction::Subscribe => {
                db.subscribe_premium().await?;
                println!("Premium membership started.");
            }
            PremiumAction::Upgrade => match db.upgrade_to_advanced().await? {
                UpgradeOutcome::Upgraded => println!("You are now an Advanced Bee."),
                UpgradeOutcome::NotEligible => {
                    println!("Not eligible: requires work days > 90 and performance > 7 (New Bee only).")
                }
            },
        },
        Command::Estimate { tier, control, hours } => {
            let estimate = beehire::estimate(tier.into(), control.into(), hours);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("Hours per day: {}", estimate.hours_per_day);
                println!("Daily:   {}", format_money(estimate.daily));
                println!("Monthly: {}", format_money(estimate.monthly));
                println!("Annual:  {}", format_money(estimate.annual));
            }
        }
        Command::Profile => {
            println!("{} ({}){}", session.username, session.bee_tier.label(), upgrade_dot(session.show_upgrade_indicator()));
            println!("\nStatus");
            for item in STATUS_FEED.iter() {
                println!("  {}: {}", item.title, item.body);
                if let (Some(score), Some(delta)) = (item.score, item.delta) {
                    println!("    score {} ({})", score, delta);
                }
                if let Some(penalty) = item.penalty_cents {
                    println!("    {}", profile::format_cents(penalty));
                }
            }
            println!("\nEarnings");
            for entry in profile::earnings_history() {
                println!("  {:<10} {:<16} {:>9}", entry.title, entry.when, entry.amount_label());
            }
            println!(
                "  Net: {}",
                profile::format_cents(profile::net_earnings(profile::earnings_history()))
            );
        }
    }

    db.store().close().await?;
    Ok(())
}

/// Run the entry guard; prints the redirect and returns `false` when blocked.
async fn enter(db: &BeeHireDb, route: Route) -> anyhow::Result<bool> {
    match db.enter(route).await? {
        target if target == route => Ok(true),
        Route::Contract { .. } => {
            println!("Accept the contract first: `beehire contract accept --agree`.");
            Ok(false)
        }
        other => {
            println!("Redirected to {}.", other.title());
            Ok(false)
        }
    }
}

fn report_apply(outcome: ApplyOutcome, company: &str) {
    match outcome {
        ApplyOutcome::Applied => println!("Applied to {}. {}", company, APPLYING_STATUS),
        ApplyOutcome::AlreadyApplying => println!("Already applying to {}.", company),
        ApplyOutcome::PremiumRequired => println!(
            "{} is a premium task. Run `beehire premium subscribe` to unlock it.",
            company
        ),
        ApplyOutcome::TierTooLow { .. } => {
            if let Some(notice) = outcome.notice() {
                println!("{}", notice);
            }
        }
    }
}

fn upgrade_dot(show: bool) -> &'static str {
    if show { "  (upgrade available)" } else { "" }
}
