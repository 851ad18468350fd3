use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::{
        catalog::{SortOrder, TaskFilter, find_task, visible_tasks},
        db::{ApplyOutcome, WorkListRepository},
        model::{self, BeeTier, ControlLevel},
        nav::Route,
        rules::{self, Gate},
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go, navigate},
        widgets,
    },
};

#[derive(Debug, Clone, Default)]
pub struct TaskHubScreen {
    filter: TaskFilter,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TaskHubMessage {
    FilterTier(Option<BeeTier>),
    FilterControl(Option<ControlLevel>),
    ToggleSort,
    AddToCart(&'static str),
    Apply(&'static str),
    Added(Result<bool, String>),
    Applied(Result<ApplyOutcome, String>),
}

fn msg(message: TaskHubMessage) -> ScreenMessage<TaskHubScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn choice<'a>(
    label: &'a str,
    selected: bool,
    message: TaskHubMessage,
) -> Element<'a, ScreenMessage<TaskHubScreen>> {
    // the current choice is shown disabled
    button(text(label))
        .on_press_maybe((!selected).then(|| msg(message)))
        .into()
}

fn task_card<'a>(
    task: &'static model::Task,
    state: &'a AppState,
) -> Element<'a, ScreenMessage<TaskHubScreen>> {
    let in_cart = state.snapshot.cart.iter().any(|id| id == task.id);
    let applying = state.snapshot.applying.iter().any(|id| id == task.id);
    let lock = match rules::gate(state.session(), task) {
        Gate::Open => None,
        Gate::PremiumRequired => Some("Premium only".to_string()),
        Gate::TierTooLow { required } => Some(format!("Requires {}", required.label())),
    };

    let mut details = column![
        row![text(task.company).size(18), text(task.rate_label())].spacing(10),
        text(task.title),
        text(format!(
            "{} days/week · {} h/day · {} months · {} control",
            task.days_per_week, task.hours_per_day, task.months, task.control
        )),
    ]
    .spacing(4);
    if let Some(tag) = task.tag {
        details = details.push(text(tag));
    }
    if let Some(lock) = lock {
        details = details.push(text(lock));
    }

    let actions = row![
        button(if in_cart { "In cart" } else { "Add to cart" })
            .on_press_maybe((!in_cart).then(|| msg(TaskHubMessage::AddToCart(task.id)))),
        button(if applying { "Applying" } else { "Apply" })
            .on_press_maybe((!applying).then(|| msg(TaskHubMessage::Apply(task.id)))),
    ]
    .spacing(10);

    container(column![details, actions].spacing(8))
        .style(container::bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

impl Screen for TaskHubScreen {
    type Message = TaskHubMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let tiers = std::iter::once(choice(
            "All tiers",
            self.filter.tier.is_none(),
            TaskHubMessage::FilterTier(None),
        ))
        .chain(BeeTier::ALL.iter().map(|&tier| {
            choice(
                tier.as_str(),
                self.filter.tier == Some(tier),
                TaskHubMessage::FilterTier(Some(tier)),
            )
        }));
        let controls = std::iter::once(choice(
            "All control",
            self.filter.control.is_none(),
            TaskHubMessage::FilterControl(None),
        ))
        .chain(ControlLevel::ALL.iter().map(|&control| {
            choice(
                control.as_str(),
                self.filter.control == Some(control),
                TaskHubMessage::FilterControl(Some(control)),
            )
        }));
        let sort_label = match self.filter.sort {
            SortOrder::HourlyDesc => "Pay: high to low",
            SortOrder::HourlyAsc => "Pay: low to high",
        };

        let mut content = column![
            row(tiers).spacing(5),
            row(controls).spacing(5),
            button(sort_label).on_press(msg(TaskHubMessage::ToggleSort)),
        ]
        .spacing(10);
        if let Some(notice) = &self.notice {
            content = content.push(text(notice));
        }
        let tasks = visible_tasks(&self.filter);
        content = if tasks.is_empty() {
            content.push(text("No tasks match these filters."))
        } else {
            content.push(column(tasks.into_iter().map(|task| task_card(task, state))).spacing(10))
        };

        widgets::layout(
            Route::TaskHub.title(),
            content,
            widgets::nav_bar(Route::TaskHub, state.session().show_upgrade_indicator())
                .map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            TaskHubMessage::FilterTier(tier) => {
                self.filter.tier = tier;
                Task::none()
            }
            TaskHubMessage::FilterControl(control) => {
                self.filter.control = control;
                Task::none()
            }
            TaskHubMessage::ToggleSort => {
                self.filter.sort = match self.filter.sort {
                    SortOrder::HourlyDesc => SortOrder::HourlyAsc,
                    SortOrder::HourlyAsc => SortOrder::HourlyDesc,
                };
                Task::none()
            }
            TaskHubMessage::AddToCart(task_id) => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.add_to_cart(task_id).await.map_err(|e| format!("{e:#}")) },
                    |result| msg(TaskHubMessage::Added(result)),
                )
            }
            TaskHubMessage::Apply(task_id) => {
                let Some(task) = find_task(task_id) else {
                    return Task::none();
                };
                let db = state.db.clone();
                Task::perform(
                    async move { db.apply(task).await.map_err(|e| format!("{e:#}")) },
                    |result| msg(TaskHubMessage::Applied(result)),
                )
            }
            TaskHubMessage::Added(Ok(_)) => {
                self.notice = Some("Added to your cart.".to_string());
                Task::none()
            }
            TaskHubMessage::Applied(Ok(outcome)) => {
                if let Some(route) = outcome.redirect() {
                    return navigate(route);
                }
                self.notice = outcome
                    .notice()
                    .or_else(|| outcome.is_success().then(|| "Application sent.".to_string()));
                Task::none()
            }
            TaskHubMessage::Added(Err(e)) | TaskHubMessage::Applied(Err(e)) => {
                self.notice = Some(e);
                Task::none()
            }
        }
    }
}
