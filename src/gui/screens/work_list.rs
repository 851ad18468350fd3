use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::{
        catalog::find_task,
        db::{APPLYING_STATUS, ApplyOutcome, WorkListEntry, WorkListRepository},
        nav::Route,
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go, navigate},
        widgets,
    },
};

#[derive(Debug, Clone, Default)]
pub struct WorkListScreen {
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum WorkListMessage {
    Move(String),
    Remove(String),
    Moved(Result<ApplyOutcome, String>),
    Removed(Result<bool, String>),
}

fn msg(message: WorkListMessage) -> ScreenMessage<WorkListScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn entry_row<'a>(
    entry: WorkListEntry,
    actions: Option<Element<'a, ScreenMessage<WorkListScreen>>>,
    status: Option<&'a str>,
) -> Element<'a, ScreenMessage<WorkListScreen>> {
    let task = entry.task;
    let mut details = column![
        row![text(task.company).size(18), text(task.rate_label())].spacing(10),
        text(task.title),
    ]
    .spacing(4);
    if entry.locked_by_premium {
        details = details.push(text("Locked: Premium only"));
    } else if entry.locked_by_tier {
        details = details.push(text(format!("Locked: requires {}", task.tier_required.label())));
    }
    if let Some(status) = status {
        details = details.push(text(status));
    }
    if let Some(actions) = actions {
        details = details.push(actions);
    }
    container(details)
        .style(container::bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

fn section<'a>(
    title: &'a str,
    rows: Vec<Element<'a, ScreenMessage<WorkListScreen>>>,
) -> Element<'a, ScreenMessage<WorkListScreen>> {
    let header = text(format!("{} ({})", title, rows.len())).size(20);
    if rows.is_empty() {
        column![header, text("Nothing here yet.")].spacing(8).into()
    } else {
        column![header, column(rows).spacing(8)].spacing(8).into()
    }
}

impl Screen for WorkListScreen {
    type Message = WorkListMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let list = state.snapshot.work_list();

        let cart = list
            .cart
            .into_iter()
            .map(|entry| {
                // ids no longer in the catalog can only be removed
                let can_move = find_task(&entry.id).is_some();
                let actions = row![
                    button("Apply").on_press_maybe(
                        can_move.then(|| msg(WorkListMessage::Move(entry.id.clone())))
                    ),
                    button("Remove").on_press(msg(WorkListMessage::Remove(entry.id.clone()))),
                ]
                .spacing(10);
                entry_row(entry, Some(actions.into()), None)
            })
            .collect();
        let applying = list
            .applying
            .into_iter()
            .map(|entry| entry_row(entry, None, Some(APPLYING_STATUS)))
            .collect();
        let approved = list
            .approved
            .into_iter()
            .map(|entry| entry_row(entry, None, Some("Approved")))
            .collect();

        let mut content = column![].spacing(20);
        if let Some(notice) = &self.notice {
            content = content.push(text(notice));
        }
        content = content
            .push(section("Cart", cart))
            .push(section("Applying", applying))
            .push(section("Approved", approved))
            .push(button("Browse tasks").on_press(go::<Self>(Route::TaskHub)));

        widgets::layout(
            Route::WorkList.title(),
            content,
            widgets::nav_bar(Route::WorkList, state.session().show_upgrade_indicator())
                .map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            WorkListMessage::Move(task_id) => {
                let Some(task) = find_task(&task_id) else {
                    return Task::none();
                };
                let db = state.db.clone();
                Task::perform(
                    async move {
                        db.move_cart_to_applying(task)
                            .await
                            .map_err(|e| format!("{e:#}"))
                    },
                    |result| msg(WorkListMessage::Moved(result)),
                )
            }
            WorkListMessage::Remove(task_id) => {
                let db = state.db.clone();
                Task::perform(
                    async move {
                        db.remove_from_cart(&task_id)
                            .await
                            .map_err(|e| format!("{e:#}"))
                    },
                    |result| msg(WorkListMessage::Removed(result)),
                )
            }
            WorkListMessage::Moved(Ok(outcome)) => {
                if let Some(route) = outcome.redirect() {
                    return navigate(route);
                }
                self.notice = outcome.notice();
                Task::none()
            }
            WorkListMessage::Removed(Ok(_)) => {
                self.notice = None;
                Task::none()
            }
            WorkListMessage::Moved(Err(e)) | WorkListMessage::Removed(Err(e)) => {
                self.notice = Some(e);
                Task::none()
            }
        }
    }
}
