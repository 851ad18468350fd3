use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, progress_bar, row, text},
};

use crate::{
    core::{
        dashboard::{CURRENT_CONTRACTS, ContractCard, today_label},
        nav::Route,
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go},
        widgets,
    },
};

#[derive(Debug, Clone)]
pub struct DashboardScreen;

fn contract_card<'a>(card: &'a ContractCard) -> Element<'a, ScreenMessage<DashboardScreen>> {
    let task = card.task();
    let status: Element<'a, _> = match card.progress {
        Some(done) => row![
            progress_bar(0.0..=100.0, f32::from(done)),
            text(format!("{done}%")),
        ]
        .spacing(8)
        .into(),
        None => text("Awaiting start").into(),
    };
    container(
        column![
            text(task.company).size(18),
            text(task.title),
            text(format!("{} · {}", task.rate_label(), card.stipend)),
            status,
        ]
        .spacing(4),
    )
    .style(container::bordered_box)
    .padding(10)
    .width(Length::Fill)
    .into()
}

impl Screen for DashboardScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let session = state.session();
        let today = today_label().unwrap_or_default();

        let content = column![
            text(format!("Hello, {}", session.username)).size(24),
            text(today),
            widgets::tier_badge(session.bee_tier, session.is_premium),
            row![
                button("Find work").on_press(go::<Self>(Route::TaskHub)),
                button("Estimate earnings").on_press(go::<Self>(Route::Earn)),
            ]
            .spacing(10),
            text("Current contracts").size(20),
            column(CURRENT_CONTRACTS.iter().map(contract_card)).spacing(10),
        ]
        .spacing(15);

        widgets::layout(
            Route::Dashboard.title(),
            content,
            widgets::nav_bar(Route::Dashboard, session.show_upgrade_indicator()).map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
