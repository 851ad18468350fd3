use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::{
        nav::Route,
        profile::{STATUS_FEED, StatusItem, earnings_history, format_cents, net_earnings},
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go},
        widgets,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Status,
    Earnings,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    tab: ProfileTab,
}

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    SelectTab(ProfileTab),
}

fn status_card<'a>(item: &'a StatusItem) -> Element<'a, ScreenMessage<ProfileScreen>> {
    let mut card = column![text(item.title).size(18), text(item.body)].spacing(4);
    if let Some(score) = item.score {
        let delta = item.delta.unwrap_or_default();
        card = card.push(text(format!("Score {score} ({delta})")));
    }
    if let Some(cents) = item.penalty_cents {
        card = card.push(text(format!("Penalty {}", format_cents(cents))));
    }
    container(card)
        .style(container::bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

fn earnings_tab<'a>() -> Element<'a, ScreenMessage<ProfileScreen>> {
    let history = earnings_history();
    let rows = history.iter().map(|entry| {
        row![
            column![text(entry.title), text(entry.when).size(12)].width(Length::Fill),
            text(entry.amount_label()),
        ]
        .into()
    });
    column![
        text(format!("Net {}", format_cents(net_earnings(history)))).size(20),
        column(rows).spacing(6),
    ]
    .spacing(10)
    .into()
}

impl Screen for ProfileScreen {
    type Message = ProfileMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let session = state.session();
        let tab_button = |tab: ProfileTab, label: &'a str| {
            button(label).on_press_maybe(
                (self.tab != tab)
                    .then(|| ScreenMessage::ScreenMessage(ProfileMessage::SelectTab(tab))),
            )
        };

        let mut content = column![
            text(session.username.as_str()).size(24),
            widgets::tier_badge(session.bee_tier, session.is_premium),
            text(format!(
                "{} work days · performance {}",
                session.work_days, session.performance
            )),
        ]
        .spacing(12);
        if session.show_upgrade_indicator() {
            content = content.push(text("You can upgrade to Advanced Bee."));
        }
        let feed: Element<'a, ScreenMessage<Self>> = match self.tab {
            ProfileTab::Status => column(STATUS_FEED.iter().map(status_card))
                .spacing(10)
                .into(),
            ProfileTab::Earnings => earnings_tab(),
        };
        content = content
            .push(
                row![
                    button("Premium").on_press(go::<Self>(Route::Premium)),
                    button("Terms & conditions")
                        .on_press(go::<Self>(Route::Contract { from_profile: true })),
                ]
                .spacing(10),
            )
            .push(
                row![
                    tab_button(ProfileTab::Status, "Status"),
                    tab_button(ProfileTab::Earnings, "Earnings"),
                ]
                .spacing(5),
            )
            .push(feed);

        widgets::layout(
            Route::Profile.title(),
            content,
            widgets::nav_bar(Route::Profile, session.show_upgrade_indicator()).map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProfileMessage::SelectTab(tab) => self.tab = tab,
        }
        Task::none()
    }
}
