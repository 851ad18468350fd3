use iced::{
    Element, Task,
    widget::{button, column, text},
};

use crate::{
    core::{
        db::{SessionRepository, UpgradeOutcome},
        nav::Route,
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go},
        widgets,
    },
};

#[derive(Debug, Clone, Default)]
pub struct PremiumScreen {
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PremiumMessage {
    Subscribe,
    Upgrade,
    Subscribed(Result<(), String>),
    Upgraded(Result<UpgradeOutcome, String>),
}

fn msg(message: PremiumMessage) -> ScreenMessage<PremiumScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for PremiumScreen {
    type Message = PremiumMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let session = state.session();

        let mut content = column![
            widgets::tier_badge(session.bee_tier, session.is_premium),
            text("BeeHire Premium").size(24),
            text("Unlock premium-only tasks from top brands."),
        ]
        .spacing(12);
        content = if session.is_premium {
            content.push(text("Your Premium membership is active."))
        } else {
            content.push(button("Start Premium").on_press(msg(PremiumMessage::Subscribe)))
        };

        content = content
            .push(text("Advanced Bee").size(24))
            .push(text("More than 90 work days and a performance above 7 unlock Advanced tasks."))
            .push(
                button("Upgrade to Advanced")
                    .on_press_maybe(session.can_upgrade().then(|| msg(PremiumMessage::Upgrade))),
            );
        if let Some(notice) = &self.notice {
            content = content.push(text(notice));
        }

        widgets::layout(
            Route::Premium.title(),
            content,
            widgets::nav_bar(Route::Premium, session.show_upgrade_indicator()).map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            PremiumMessage::Subscribe => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.subscribe_premium().await.map_err(|e| format!("{e:#}")) },
                    |result| msg(PremiumMessage::Subscribed(result)),
                )
            }
            PremiumMessage::Upgrade => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.upgrade_to_advanced().await.map_err(|e| format!("{e:#}")) },
                    |result| msg(PremiumMessage::Upgraded(result)),
                )
            }
            PremiumMessage::Subscribed(Ok(())) => {
                self.notice = Some("Welcome to Premium!".to_string());
                Task::none()
            }
            PremiumMessage::Upgraded(Ok(UpgradeOutcome::Upgraded)) => {
                self.notice = Some("You are now an Advanced Bee.".to_string());
                Task::none()
            }
            PremiumMessage::Upgraded(Ok(UpgradeOutcome::NotEligible)) => {
                self.notice = Some("Not eligible for the upgrade yet.".to_string());
                Task::none()
            }
            PremiumMessage::Subscribed(Err(e)) | PremiumMessage::Upgraded(Err(e)) => {
                self.notice = Some(e);
                Task::none()
            }
        }
    }
}
