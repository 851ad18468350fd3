use std::path::PathBuf;

use iced::{
    Element, Length, Task,
    widget::{column, container, text},
};
use tracing::{debug, error};

use crate::{
    core::{
        db::{BeeHireDb, ContractRepository},
        nav::Route,
    },
    gui::{
        AppState, Message,
        screens::{Screen, ScreenData, ScreenMessage, landing_page::LandingPageScreen},
    },
};

pub struct BeeHireApp {
    state: Option<AppState>,
    screen: ScreenData,
    error: Option<String>,
}

/// Run the consent guard and the contract's own forwarding against the store.
async fn resolve_route(db: BeeHireDb, route: Route) -> anyhow::Result<Route> {
    let target = db.enter(route).await?;
    if let Route::Contract { from_profile } = target {
        if let Some(next) = db.open_contract(from_profile).await?.redirect {
            return Ok(next);
        }
    }
    Ok(target)
}

fn unwrap_screen(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl BeeHireApp {
    pub fn new(store_file: PathBuf) -> (Self, Task<Message>) {
        (
            Self {
                state: None,
                screen: ScreenData::LandingPage(LandingPageScreen),
                error: None,
            },
            Task::perform(
                async move {
                    AppState::open(&store_file)
                        .await
                        .map_err(|e| format!("{e:#}"))
                },
                Message::Opened,
            ),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Opened(Ok(state)) => {
                self.state = Some(state);
                Task::none()
            }
            Message::Opened(Err(e)) | Message::Refreshed(Err(e)) | Message::Entered(Err(e)) => {
                error!(error = %e, "store operation failed");
                self.error = Some(e);
                Task::none()
            }
            Message::Refreshed(Ok(snapshot)) => match self.state.as_mut() {
                Some(state) => {
                    state.snapshot = snapshot;
                    // another view may have reset the contract under us
                    let current = self.screen.route();
                    if current.requires_contract() && !state.session().contract_accepted {
                        Task::done(Message::Navigate(current))
                    } else {
                        Task::none()
                    }
                }
                None => Task::none(),
            },
            Message::Navigate(route) => match self.state.as_ref() {
                Some(state) => {
                    Task::perform(resolve_route(state.db.clone(), route), |result| {
                        Message::Entered(result.map_err(|e| format!("{e:#}")))
                    })
                }
                None => Task::none(),
            },
            Message::Entered(Ok(route)) => {
                debug!(?route, "entering screen");
                self.screen = ScreenData::for_route(route);
                Task::none()
            }
            message => match self.state.as_mut() {
                Some(state) => self.screen.update(message, state).map(unwrap_screen),
                None => Task::none(),
            },
        };

        match self.state.as_mut() {
            Some(state) if state.take_changes() => {
                let db = state.db.clone();
                let refresh = Task::perform(
                    async move { db.snapshot().await.map_err(|e| format!("{e:#}")) },
                    Message::Refreshed,
                );
                Task::batch([task, refresh])
            }
            _ => task,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Some(e) = &self.error {
            return container(column![text("Something went wrong").size(24), text(e)].spacing(10))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }
        match &self.state {
            Some(state) => self.screen.view(state).map(unwrap_screen),
            None => container(text("Loading..."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        }
    }
}
