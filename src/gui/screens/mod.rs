pub mod contract;
pub mod dashboard;
pub mod earn;
pub mod landing_page;
pub mod login;
pub mod premium;
pub mod profile;
pub mod task_hub;
pub mod work_list;

use iced::{Element, Task};

use crate::{
    core::nav::Route,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// What a screen can ask of the application around it.
#[derive(Debug, Clone)]
pub enum ParentMessage {
    Navigate(Route),
}

/// Message asking the parent to switch screens.
pub(crate) fn go<S>(route: Route) -> ScreenMessage<S>
where
    S: Screen<ParentMessage = ParentMessage>,
{
    ScreenMessage::ParentMessage(ParentMessage::Navigate(route))
}

pub(crate) fn navigate<S>(route: Route) -> Task<ScreenMessage<S>>
where
    S: Screen<ParentMessage = ParentMessage> + 'static,
    S::Message: Send,
{
    Task::done(go(route))
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    Login(login::LoginScreen),
    Dashboard(dashboard::DashboardScreen),
    TaskHub(task_hub::TaskHubScreen),
    WorkList(work_list::WorkListScreen),
    Earn(earn::EarnScreen),
    Profile(profile::ProfileScreen),
    Premium(premium::PremiumScreen),
    Contract(contract::ContractScreen),
}

impl ScreenData {
    /// Fresh screen for an already guarded route.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Landing => ScreenData::LandingPage(landing_page::LandingPageScreen),
            Route::Login => ScreenData::Login(login::LoginScreen::default()),
            Route::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen),
            Route::TaskHub => ScreenData::TaskHub(task_hub::TaskHubScreen::default()),
            Route::WorkList => ScreenData::WorkList(work_list::WorkListScreen::default()),
            Route::Earn => ScreenData::Earn(earn::EarnScreen::default()),
            Route::Profile => ScreenData::Profile(profile::ProfileScreen::default()),
            Route::Premium => ScreenData::Premium(premium::PremiumScreen::default()),
            Route::Contract { from_profile } => {
                ScreenData::Contract(contract::ContractScreen::new(from_profile))
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ScreenData::LandingPage(_) => Route::Landing,
            ScreenData::Login(_) => Route::Login,
            ScreenData::Dashboard(_) => Route::Dashboard,
            ScreenData::TaskHub(_) => Route::TaskHub,
            ScreenData::WorkList(_) => Route::WorkList,
            ScreenData::Earn(_) => Route::Earn,
            ScreenData::Profile(_) => Route::Profile,
            ScreenData::Premium(_) => Route::Premium,
            ScreenData::Contract(page) => Route::Contract {
                from_profile: page.from_profile(),
            },
        }
    }
}

fn forward<S>(
    page: &mut S,
    message: ScreenMessage<S>,
    state: &mut AppState,
    wrap: fn(ScreenMessage<S>) -> Message,
) -> Task<ScreenMessage<ScreenData>>
where
    S: Screen<ParentMessage = ParentMessage> + 'static,
    S::Message: Send,
{
    match message {
        ScreenMessage::ScreenMessage(msg) => page
            .update(msg, state)
            .map(wrap)
            .map(ScreenMessage::ScreenMessage),
        ScreenMessage::ParentMessage(ParentMessage::Navigate(route)) => {
            Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view(state).map(Message::LandingPage),
            ScreenData::Login(screen) => screen.view(state).map(Message::Login),
            ScreenData::Dashboard(screen) => screen.view(state).map(Message::Dashboard),
            ScreenData::TaskHub(screen) => screen.view(state).map(Message::TaskHub),
            ScreenData::WorkList(screen) => screen.view(state).map(Message::WorkList),
            ScreenData::Earn(screen) => screen.view(state).map(Message::Earn),
            ScreenData::Profile(screen) => screen.view(state).map(Message::Profile),
            ScreenData::Premium(screen) => screen.view(state).map(Message::Premium),
            ScreenData::Contract(screen) => screen.view(state).map(Message::Contract),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => {
                forward(page, msg, state, Message::LandingPage)
            }
            (ScreenData::Login(page), Message::Login(msg)) => forward(page, msg, state, Message::Login),
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => {
                forward(page, msg, state, Message::Dashboard)
            }
            (ScreenData::TaskHub(page), Message::TaskHub(msg)) => {
                forward(page, msg, state, Message::TaskHub)
            }
            (ScreenData::WorkList(page), Message::WorkList(msg)) => {
                forward(page, msg, state, Message::WorkList)
            }
            (ScreenData::Earn(page), Message::Earn(msg)) => forward(page, msg, state, Message::Earn),
            (ScreenData::Profile(page), Message::Profile(msg)) => {
                forward(page, msg, state, Message::Profile)
            }
            (ScreenData::Premium(page), Message::Premium(msg)) => {
                forward(page, msg, state, Message::Premium)
            }
            (ScreenData::Contract(page), Message::Contract(msg)) => {
                forward(page, msg, state, Message::Contract)
            }
            // messages for a screen that is no longer shown
            _ => Task::none(),
        }
    }
}
