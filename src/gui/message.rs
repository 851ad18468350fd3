use crate::{
    core::{db::Snapshot, nav::Route},
    gui::{
        screens::{
            ScreenMessage, contract::ContractScreen, dashboard::DashboardScreen, earn::EarnScreen,
            landing_page::LandingPageScreen, login::LoginScreen, premium::PremiumScreen,
            profile::ProfileScreen, task_hub::TaskHubScreen, work_list::WorkListScreen,
        },
        state::AppState,
    },
};

#[derive(Debug)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    Login(ScreenMessage<LoginScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    TaskHub(ScreenMessage<TaskHubScreen>),
    WorkList(ScreenMessage<WorkListScreen>),
    Earn(ScreenMessage<EarnScreen>),
    Profile(ScreenMessage<ProfileScreen>),
    Premium(ScreenMessage<PremiumScreen>),
    Contract(ScreenMessage<ContractScreen>),
    Opened(Result<AppState, String>),
    Refreshed(Result<Snapshot, String>),
    Navigate(Route),
    Entered(Result<Route, String>),
}
