use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};

use crate::{
    core::nav::Route,
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go},
    },
};

#[derive(Debug, Clone)]
pub struct LandingPageScreen;

impl Screen for LandingPageScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let content = column![
            text("BeeHire").size(40),
            text("Flexible work for busy bees"),
            button("Get Started").on_press(go::<Self>(Route::Login)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
