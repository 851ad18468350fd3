use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text, text_input},
};

use crate::{
    core::{db::SessionRepository, nav::Route},
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, navigate},
    },
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    name: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    NameChanged(String),
    Submit,
    Saved(Result<bool, String>),
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut content = column![
            text("Welcome back").size(32),
            text_input("Your name", &self.name)
                .on_input(|name| ScreenMessage::ScreenMessage(LoginMessage::NameChanged(name)))
                .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit))
                .width(300),
            button("Log in").on_press(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
        ]
        .spacing(20)
        .align_x(Center);
        if let Some(error) = &self.error {
            content = content.push(text(error));
        }

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::NameChanged(name) => {
                self.name = name;
                self.error = None;
                Task::none()
            }
            LoginMessage::Submit => {
                let db = state.db.clone();
                let name = self.name.clone();
                Task::perform(
                    async move { db.set_username(&name).await.map_err(|e| format!("{e:#}")) },
                    |result| ScreenMessage::ScreenMessage(LoginMessage::Saved(result)),
                )
            }
            LoginMessage::Saved(Ok(true)) => navigate(Route::Dashboard),
            LoginMessage::Saved(Ok(false)) => {
                self.error = Some("Please enter your name.".to_string());
                Task::none()
            }
            LoginMessage::Saved(Err(e)) => {
                self.error = Some(e);
                Task::none()
            }
        }
    }
}
