use iced::{
    Element, Length, Task,
    widget::{button, column, container, text, toggler},
};

use crate::{
    core::{
        db::{AcceptOutcome, ContractRepository},
        nav::Route,
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go, navigate},
        widgets,
    },
};

const AGREEMENT_TITLE: &str = "BeeHire Night Bees Participation Agreement";
const AGREEMENT: &str = "By enrolling as a BeeHire Night Bee, you authorize BeeHire, its \
affiliates and enterprise partners to coordinate and manage sleep-based participation \
activities during rest periods selected or inferred through the application. You consent \
to the collection and processing of biological, behavioral and interaction data generated \
through participation for compensation calculation, client verification and service \
improvement. Compensation estimates shown in the app are projections subject to adjustment \
and do not constitute guaranteed income. Continued use of the service constitutes ongoing \
acceptance of updated terms as they evolve.";

#[derive(Debug, Clone)]
pub struct ContractScreen {
    from_profile: bool,
    checked: bool,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ContractMessage {
    Toggle(bool),
    Continue,
    Reset,
    Accepted(Result<AcceptOutcome, String>),
    WasReset(Result<(), String>),
}

fn msg(message: ContractMessage) -> ScreenMessage<ContractScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl ContractScreen {
    pub fn new(from_profile: bool) -> Self {
        Self {
            from_profile,
            checked: false,
            notice: None,
        }
    }

    pub fn from_profile(&self) -> bool {
        self.from_profile
    }
}

impl Screen for ContractScreen {
    type Message = ContractMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let accepted = state.session().contract_accepted;
        let title = if accepted {
            "Contract (Read Only)"
        } else {
            Route::Contract {
                from_profile: self.from_profile,
            }
            .title()
        };

        let mut content = column![
            text(AGREEMENT_TITLE).size(20),
            text("Effective upon acceptance").size(12),
            container(text(AGREEMENT))
                .style(container::bordered_box)
                .padding(10)
                .width(Length::Fill),
            // locked once accepted
            toggler(accepted || self.checked)
                .label("I have read and agree to the Terms and Conditions.")
                .on_toggle_maybe((!accepted).then_some(|checked: bool| msg(ContractMessage::Toggle(checked)))),
            button("Continue").on_press_maybe(
                (self.checked && !accepted).then(|| msg(ContractMessage::Continue))
            ),
            button("Reset Contract").on_press(msg(ContractMessage::Reset)),
        ]
        .spacing(12);
        if let Some(notice) = &self.notice {
            content = content.push(text(notice));
        }

        widgets::layout(
            title,
            content,
            widgets::nav_bar(
                Route::Contract {
                    from_profile: self.from_profile,
                },
                state.session().show_upgrade_indicator(),
            )
            .map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ContractMessage::Toggle(checked) => {
                self.checked = checked;
                Task::none()
            }
            ContractMessage::Continue => {
                let db = state.db.clone();
                let checked = self.checked;
                Task::perform(
                    async move { db.accept_contract(checked).await.map_err(|e| format!("{e:#}")) },
                    |result| msg(ContractMessage::Accepted(result)),
                )
            }
            ContractMessage::Reset => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.reset_contract().await.map_err(|e| format!("{e:#}")) },
                    |result| msg(ContractMessage::WasReset(result)),
                )
            }
            ContractMessage::Accepted(Ok(AcceptOutcome::NotChecked)) => Task::none(),
            ContractMessage::Accepted(Ok(_)) => navigate(Route::TaskHub),
            ContractMessage::WasReset(Ok(())) => {
                self.checked = false;
                self.notice = None;
                Task::none()
            }
            ContractMessage::Accepted(Err(e)) | ContractMessage::WasReset(Err(e)) => {
                self.notice = Some(e);
                Task::none()
            }
        }
    }
}
