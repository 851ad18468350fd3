use iced::{
    Element, Task,
    widget::{button, column, row, slider, text},
};

use crate::{
    core::{
        model::{BeeTier, ControlLevel},
        nav::Route,
        rules::{MAX_HOURS_PER_DAY, MIN_HOURS_PER_DAY, estimate, format_money},
    },
    gui::{
        AppState,
        screens::{ParentMessage, Screen, ScreenMessage, go},
        widgets,
    },
};

#[derive(Debug, Clone)]
pub struct EarnScreen {
    tier: BeeTier,
    control: ControlLevel,
    hours_per_day: f64,
}

impl Default for EarnScreen {
    fn default() -> Self {
        Self {
            tier: BeeTier::New,
            control: ControlLevel::Medium,
            hours_per_day: 6.0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EarnMessage {
    Tier(BeeTier),
    Control(ControlLevel),
    Hours(f64),
}

fn msg(message: EarnMessage) -> ScreenMessage<EarnScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for EarnScreen {
    type Message = EarnMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let result = estimate(self.tier, self.control, self.hours_per_day);

        let tiers = BeeTier::ALL.iter().map(|&tier| {
            button(text(tier.label()))
                .on_press_maybe((tier != self.tier).then(|| msg(EarnMessage::Tier(tier))))
                .into()
        });
        let controls = ControlLevel::ALL.iter().map(|&control| {
            button(text(control.as_str()))
                .on_press_maybe(
                    (control != self.control).then(|| msg(EarnMessage::Control(control))),
                )
                .into()
        });

        let content = column![
            text("Tier"),
            row(tiers).spacing(5),
            text("Control level"),
            row(controls).spacing(5),
            text(format!("{} hours per day", result.hours_per_day)),
            slider(
                MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY,
                self.hours_per_day,
                |hours| msg(EarnMessage::Hours(hours)),
            )
            .step(0.5),
            text(format!("Daily: {}", format_money(result.daily))),
            text(format!("Monthly: {}", format_money(result.monthly))),
            text(format!("Annual: {}", format_money(result.annual))).size(24),
            button("Earn more with Premium").on_press(go::<Self>(Route::Premium)),
        ]
        .spacing(12);

        widgets::layout(
            Route::Earn.title(),
            content,
            widgets::nav_bar(Route::Earn, state.session().show_upgrade_indicator())
                .map(go::<Self>),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            EarnMessage::Tier(tier) => self.tier = tier,
            EarnMessage::Control(control) => self.control = control,
            EarnMessage::Hours(hours) => self.hours_per_day = hours,
        }
        Task::none()
    }
}
