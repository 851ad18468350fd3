use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{
        button, column, container,
        container::{Style, bordered_box},
        row, scrollable, text,
    },
};

use crate::core::{model::BeeTier, nav::Route};

const UPGRADE_DOT: Color = Color::from_rgb(0.95, 0.3, 0.25);
const TABS: [Route; 5] = [
    Route::Dashboard,
    Route::TaskHub,
    Route::WorkList,
    Route::Earn,
    Route::Profile,
];

fn tab_style(active: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme);
        if active {
            style
                .border(border::width(2).color(theme.palette().primary))
                .background(theme.palette().background)
        } else {
            style
        }
    }
}

/// Bottom navigation. The profile tab carries a dot while an upgrade is available.
pub fn nav_bar<'a>(active: Route, show_upgrade_dot: bool) -> Element<'a, Route> {
    let tabs = TABS.iter().map(|&route| {
        let label: Element<'a, Route> = if route == Route::Profile && show_upgrade_dot {
            row![text(route.title()), text("●").color(UPGRADE_DOT).size(10)]
                .spacing(4)
                .align_y(Center)
                .into()
        } else {
            text(route.title()).into()
        };
        container(button(label).on_press(route))
            .style(tab_style(route == active))
            .padding(4)
            .into()
    });
    container(row(tabs).spacing(10))
        .center_x(Length::Fill)
        .padding(10)
        .into()
}

pub fn tier_badge<'a, Message: 'a>(tier: BeeTier, is_premium: bool) -> Element<'a, Message> {
    let mut badge = row![text(tier.label())].spacing(8);
    if is_premium {
        badge = badge.push(text("Premium"));
    }
    container(badge).style(bordered_box).padding(6).into()
}

/// Header, scrollable body and navigation bar.
pub fn layout<'a, Message>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
    nav: Element<'a, Message>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(column![
        container(text(title).size(28)).padding(10),
        container(scrollable(content.into()))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10),
        nav,
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
