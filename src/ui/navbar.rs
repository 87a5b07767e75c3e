// SPDX-License-Identifier: MPL-2.0
//! Header bar: store identity, page navigation and theme toggle.
//!
//! Wide windows show the navigation inline; narrow ones collapse it into a
//! menu that closes after any action.

use crate::domain::catalog::StoreInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::media;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a StoreInfo,
    pub media_root: &'a Path,
    /// Whether the home page is showing (highlights the Home entry).
    pub is_home: bool,
    pub menu_open: bool,
    /// Whether the dark theme is showing (selects the toggle glyph).
    pub is_dark: bool,
    /// Window width, used to collapse the navigation into the menu.
    pub width: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GoHome,
    ToggleTheme,
    ToggleMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    GoHome,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::GoHome => {
            *menu_open = false;
            Event::GoHome
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ToggleTheme
        }
    }
}

/// Whether `width` is too narrow for inline navigation.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::BREAKPOINT_MD
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let compact = is_compact(ctx.width);
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx, compact));

    if compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>, compact: bool) -> Element<'a, Message> {
    let mut brand = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if let Some(logo) = &ctx.store.logo {
        brand = brand.push(
            Image::new(media::image_handle(ctx.media_root, logo))
                .width(sizing::LOGO)
                .height(sizing::LOGO),
        );
    }
    brand = brand.push(Text::new(ctx.store.name.as_str()).size(typography::TITLE_MD));

    let brand_button = button(brand)
        .on_press(Message::GoHome)
        .padding(0)
        .style(styles::button::ghost);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand_button)
        .push(Space::new().width(Length::Fill));

    if compact {
        row = row.push(
            button(icons::menu(sizing::ICON_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav(ctx.menu_open)),
        );
    } else {
        row = row
            .push(nav_entry(
                icons::house(typography::BODY_LG),
                ctx.i18n.tr("nav-home"),
                Message::GoHome,
                ctx.is_home,
            ))
            .push(
                button(theme_icon(ctx.is_dark))
                    .on_press(Message::ToggleTheme)
                    .padding(spacing::XS)
                    .style(styles::button::nav(false)),
            );
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu = Column::new()
        .spacing(spacing::XXS)
        .push(nav_entry(
            icons::house(typography::BODY_LG),
            ctx.i18n.tr("nav-home"),
            Message::GoHome,
            ctx.is_home,
        ))
        .push(nav_entry(
            theme_icon(ctx.is_dark),
            ctx.i18n.tr("nav-toggle-theme"),
            Message::ToggleTheme,
            false,
        ));

    Container::new(Container::new(menu).padding(spacing::XS).style(styles::container::menu))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .into()
}

fn nav_entry<'a>(
    icon: Text<'a>,
    label: String,
    message: Message,
    active: bool,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icon)
        .push(Text::new(label));

    button(row)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav(active))
        .into()
}

fn theme_icon<'a>(is_dark: bool) -> Text<'a> {
    if is_dark {
        icons::sun(sizing::ICON_MD)
    } else {
        icons::moon(sizing::ICON_MD)
    }
}
