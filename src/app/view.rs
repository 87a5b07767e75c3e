// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the header, the optional warning banner and the scrollable page
//! (content followed by the footer). While the lightbox is open its overlay
//! is layered above everything else.

use super::{Message, Page, Route};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{footer, home, icons, navbar, product_detail, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub media_root: &'a Path,
    pub page: &'a Page,
    pub menu_open: bool,
    pub is_dark: bool,
    pub width: f32,
    pub warnings: &'a [String],
}

/// Renders the entire application view.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        store: &ctx.catalog.store,
        media_root: ctx.media_root,
        is_home: matches!(ctx.page, Page::Home),
        menu_open: ctx.menu_open,
        is_dark: ctx.is_dark,
        width: ctx.width,
    })
    .map(Message::Navbar);

    let page_content = Column::new()
        .width(Length::Fill)
        .push(
            Container::new(page_body(&ctx))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(footer::view(footer::ViewContext {
            i18n: ctx.i18n,
            store: &ctx.catalog.store,
            width: ctx.width,
        }));

    let mut layout = Column::new().width(Length::Fill).height(Length::Fill).push(header);
    for (position, key) in ctx.warnings.iter().enumerate() {
        layout = layout.push(warning_banner(ctx.i18n, key, position));
    }
    layout = layout.push(scrollable(page_content).height(Length::Fill));

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let overlay = match ctx.page {
        Page::Product(state) => state.overlay(ctx.i18n, ctx.media_root),
        Page::Home | Page::NotFound(_) => None,
    };

    match overlay {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay.map(Message::Detail))
            .into(),
        None => base.into(),
    }
}

fn page_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.page {
        Page::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            media_root: ctx.media_root,
            width: ctx.width,
        })
        .map(Message::Home),
        Page::Product(state) => match ctx.catalog.find(state.product_id()) {
            Some(product) => state
                .view(product_detail::ViewContext {
                    i18n: ctx.i18n,
                    product,
                    store: &ctx.catalog.store,
                    media_root: ctx.media_root,
                    width: ctx.width,
                })
                .map(Message::Detail),
            None => not_found(ctx.i18n),
        },
        Page::NotFound(_) => not_found(ctx.i18n),
    }
}

fn not_found<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("not-found-title")).size(typography::TITLE_LG))
        .push(
            button(Text::new(i18n.tr("not-found-home")))
                .on_press(Message::Navigate(Route::Home))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str, position: usize) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)))
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::cross(sizing::ICON_MD))
                .on_press(Message::DismissWarning(position))
                .padding(spacing::XXS)
                .style(styles::button::ghost),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::warning)
        .into()
}
