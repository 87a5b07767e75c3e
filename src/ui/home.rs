// SPDX-License-Identifier: MPL-2.0
//! Home page: banner and the product card grid.

use crate::catalog::Catalog;
use crate::domain::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::media;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub media_root: &'a Path,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A product card was activated.
    OpenProduct(String),
}

/// Number of card columns for a window `width`.
#[must_use]
pub fn columns_for(width: f32) -> usize {
    if width >= sizing::BREAKPOINT_LG {
        3
    } else if width >= sizing::BREAKPOINT_MD {
        2
    } else {
        1
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let banner = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("home-title")).size(typography::DISPLAY))
                .style(styles::container::accent),
        )
        .push(
            Container::new(Text::new(ctx.i18n.tr("home-subtitle")).size(typography::BODY_LG))
                .style(styles::container::muted),
        );

    let cards: Vec<Element<'a, Message>> = ctx
        .catalog
        .products
        .iter()
        .map(|product| card(ctx.i18n, product, ctx.media_root))
        .collect();

    Column::new()
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::MD])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(banner)
        .push(grid(cards, columns_for(ctx.width), spacing::XL))
        .into()
}

/// Lays `items` out in rows of `columns` equal-width cells.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    gap: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(gap).width(Length::Fill);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(gap).width(Length::Fill);
        for _ in 0..columns {
            row = match items.next() {
                Some(item) => row.push(Container::new(item).width(Length::FillPortion(1))),
                // Keep cells of a short last row as wide as the ones above.
                None => row.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn card<'a>(i18n: &I18n, product: &'a Product, media_root: &Path) -> Element<'a, Message> {
    let open = Message::OpenProduct(product.id.clone());

    let cover = Container::new(
        Image::new(media::image_handle(media_root, &product.cover))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fill)
    .height(sizing::CARD_COVER_HEIGHT)
    .clip(true)
    .style(styles::container::media_well);

    let footer = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(product.price.to_string()).size(typography::TITLE_MD))
                .style(styles::container::accent),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("home-view-details")))
                .on_press(open.clone())
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(Text::new(product.name.as_str()).size(typography::TITLE_MD))
        .push(
            Container::new(Text::new(product.description.as_str()).size(typography::BODY))
                .style(styles::container::muted),
        )
        .push(footer);

    button(Column::new().push(cover).push(body))
        .on_press(open)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}
