// SPDX-License-Identifier: MPL-2.0
//! Product detail page.
//!
//! Owns the lightbox controller for the product's media. The state is
//! created when the page mounts and dropped when the route changes, so each
//! visit starts with a closed viewer.

use crate::application::lightbox::{self, Controller, Effect};
use crate::application::port::NavigationStack;
use crate::domain::catalog::{Product, StoreInfo};
use crate::domain::media::MediaKind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::home;
use crate::ui::icons;
use crate::ui::lightbox as lightbox_view;
use crate::ui::media;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Gallery tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTab {
    #[default]
    Images,
    Videos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    BackToHome,
    ContactToOrder,
    SelectTab(MediaTab),
    /// The `position`-th thumbnail of `tab` was activated.
    OpenMedia { tab: MediaTab, position: usize },
    Lightbox(lightbox::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    GoHome,
    Lightbox(Effect),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub product: &'a Product,
    pub store: &'a StoreInfo,
    pub media_root: &'a Path,
    pub width: f32,
}

/// Index into the images-then-videos collection for a thumbnail.
#[must_use]
pub fn collection_index(product: &Product, tab: MediaTab, position: usize) -> usize {
    match tab {
        MediaTab::Images => position,
        MediaTab::Videos => product.video_index(position),
    }
}

/// Number of thumbnail columns for a window `width`.
#[must_use]
pub fn grid_columns(width: f32) -> usize {
    if width >= sizing::BREAKPOINT_LG {
        5
    } else if width >= sizing::BREAKPOINT_MD {
        4
    } else if width >= sizing::BREAKPOINT_SM {
        3
    } else {
        2
    }
}

#[derive(Debug, Clone)]
pub struct State {
    product_id: String,
    tab: MediaTab,
    contact_shown: bool,
    lightbox: Controller,
}

impl State {
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            tab: MediaTab::default(),
            contact_shown: false,
            lightbox: Controller::new(product.media_collection()),
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn tab(&self) -> MediaTab {
        self.tab
    }

    #[must_use]
    pub fn lightbox(&self) -> &Controller {
        &self.lightbox
    }

    pub fn update(
        &mut self,
        message: Message,
        product: &Product,
        history: &mut dyn NavigationStack,
    ) -> Event {
        match message {
            Message::BackToHome => Event::GoHome,
            Message::ContactToOrder => {
                self.contact_shown = !self.contact_shown;
                Event::None
            }
            Message::SelectTab(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::OpenMedia { tab, position } => {
                let index = collection_index(product, tab, position);
                self.forward(lightbox::Message::Open(index), history)
            }
            Message::Lightbox(message) => self.forward(message, history),
        }
    }

    fn forward(
        &mut self,
        message: lightbox::Message,
        history: &mut dyn NavigationStack,
    ) -> Event {
        match self.lightbox.handle(message, history) {
            Effect::None => Event::None,
            effect => Event::Lightbox(effect),
        }
    }

    /// Page content, without header and footer.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::chevron_left(typography::TITLE_MD))
                .push(Text::new(ctx.i18n.tr("detail-back-home"))),
        )
        .on_press(Message::BackToHome)
        .padding([spacing::XS, 0.0])
        .style(styles::button::ghost);

        Column::new()
            .spacing(spacing::XL)
            .padding([spacing::XL, spacing::MD])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(back)
            .push(self.hero(&ctx))
            .push(self.tabs(&ctx))
            .push(self.gallery(&ctx))
            .into()
    }

    /// The lightbox overlay while the viewer is open.
    pub fn overlay<'a>(&'a self, i18n: &'a I18n, media_root: &'a Path) -> Option<Element<'a, Message>> {
        let snapshot = self.lightbox.snapshot()?;
        Some(
            lightbox_view::view(lightbox_view::ViewContext {
                i18n,
                snapshot,
                media_root,
            })
            .map(Message::Lightbox),
        )
    }

    fn hero<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let product = ctx.product;
        let i18n = ctx.i18n;

        let cover = Container::new(
            Image::new(media::image_handle(ctx.media_root, &product.cover))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
        )
        .width(Length::Fill)
        .height(sizing::HERO_COVER)
        .clip(true)
        .style(styles::container::media_well);

        let features = product.features.iter().fold(
            Column::new().spacing(spacing::XS),
            |list, feature| {
                list.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(
                            Container::new(Space::new())
                                .width(sizing::BULLET)
                                .height(sizing::BULLET)
                                .style(styles::container::bullet),
                        )
                        .push(
                            Container::new(Text::new(feature.as_str()))
                                .style(styles::container::muted),
                        ),
                )
            },
        );

        let delivery = ctx.store.delivery_charge.to_string();
        let mut details = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(Text::new(product.name.as_str()).size(typography::TITLE_LG))
            .push(
                Container::new(Text::new(product.description.as_str()).size(typography::BODY_LG))
                    .style(styles::container::muted),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Container::new(
                            Text::new(product.price.to_string()).size(typography::TITLE_LG),
                        )
                        .style(styles::container::accent),
                    )
                    .push(
                        Container::new(
                            Text::new(i18n.tr_with_args(
                                "detail-delivery-charge",
                                &[("charge", delivery.as_str())],
                            ))
                            .size(typography::BODY),
                        )
                        .style(styles::container::muted),
                    ),
            )
            .push(Text::new(i18n.tr("detail-features")).size(typography::TITLE_SM))
            .push(features)
            .push(
                button(
                    Container::new(Text::new(i18n.tr("detail-contact-to-order")))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .on_press(Message::ContactToOrder)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::primary),
            );

        if self.contact_shown {
            let phones = ctx.store.phones.join(" / ");
            details = details.push(
                Container::new(Text::new(
                    i18n.tr_with_args("detail-contact-phones", &[("phones", phones.as_str())]),
                ))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .style(styles::container::accent),
            );
        }

        if ctx.width >= sizing::BREAKPOINT_MD {
            Row::new()
                .spacing(spacing::XL)
                .align_y(Vertical::Center)
                .push(Container::new(cover).width(Length::FillPortion(1)))
                .push(Container::new(details).width(Length::FillPortion(1)))
                .into()
        } else {
            Column::new()
                .spacing(spacing::LG)
                .push(cover)
                .push(details)
                .into()
        }
    }

    fn tabs<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let images = ctx.product.images.len().to_string();
        let videos = ctx.product.videos.len().to_string();

        let tab = |kind: MediaTab, label: String| -> Column<'a, Message> {
            let active = self.tab == kind;
            Column::new()
                .push(
                    button(Text::new(label).size(typography::BODY_LG))
                        .on_press(Message::SelectTab(kind))
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::tab(active)),
                )
                .push(
                    Container::new(Space::new())
                        .width(Length::Fill)
                        .height(if active { border::WIDTH_MD } else { 0.0 })
                        .style(styles::container::tab_indicator(active)),
                )
                .width(Length::Shrink)
        };

        let row = Row::new()
            .spacing(spacing::MD)
            .push(tab(
                MediaTab::Images,
                ctx.i18n
                    .tr_with_args("detail-tab-images", &[("count", images.as_str())]),
            ))
            .push(tab(
                MediaTab::Videos,
                ctx.i18n
                    .tr_with_args("detail-tab-videos", &[("count", videos.as_str())]),
            ));

        Column::new()
            .push(row)
            .push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(border::WIDTH_SM)
                    .style(styles::container::tab_indicator(false)),
            )
            .into()
    }

    fn gallery<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let sources = match self.tab {
            MediaTab::Images => &ctx.product.images,
            MediaTab::Videos => &ctx.product.videos,
        };

        let thumbnails = sources
            .iter()
            .enumerate()
            .map(|(position, source)| thumbnail(self.tab, position, source, ctx.media_root))
            .collect();

        home::grid(thumbnails, grid_columns(ctx.width), spacing::MD)
    }
}

fn thumbnail<'a>(
    tab: MediaTab,
    position: usize,
    source: &'a str,
    media_root: &Path,
) -> Element<'a, Message> {
    let (base, glyph): (Element<'a, Message>, Text<'a>) = match MediaKind::from_source(source) {
        MediaKind::Image => (
            Image::new(media::image_handle(media_root, source))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            icons::maximize(sizing::ICON_LG),
        ),
        MediaKind::Video => (
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::video_surface)
                .into(),
            icons::play(sizing::ICON_LG),
        ),
    };

    let veil = Container::new(glyph)
        .center(Length::Fill)
        .style(styles::overlay::thumbnail_veil);

    let tile = Container::new(Stack::new().push(base).push(veil))
        .width(Length::Fill)
        .height(sizing::THUMBNAIL)
        .clip(true)
        .style(styles::container::media_well);

    button(tile)
        .on_press(Message::OpenMedia { tab, position })
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}
