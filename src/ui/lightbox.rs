// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay renderer.
//!
//! Paints the controller's [`Snapshot`]: a dimmed backdrop that closes on
//! click, the current item (clicks on it are swallowed), the position
//! counter, a close button and previous/next buttons that are disabled at
//! the ends of the collection. Presses on a disabled button are absorbed so
//! they never reach the backdrop.

use crate::application::lightbox::{MediaElement, Message, Snapshot};
use crate::domain::lightbox::Direction;
use crate::domain::media::MediaItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::media;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: Snapshot<'a>,
    pub media_root: &'a Path,
}

/// Render the overlay. The result covers and blocks everything beneath it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let counter = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new(ctx.i18n.tr(ctx.snapshot.item.kind().i18n_key()))
                    .size(typography::CAPTION),
            )
            .push(Text::new(ctx.snapshot.counter_label()).size(typography::BODY)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::counter);

    let close = button(icons::cross(sizing::ICON_MD))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::overlay);

    let top_bar = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let previous = nav_button(
        icons::chevron_left(sizing::ICON_XL),
        Direction::Previous,
        ctx.snapshot.can_go_previous(),
    );
    let next = nav_button(
        icons::chevron_right(sizing::ICON_XL),
        Direction::Next,
        ctx.snapshot.can_go_next(),
    );

    let content = mouse_area(element_view(
        ctx.snapshot.item,
        ctx.snapshot.element(),
        ctx.i18n,
        ctx.media_root,
    ))
    .on_press(Message::ContentPressed);

    let middle = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::MD])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
        )
        .push(next);

    let controls = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar)
        .push(middle)
        .push(Space::new().height(spacing::XXL));

    opaque(Stack::new().push(backdrop).push(controls))
}

fn nav_button<'a>(icon: Text<'a>, direction: Direction, enabled: bool) -> Element<'a, Message> {
    let control = button(icon)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay);
    if enabled {
        control.on_press(Message::Navigate(direction)).into()
    } else {
        mouse_area(control).on_press(Message::ContentPressed).into()
    }
}

fn element_view<'a>(
    item: &'a MediaItem,
    element: MediaElement<'a>,
    i18n: &I18n,
    media_root: &Path,
) -> Element<'a, Message> {
    match element {
        MediaElement::Image { source } => Image::new(media::image_handle(media_root, source))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        MediaElement::Video {
            autoplay, controls, ..
        } => video_surface(item.file_name(), autoplay, controls, i18n),
    }
}

/// Playback surface for a video item.
///
/// Frames are not decoded; the surface names the file and states the
/// playback flags the element carries.
fn video_surface<'a>(
    name: &'a str,
    autoplay: bool,
    controls: bool,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut flags = Vec::new();
    if autoplay {
        flags.push(i18n.tr("lightbox-video-autoplay"));
    }
    if controls {
        flags.push(i18n.tr("lightbox-video-controls"));
    }

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(icons::play(sizing::ICON_XL))
        .push(Text::new(name).size(typography::TITLE_SM))
        .push(Text::new(flags.join(" · ")).size(typography::CAPTION));

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .style(styles::overlay::video_surface)
        .into()
}
