// SPDX-License-Identifier: MPL-2.0
//! Page footer with store, contact and delivery details.

use crate::domain::catalog::StoreInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a StoreInfo,
    pub width: f32,
}

/// Render the footer. It emits no messages.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let about = section(
        Text::new(ctx.store.name.as_str()).size(typography::TITLE_SM),
        vec![muted(ctx.store.tagline.clone())],
    );

    let phones = ctx
        .store
        .phones
        .iter()
        .map(|phone| {
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::phone(typography::BODY))
                .push(muted(phone.clone()))
                .into()
        })
        .collect();
    let contact = section(
        Text::new(ctx.i18n.tr("footer-contact")).size(typography::TITLE_SM),
        phones,
    );

    let charge = ctx.store.delivery_charge.to_string();
    let delivery = section(
        Text::new(ctx.i18n.tr("footer-delivery")).size(typography::TITLE_SM),
        vec![muted(
            ctx.i18n
                .tr_with_args("footer-delivery-note", &[("charge", charge.as_str())]),
        )],
    );

    let sections: Element<'a, Message> = if ctx.width < sizing::BREAKPOINT_MD {
        Column::new()
            .spacing(spacing::LG)
            .push(about)
            .push(contact)
            .push(delivery)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(about)
            .push(contact)
            .push(delivery)
            .into()
    };

    let copyright = Container::new(muted(ctx.i18n.tr_with_args(
        "footer-copyright",
        &[("store", ctx.store.name.as_str())],
    )))
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XL, spacing::MD])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(sections)
        .push(copyright);

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::bar)
        .into()
}

fn section<'a, Message: 'a>(
    title: Text<'a>,
    lines: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(title)
        .extend(lines)
        .into()
}

fn muted<'a, Message: 'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY))
        .style(styles::container::muted)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn footer_renders_in_both_layouts() {
        let i18n = I18n::default();
        let store = catalog::builtin().store;
        for width in [400.0, 1200.0] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                store: &store,
                width,
            });
        }
    }

    #[test]
    fn delivery_note_includes_formatted_charge() {
        let i18n = I18n::new(Some("en-US".into()), None, &Default::default());
        let note = i18n.tr_with_args("footer-delivery-note", &[("charge", "₹1,000")]);
        assert_eq!(note, "Flat ₹1,000 delivery charge");
    }
}
