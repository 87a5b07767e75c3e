// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::InputEvent;
use crate::ui::{home, navbar, product_detail};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Detail(product_detail::Message),
    /// A route was requested directly (e.g. the not-found page's home link).
    Navigate(super::Route),
    /// Platform-level input translated from native events.
    Input(InputEvent),
    /// The window was opened or resized to this logical width.
    WindowResized(f32),
    /// The warning at this position in the banner was dismissed.
    DismissWarning(usize),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CLOCK_CATALOG_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog file, taking precedence over `[catalog] file`.
    pub catalog: Option<PathBuf>,
    /// Optional media root, taking precedence over `[catalog] media_root`.
    pub media_root: Option<PathBuf>,
    /// Initial route path such as `/product/black`.
    pub route: Option<String>,
}
