// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct wires together the catalog, localization, routing and
//! the history stack, and translates messages into route changes, lightbox
//! input and config persistence.

pub mod config;
pub mod history;
mod message;
pub mod paths;
pub mod route;
mod subscription;
mod view;

pub use history::AppHistory;
pub use message::{Flags, Message};
pub use route::Route;
pub use subscription::InputEvent;

use crate::application::lightbox;
use crate::catalog::{self, Catalog};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{home, navbar, product_detail};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Content mounted below the header.
#[derive(Debug, Clone)]
enum Page {
    Home,
    Product(product_detail::State),
    /// A product route whose id is not in the catalog.
    NotFound(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    /// Explicit settings directory; `None` resolves it through `paths`.
    config_dir: Option<PathBuf>,
    catalog: Catalog,
    media_root: PathBuf,
    history: AppHistory,
    /// Route of the mounted page.
    route: Route,
    page: Page,
    theme_mode: ThemeMode,
    /// Whether the compact navigation menu is open.
    menu_open: bool,
    /// Logical window width, drives the responsive layouts.
    width: f32,
    /// Warning keys shown in the banner until dismissed.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("history_len", &self.history.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the catalog, then mounts the initial route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let catalog_path = flags.catalog.clone().or_else(|| config.catalog.file.clone());
        let (catalog, catalog_warning) = catalog::load_or_builtin(catalog_path.as_deref());

        let media_root = flags
            .media_root
            .clone()
            .unwrap_or_else(|| config.catalog.media_root_or_default());
        let route = flags.route.as_deref().map(Route::parse).unwrap_or_default();

        tracing::info!(
            locale = %i18n.current_locale(),
            media_root = %media_root.display(),
            %route,
            "starting clock catalog"
        );

        let mut app = Self::from_parts(i18n, config, catalog, media_root, route);
        app.warnings
            .extend(config_warning.into_iter().chain(catalog_warning));
        (app, Task::none())
    }

    /// Assembles an application around already loaded parts.
    fn from_parts(
        i18n: I18n,
        config: config::Config,
        catalog: Catalog,
        media_root: PathBuf,
        route: Route,
    ) -> Self {
        let theme_mode = config.general.theme_mode;
        let mut app = Self {
            i18n,
            config,
            config_dir: None,
            catalog,
            media_root,
            history: AppHistory::new(route.clone()),
            route: Route::Home,
            page: Page::Home,
            theme_mode,
            menu_open: false,
            width: config::WINDOW_DEFAULT_WIDTH as f32,
            warnings: Vec::new(),
        };
        app.mount(route);
        app
    }

    fn title(&self) -> String {
        let store = &self.catalog.store.name;
        match &self.page {
            Page::Home => store.clone(),
            Page::Product(state) => match self.catalog.find(state.product_id()) {
                Some(product) => format!("{} - {store}", product.name),
                None => store.clone(),
            },
            Page::NotFound(_) => format!("{} - {store}", self.i18n.tr("not-found-title")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg, &mut self.menu_open) {
                navbar::Event::GoHome => self.navigate(Route::Home),
                navbar::Event::ToggleTheme => self.toggle_theme(),
                navbar::Event::None => {}
            },
            Message::Home(home::Message::OpenProduct(id)) => self.navigate(Route::Product(id)),
            Message::Detail(msg) => self.update_detail(msg),
            Message::Navigate(route) => self.navigate(route),
            Message::Input(InputEvent::Key(key)) => {
                self.update_detail(product_detail::Message::Lightbox(
                    lightbox::Message::KeyPressed(key),
                ));
            }
            Message::Input(InputEvent::Touch(phase)) => {
                self.update_detail(product_detail::Message::Lightbox(lightbox::Message::Touch(
                    phase,
                )));
            }
            Message::Input(InputEvent::Back) => self.back(),
            Message::WindowResized(width) => self.width = width,
            Message::DismissWarning(position) => {
                if position < self.warnings.len() {
                    self.warnings.remove(position);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            media_root: &self.media_root,
            page: &self.page,
            menu_open: self.menu_open,
            is_dark: self.theme_mode.is_dark(),
            width: self.width,
            warnings: &self.warnings,
        })
    }

    /// Forwards `message` to the mounted detail page. Other pages ignore it.
    fn update_detail(&mut self, message: product_detail::Message) {
        let Page::Product(state) = &mut self.page else {
            return;
        };
        let Some(product) = self.catalog.find(state.product_id()) else {
            return;
        };
        match state.update(message, product, &mut self.history) {
            product_detail::Event::GoHome => self.navigate(Route::Home),
            product_detail::Event::Lightbox(effect) => {
                tracing::debug!(?effect, "lightbox effect");
            }
            product_detail::Event::None => {}
        }
    }

    /// Pushes `route` on the history stack and mounts it.
    fn navigate(&mut self, route: Route) {
        if self.history.navigate(route.clone()) {
            self.mount(route);
        }
    }

    /// Platform back-navigation.
    ///
    /// The mounted detail page sees the navigation first so that its
    /// lightbox can consume its marker; then the route left on top of the
    /// stack is mounted if it differs from the current one.
    fn back(&mut self) {
        let Some(popped) = self.history.back() else {
            tracing::debug!("back navigation at the first history entry");
            return;
        };
        self.update_detail(product_detail::Message::Lightbox(
            lightbox::Message::BackNavigated,
        ));
        if popped.route != self.route {
            self.mount(popped.route);
        }
    }

    /// Replaces the mounted page with the one for `route`.
    fn mount(&mut self, route: Route) {
        self.menu_open = false;
        self.page = match &route {
            Route::Home => Page::Home,
            Route::Product(id) => match self.catalog.find(id) {
                Some(product) => Page::Product(product_detail::State::new(product)),
                None => {
                    tracing::warn!(id = %id, "unknown product");
                    Page::NotFound(id.clone())
                }
            },
        };
        tracing::debug!(%route, "route mounted");
        self.route = route;
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.config.general.theme_mode = self.theme_mode;
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%err, "could not save theme preference");
            self.warnings.push(config::SAVE_ERROR_KEY.to_string());
        }
    }
}
