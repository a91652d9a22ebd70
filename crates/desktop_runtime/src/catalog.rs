//! App catalog generated at build time from each app crate's `app.manifest.toml`.

use std::sync::OnceLock;

use desktop_app_contract::AppId;
use leptos::logging::error;
use serde::Deserialize;

use crate::model::WindowSize;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowDefaults {
    pub width: i32,
    pub height: i32,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Label used by the taskbar and the context menu.
    pub display_name: String,
    pub window_title: String,
    pub menu_order: u32,
    pub show_in_taskbar: bool,
    pub show_in_context_menu: bool,
    #[serde(default)]
    pub window_defaults: Option<WindowDefaults>,
}

impl AppDescriptor {
    pub fn default_size(&self) -> WindowSize {
        match self.window_defaults {
            Some(WindowDefaults { width, height }) => WindowSize::Fixed { width, height },
            None => WindowSize::Auto,
        }
    }
}

/// Parses catalog JSON, keeping manifest order.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON or unknown app tokens.
pub fn parse_catalog(json: &str) -> Result<Vec<AppDescriptor>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The compiled-in catalog, sorted by `menu_order`.
pub fn app_catalog() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        parse_catalog(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            error!("app catalog is invalid: {err}");
            Vec::new()
        })
    })
}

pub fn descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_catalog().iter().find(|entry| entry.app_id == app_id)
}

/// Default window title; the app token when the catalog has no entry.
pub fn window_title(app_id: AppId) -> String {
    descriptor(app_id)
        .map(|entry| entry.window_title.clone())
        .unwrap_or_else(|| app_id.token().to_string())
}

pub fn default_window_size(app_id: AppId) -> WindowSize {
    descriptor(app_id)
        .map(AppDescriptor::default_size)
        .unwrap_or_default()
}

pub fn taskbar_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_catalog().iter().filter(|entry| entry.show_in_taskbar)
}

pub fn context_menu_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_catalog().iter().filter(|entry| entry.show_in_context_menu)
}

/// Resolves a button label to the app it names. Matching is exact.
pub fn app_for_label(label: &str) -> Option<AppId> {
    app_catalog()
        .iter()
        .find(|entry| entry.display_name == label.trim())
        .map(|entry| entry.app_id)
}
