//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps receive an [`AppMountContext`] per window: the app id, launch payload, a close-hook
//! registry for renderer-owned timers, and an [`AppServices`] bundle that routes requests back
//! to the runtime as [`AppCommand`]s.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use leptos::{Callable, Callback, View};
use platform_host::{EnvironmentProbe, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Application kinds the window manager can host.
///
/// Content selection is an exhaustive match on this enum, so an unknown application cannot be
/// opened at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Single-buffer notes editor.
    Notepad,
    /// Command shell.
    Terminal,
    /// Flat file manager.
    Files,
    /// Embedded tic-tac-toe page.
    TicTacToe,
    /// Embedded encyclopedia browser with search.
    Browser,
    /// Performance panel and logout.
    Settings,
    /// Web-app installer.
    Installer,
    /// Generic embedded page for an installed web app.
    WebView,
    /// Static about box.
    About,
}

impl AppId {
    /// Every app id in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Notepad,
        Self::Terminal,
        Self::Files,
        Self::TicTacToe,
        Self::Browser,
        Self::Settings,
        Self::Installer,
        Self::WebView,
        Self::About,
    ];

    /// Stable token used by manifests and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Notepad => "notepad",
            Self::Terminal => "terminal",
            Self::Files => "files",
            Self::TicTacToe => "tic-tac-toe",
            Self::Browser => "browser",
            Self::Settings => "settings",
            Self::Installer => "installer",
            Self::WebView => "web-view",
            Self::About => "about",
        }
    }

    /// Parses a manifest token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.token() == token)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Optional data supplied when a window is opened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchPayload {
    /// Nothing beyond the app id.
    #[default]
    None,
    /// Initial text, used to open a file's content in the notes editor.
    Text(String),
    /// Page to embed, used by installed web apps.
    Url {
        /// Window title.
        title: String,
        /// Absolute page URL.
        url: String,
    },
}

impl LaunchPayload {
    /// Title override carried by the payload, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Url { title, .. } => Some(title),
            Self::None | Self::Text(_) => None,
        }
    }
}

/// Requests emitted by app services to the desktop runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppCommand {
    /// Open a new window.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Launch payload for the new window.
        payload: LaunchPayload,
    },
    /// The installed web app collection changed; menus and shortcuts must refresh.
    WebAppsChanged,
    /// Clear the session flag and reload the shell.
    Logout,
    /// Open a URL in a new browser tab.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

/// Close-hook registry for one window.
///
/// Renderers register cancellation for timers they own; the runtime calls
/// [`WindowLifecycle::notify_closed`] when the window is removed. Hooks run at most once.
#[derive(Clone, Default)]
pub struct WindowLifecycle {
    hooks: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    closed: Rc<Cell<bool>>,
}

impl WindowLifecycle {
    /// Registers `hook` to run on close. Runs immediately if the window is already closed.
    pub fn on_close(&self, hook: impl FnOnce() + 'static) {
        if self.closed.get() {
            hook();
            return;
        }
        self.hooks.borrow_mut().push(Box::new(hook));
    }

    /// Runs and drops every registered hook. Later calls are no-ops.
    pub fn notify_closed(&self) {
        if self.closed.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }
}

impl fmt::Debug for WindowLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowLifecycle")
            .field("pending_hooks", &self.hooks.borrow().len())
            .field("closed", &self.closed.get())
            .finish()
    }
}

#[derive(Clone, Copy)]
/// Service for opening other applications.
pub struct LauncherService {
    sender: Callback<AppCommand>,
}

impl LauncherService {
    /// Requests a new window for `app_id`.
    pub fn open(&self, app_id: AppId, payload: LaunchPayload) {
        self.sender.call(AppCommand::OpenApp { app_id, payload });
    }

    /// Requests an external browser tab.
    pub fn open_external_url(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }
}

#[derive(Clone, Copy)]
/// Session and shell-level notifications.
pub struct SessionService {
    sender: Callback<AppCommand>,
}

impl SessionService {
    /// Logs out and reloads the shell.
    pub fn logout(&self) {
        self.sender.call(AppCommand::Logout);
    }

    /// Signals that installed web apps were added or removed.
    pub fn web_apps_changed(&self) {
        self.sender.call(AppCommand::WebAppsChanged);
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window opening service.
    pub launcher: LauncherService,
    /// Session service.
    pub session: SessionService,
    /// Origin-scoped key-value store.
    pub store: Rc<dyn KeyValueStore>,
    /// Environment probe.
    pub environment: Rc<dyn EnvironmentProbe>,
    /// Name of the signed-in user.
    pub username: String,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and host services.
    pub fn new(
        sender: Callback<AppCommand>,
        store: Rc<dyn KeyValueStore>,
        environment: Rc<dyn EnvironmentProbe>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            launcher: LauncherService { sender },
            session: SessionService { sender },
            store,
            environment,
            username: username.into(),
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// App kind hosted by the window.
    pub app_id: AppId,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Launch payload supplied at window-open time.
    pub launch: LaunchPayload,
    /// Close-hook registry for this window.
    pub lifecycle: WindowLifecycle,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// DOM id an app puts on its primary text field so the runtime can focus it after opening.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_tokens_round_trip() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_token(app.token()), Some(app));
        }
        assert_eq!(AppId::from_token("calculator"), None);
    }

    #[test]
    fn app_id_serializes_as_token() {
        assert_eq!(
            serde_json::to_string(&AppId::TicTacToe).expect("serialize"),
            "\"tic-tac-toe\""
        );
    }

    #[test]
    fn close_hooks_run_once() {
        let lifecycle = WindowLifecycle::default();
        let count = Rc::new(Cell::new(0));
        let hook_count = Rc::clone(&count);
        lifecycle.on_close(move || hook_count.set(hook_count.get() + 1));

        lifecycle.notify_closed();
        lifecycle.notify_closed();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn hook_registered_after_close_runs_immediately() {
        let lifecycle = WindowLifecycle::default();
        lifecycle.notify_closed();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        lifecycle.on_close(move || flag.set(true));
        assert!(ran.get());
    }

    #[test]
    fn clones_share_hooks() {
        let lifecycle = WindowLifecycle::default();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        lifecycle.clone().on_close(move || flag.set(true));
        lifecycle.notify_closed();
        assert!(ran.get());
    }

    #[test]
    fn launch_payload_title_only_for_urls() {
        let payload = LaunchPayload::Url {
            title: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
        };
        assert_eq!(payload.title(), Some("Docs"));
        assert_eq!(LaunchPayload::Text("x".to_string()).title(), None);
    }
}
