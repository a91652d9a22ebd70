//! Host-side runtime helpers for executing reducer effects and querying browser state.
//!
//! Reducer semantics stay pure; everything that touches storage, navigation, or the DOM goes
//! through [`DesktopHostContext`], which wraps the injected [`HostServices`].

mod app_bus;
mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use desktop_app_contract::AppCommand;
use leptos::{Callable, Callback};
use platform_host::{EnvironmentProbe, HostServices, KeyValueStore, NavigationService};

use self::app_bus::{route_app_command, CommandRoute};
use crate::{
    app_runtime::notify_window_closed,
    model::{WindowId, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the services selected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the origin-scoped key-value store.
    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        self.services.store.clone()
    }

    /// Returns the hardware and clock probe.
    pub fn environment(&self) -> Rc<dyn EnvironmentProbe> {
        self.services.environment.clone()
    }

    /// Returns the tab-opening and reload service.
    pub fn navigation(&self) -> Rc<dyn NavigationService> {
        self.services.navigation.clone()
    }

    /// Reads the session flag once the provider is mounted.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
            RuntimeEffect::WindowClosed(window_id) => {
                notify_window_closed(runtime.app_runtime, window_id);
            }
            RuntimeEffect::PersistSession { username } => {
                persistence_effects::persist_session(self.clone(), username);
            }
            RuntimeEffect::ClearSessionAndReload => {
                persistence_effects::clear_session_and_reload(self.clone());
            }
            RuntimeEffect::LoadWebApps => {
                persistence_effects::load_installed_web_apps(self.clone(), runtime.dispatch);
            }
        }
    }

    /// Routes a request sent by a mounted app.
    pub fn handle_app_command(&self, dispatch: Callback<DesktopAction>, command: AppCommand) {
        match route_app_command(command) {
            CommandRoute::Dispatch(action) => dispatch.call(action),
            CommandRoute::OpenExternal(url) => self.open_external_url(&url),
        }
    }

    /// Handles a request to focus a window's primary input.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Opens `url` in a new browser tab.
    pub fn open_external_url(&self, url: &str) {
        host_ui::open_external_url(self, url);
    }

    /// Returns the current desktop viewport rect available to the window manager.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{NavigationRequest, RecordingNavigationService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn external_urls_open_through_navigation() {
        let navigation = RecordingNavigationService::default();
        let host = DesktopHostContext::new(HostServices {
            navigation: Rc::new(navigation.clone()),
            ..HostServices::in_memory()
        });

        host.open_external_url("https://github.com");

        assert_eq!(
            navigation.requests(),
            vec![NavigationRequest::OpenExternal("https://github.com".to_string())]
        );
    }
}
