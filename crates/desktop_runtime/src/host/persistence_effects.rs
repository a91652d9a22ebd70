use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{clear_session, load_web_apps, save_session};

use crate::{host::DesktopHostContext, reducer::DesktopAction};

pub(super) fn persist_session(host: DesktopHostContext, username: String) {
    spawn_local(async move {
        if let Err(err) = save_session(host.store().as_ref(), &username).await {
            logging::warn!("persist session failed: {err}");
        }
    });
}

pub(super) fn clear_session_and_reload(host: DesktopHostContext) {
    spawn_local(async move {
        if let Err(err) = clear_session(host.store().as_ref()).await {
            logging::warn!("clear session failed: {err}");
        }
        if let Err(err) = host.navigation().reload() {
            logging::warn!("reload after logout failed: {err}");
        }
    });
}

pub(super) fn load_installed_web_apps(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    spawn_local(async move {
        match load_web_apps(host.store().as_ref()).await {
            Ok(apps) => dispatch.call(DesktopAction::WebAppsLoaded { apps }),
            Err(err) => logging::warn!("load installed web apps failed: {err}"),
        }
    });
}
