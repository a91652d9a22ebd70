use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::load_session;

use crate::{host::DesktopHostContext, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            match load_session(host.store().as_ref()).await {
                Ok(session) => dispatch.call(DesktopAction::HydrateSession { session }),
                Err(err) => logging::warn!("session hydrate failed: {err}"),
            }
        });
    });
}
