//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod login;
mod menus;
mod taskbar;
mod window;

use desktop_app_contract::{AppId, LaunchPayload};
use leptos::*;
use system_ui::{DesktopBackdrop, DesktopWindowLayer};

use self::{
    desktop_icons::DesktopShortcuts, login::LoginScreen, menus::DesktopContextMenu,
    taskbar::Taskbar, window::DesktopWindow,
};
use crate::{
    model::{OpenWindowRequest, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Root shell: login gate, desktop surface, window layer, context menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let logged_in = Signal::derive(move || state.with(|s| s.session.is_logged_in()));

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_drag(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:click=move |_| {
                if state.with_untracked(|s| s.context_menu.is_some()) {
                    runtime.dispatch_action(DesktopAction::CloseContextMenu);
                }
            }
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                if logged_in.get_untracked() {
                    runtime.dispatch_action(DesktopAction::OpenContextMenu {
                        position: pointer_from_mouse_event(&ev),
                    });
                }
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopBackdrop blurred=Signal::derive(move || !logged_in.get())>
                <DesktopShortcuts />
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|s| s.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                        key=|window_id| window_id.0
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
                <DesktopContextMenu />
                <Taskbar />
            </DesktopBackdrop>

            <Show when=move || !logged_in.get() fallback=|| ()>
                <LoginScreen />
            </Show>
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_drag(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
}

fn open_app(runtime: DesktopRuntimeContext, app_id: AppId, launch: LaunchPayload) {
    runtime.dispatch_action(DesktopAction::OpenWindow(
        OpenWindowRequest::new(app_id).with_launch(launch),
    ));
}
