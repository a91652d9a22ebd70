use super::*;
use crate::{
    app_runtime::ensure_window_lifecycle,
    apps,
    model::{WindowId, WindowRecord, TASKBAR_HEIGHT_PX},
};
use desktop_app_contract::AppMountContext;
use system_ui::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline style placing a window frame.
fn frame_style(window: &WindowRecord) -> String {
    let geometry = window.geometry;
    format!(
        "left:{}px;top:{}px;width:{};height:{};z-index:{};",
        geometry.position.x,
        geometry.position.y,
        geometry.size.css_width(),
        geometry.size.css_height(),
        window.stack_order
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.state.with(|s| s.window(window_id).cloned()));

    let style = Signal::derive(move || {
        window.with(|w| w.as_ref().map(frame_style).unwrap_or_default())
    });
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let focused = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_focused)));
    let maximized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    });
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            viewport: runtime
                .host
                .get_value()
                .desktop_viewport_rect(TASKBAR_HEIGHT_PX),
        });
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });

    view! {
        <WindowFrame
            layout_class="desktop-window"
            style=style
            aria_label=title
            focused=focused
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_drag on_dblclick=toggle_maximize>
                <WindowTitle>
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        "X"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContents window_id=window_id />
            </WindowBody>
        </WindowFrame>
    }
}

/// Mounts the app once; later state changes only restyle the frame around it.
#[component]
fn WindowContents(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|s| s.window(window_id).cloned())
    else {
        return ().into_view();
    };

    let lifecycle = ensure_window_lifecycle(runtime.app_runtime, window_id);
    apps::app_module(record.app_id).mount(AppMountContext {
        app_id: record.app_id,
        window_id: window_id.0,
        launch: record.launch,
        lifecycle,
        services: runtime.app_services(),
    })
}
