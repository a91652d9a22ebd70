use super::*;
use crate::catalog;
use system_ui::{Taskbar as TaskbarSurface, TaskbarButton};

/// Opens the app whose catalog label matches `label`; anything else is logged and ignored.
fn launch_by_label(runtime: DesktopRuntimeContext, label: &str) {
    match catalog::app_for_label(label) {
        Some(app_id) => open_app(runtime, app_id, LaunchPayload::None),
        None => logging::warn!("taskbar label `{label}` names no app"),
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <TaskbarSurface layout_class="desktop-taskbar" aria_label="Taskbar">
            {catalog::taskbar_apps()
                .map(|app| {
                    let label = app.display_name.clone();
                    let click_label = label.clone();
                    view! {
                        <TaskbarButton
                            id=format!("taskbar-button-{}", app.app_id.token())
                            title=label.clone()
                            on_click=Callback::new(move |_| launch_by_label(runtime, &click_label))
                        >
                            {label}
                        </TaskbarButton>
                    }
                })
                .collect_view()}
        </TaskbarSurface>
    }
}
