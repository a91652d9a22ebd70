use super::*;
use crate::catalog;
use system_ui::{MenuItem, MenuSeparator, MenuSurface};

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let anchor = create_memo(move |_| state.with(|s| s.context_menu));
    let web_apps = create_memo(move |_| state.with(|s| s.web_apps.clone()));

    move || {
        let Some(anchor) = anchor.get() else {
            return ().into_view();
        };
        let web_apps = web_apps.get();
        let has_web_apps = !web_apps.is_empty();

        view! {
            <MenuSurface
                id="desktop-context-menu"
                aria_label="Desktop context menu"
                style=format!("left:{}px;top:{}px;", anchor.x, anchor.y)
            >
                {catalog::context_menu_apps()
                    .map(|app| {
                        let app_id = app.app_id;
                        view! {
                            <MenuItem
                                id=format!("desktop-context-menu-item-{}", app_id.token())
                                on_click=Callback::new(move |_| {
                                    open_app(runtime, app_id, LaunchPayload::None);
                                })
                            >
                                {app.display_name.clone()}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
                {has_web_apps.then(|| view! { <MenuSeparator /> })}
                {web_apps
                    .into_iter()
                    .map(|app| {
                        let label = app.name.clone();
                        let launch = LaunchPayload::Url {
                            title: app.name,
                            url: app.url,
                        };
                        view! {
                            <MenuItem on_click=Callback::new(move |_| {
                                open_app(runtime, AppId::WebView, launch.clone());
                            })>
                                {label}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </MenuSurface>
        }
        .into_view()
    }
}
