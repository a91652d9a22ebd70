use super::*;
use crate::{host::DesktopHostContext, model::TASKBAR_HEIGHT_PX};
use system_ui::{DesktopIconButton, DesktopIconGrid};

/// Distance from the desktop corner to the first shortcut.
const ICON_GRID_ORIGIN: i32 = 20;
/// Square cell each shortcut occupies.
const ICON_CELL: i32 = 90;

/// Top-left corner of the `index`th shortcut. Cells fill a column top to bottom and a new
/// column starts when the next cell would pass `viewport_height`.
pub(super) fn desktop_icon_slot(index: usize, viewport_height: i32) -> PointerPosition {
    let rows = ((viewport_height - ICON_GRID_ORIGIN) / ICON_CELL).max(1);
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    let column = index / rows;
    let row = index % rows;
    PointerPosition {
        x: ICON_GRID_ORIGIN.saturating_add(column.saturating_mul(ICON_CELL)),
        y: ICON_GRID_ORIGIN + row * ICON_CELL,
    }
}

fn viewport_height(host: &DesktopHostContext) -> i32 {
    host.desktop_viewport_rect(TASKBAR_HEIGHT_PX).h
}

/// One shortcut per installed web app.
#[component]
pub(super) fn DesktopShortcuts() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let web_apps = create_memo(move |_| runtime.state.with(|s| s.web_apps.clone()));

    view! {
        <DesktopIconGrid>
            {move || {
                let height = viewport_height(&runtime.host.get_value());
                web_apps
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, app)| {
                        let slot = desktop_icon_slot(index, height);
                        let icon_hidden = create_rw_signal(false);
                        let label = app.name.clone();
                        let launch = LaunchPayload::Url {
                            title: app.name.clone(),
                            url: app.url.clone(),
                        };
                        view! {
                            <DesktopIconButton
                                title=app.url.clone()
                                style=format!("left:{}px;top:{}px;", slot.x, slot.y)
                                on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    open_app(runtime, AppId::WebView, launch.clone());
                                })
                            >
                                <img
                                    src=app.icon.clone()
                                    alt=""
                                    width="48"
                                    height="48"
                                    style:display=move || if icon_hidden.get() { "none" } else { "" }
                                    on:error=move |_| icon_hidden.set(true)
                                />
                                <span>{label}</span>
                            </DesktopIconButton>
                        }
                    })
                    .collect_view()
            }}
        </DesktopIconGrid>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_shortcut_sits_at_origin() {
        assert_eq!(desktop_icon_slot(0, 730), PointerPosition { x: 20, y: 20 });
    }

    #[test]
    fn shortcuts_fill_column_then_wrap() {
        // (730 - 20) / 90 = 7 rows per column.
        assert_eq!(desktop_icon_slot(6, 730), PointerPosition { x: 20, y: 560 });
        assert_eq!(desktop_icon_slot(7, 730), PointerPosition { x: 110, y: 20 });
        assert_eq!(desktop_icon_slot(15, 730), PointerPosition { x: 200, y: 110 });
    }

    #[test]
    fn tiny_viewport_still_gets_one_row() {
        assert_eq!(desktop_icon_slot(2, 50), PointerPosition { x: 200, y: 20 });
    }
}
