//! Settings app (live performance readout and logout) and the static About window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::PerformanceSnapshot;
use system_ui::prelude::*;

/// Interval between performance samples while the window is open.
pub const PERFORMANCE_POLL_INTERVAL: Duration = Duration::from_millis(1000);

const ABOUT_TITLE: &str = "CloudOS v1.0";
const ABOUT_CREDIT: &str = "Developed by Mael Gruand Company!";

/// Label/value rows in display order.
fn performance_rows(snapshot: &PerformanceSnapshot) -> [(&'static str, String); 4] {
    [
        ("CPU Cores", snapshot.cpu_cores.clone()),
        ("Available memory", snapshot.memory.clone()),
        ("JS Heap used", snapshot.heap_used.clone()),
        ("JS Heap total", snapshot.heap_total.clone()),
    ]
}

#[component]
/// Settings window contents.
pub fn SettingsApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let environment = services.environment.clone();
    let snapshot = create_rw_signal(PerformanceSnapshot::capture(environment.as_ref()));

    match set_interval_with_handle(
        move || {
            let _ = snapshot.try_set(PerformanceSnapshot::capture(environment.as_ref()));
        },
        PERFORMANCE_POLL_INTERVAL,
    ) {
        Ok(handle) => context.lifecycle.on_close(move || handle.clear()),
        Err(err) => logging::warn!("performance poll not started: {err:?}"),
    }

    let session = services.session;

    view! {
        <Stack layout_class="app-settings" gap=LayoutGap::Sm>
            <Cluster layout_class="settings-tabs">
                <Button selected=true>"Performance"</Button>
                <Button
                    layout_class="settings-logout"
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| session.logout())
                >
                    "Logout"
                </Button>
            </Cluster>
            <DataTable layout_class="settings-performance" aria_label="Performance">
                {move || {
                    performance_rows(&snapshot.get())
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <tr>
                                    <th scope="row">
                                        <Text role=TextRole::Label>{label}</Text>
                                    </th>
                                    <td>
                                        <Text role=TextRole::Code>{value}</Text>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </DataTable>
        </Stack>
    }
}

#[component]
/// About window contents.
pub fn AboutApp() -> impl IntoView {
    view! {
        <Stack layout_class="app-about">
            <Heading>{ABOUT_TITLE}</Heading>
            <Text tone=TextTone::Secondary>{ABOUT_CREDIT}</Text>
        </Stack>
    }
}
