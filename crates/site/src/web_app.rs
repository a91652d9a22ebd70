use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CloudOS" />
        <Meta name="description" content="A desktop operating-system shell simulated in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

/// Desktop wired to the browser's storage, navigation, and environment.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
