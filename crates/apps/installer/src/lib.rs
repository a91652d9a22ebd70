//! Web-app installer: registers sites under `installedWebApps` and lists them for launch or
//! removal. Every change is announced to the runtime so the context menu and desktop shortcuts
//! pick it up.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppId, AppMountContext, LaunchPayload};
use leptos::*;
use platform_host::{
    install_web_app, load_web_apps, uninstall_web_app, InstallError, InstalledWebApp,
};
use system_ui::prelude::*;

const EMPTY_LISTING: &str = "No web apps installed.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Installed(String),
    Rejected(String),
}

impl Notice {
    fn from_install(name: &str, outcome: &Result<Vec<InstalledWebApp>, InstallError>) -> Self {
        match outcome {
            Ok(_) => Self::Installed(format!("\"{}\" installed.", name.trim())),
            Err(err) => Self::Rejected(err.user_message()),
        }
    }
}

fn launch_payload(app: &InstalledWebApp) -> LaunchPayload {
    LaunchPayload::Url {
        title: app.name.clone(),
        url: app.url.clone(),
    }
}

#[component]
/// Installer window contents.
pub fn InstallerApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let apps = create_rw_signal(Vec::<InstalledWebApp>::new());
    let name = create_rw_signal(String::new());
    let url = create_rw_signal(String::new());
    let notice = create_rw_signal(None::<Notice>);

    let store = services.store.clone();
    spawn_local(async move {
        match load_web_apps(store.as_ref()).await {
            Ok(loaded) => {
                let _ = apps.try_set(loaded);
            }
            Err(err) => logging::warn!("web apps load failed: {err}"),
        }
    });

    let session = services.session;

    let store = services.store.clone();
    let install = Callback::new(move |_| {
        let store = store.clone();
        let app_name = name.get_untracked();
        let app_url = url.get_untracked();
        spawn_local(async move {
            let outcome = install_web_app(store.as_ref(), &app_name, &app_url).await;
            let _ = notice.try_set(Some(Notice::from_install(&app_name, &outcome)));
            match outcome {
                Ok(updated) => {
                    let _ = apps.try_set(updated);
                    let _ = name.try_set(String::new());
                    let _ = url.try_set(String::new());
                    session.web_apps_changed();
                }
                Err(err) => logging::log!("web app not installed: {err}"),
            }
        });
    });

    let store = services.store.clone();
    let uninstall = move |index: usize| {
        let store = store.clone();
        spawn_local(async move {
            match uninstall_web_app(store.as_ref(), index).await {
                Ok(updated) => {
                    let _ = apps.try_set(updated);
                    let _ = notice.try_set(None);
                    session.web_apps_changed();
                }
                Err(err) => {
                    logging::warn!("web app uninstall failed: {err}");
                    let _ = notice.try_set(Some(Notice::Rejected(err.user_message())));
                }
            }
        });
    };

    let launcher = services.launcher;

    view! {
        <Stack layout_class="app-installer" gap=LayoutGap::Sm>
            <Heading>"Install a web app"</Heading>
            <Cluster>
                <TextField
                    id=window_primary_input_dom_id(context.window_id)
                    placeholder="App name"
                    aria_label="App name"
                    value=name
                    on_input=Callback::new(move |ev| name.set(event_target_value(&ev)))
                />
                <TextField
                    placeholder="https://example.com"
                    aria_label="App URL"
                    input_type="url"
                    value=url
                    on_input=Callback::new(move |ev| url.set(event_target_value(&ev)))
                />
                <Button variant=ButtonVariant::Primary on_click=install>
                    "Install"
                </Button>
            </Cluster>
            {move || match notice.get() {
                Some(Notice::Installed(message)) => {
                    view! { <Text tone=TextTone::Success>{message}</Text> }.into_view()
                }
                Some(Notice::Rejected(message)) => {
                    view! { <Text tone=TextTone::Danger>{message}</Text> }.into_view()
                }
                None => ().into_view(),
            }}
            <ListSurface aria_label="Installed web apps">
                {move || {
                    let listing = apps.get();
                    if listing.is_empty() {
                        return view! { <li><EmptyState>{EMPTY_LISTING}</EmptyState></li> }
                            .into_view();
                    }
                    listing
                        .into_iter()
                        .enumerate()
                        .map(|(index, app)| {
                            let launch = launch_payload(&app);
                            let uninstall = uninstall.clone();
                            view! {
                                <li class="installer-entry">
                                    <img class="installer-icon" src=app.icon alt="" width="16" height="16"/>
                                    <Text>{app.name}</Text>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {app.url}
                                    </Text>
                                    <Button on_click=Callback::new(move |_| {
                                        launcher.open(AppId::WebView, launch.clone());
                                    })>
                                        "Launch"
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Danger
                                        on_click=Callback::new(move |_| uninstall(index))
                                    >
                                        "Uninstall"
                                    </Button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ListSurface>
        </Stack>
    }
}
