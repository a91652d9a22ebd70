//! Frame-backed apps: installed web app views, the Wikipedia browser, and the tic-tac-toe game.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext, LaunchPayload};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::{embed_policy, EmbedPolicy};
use system_ui::prelude::*;

/// Page the browser opens on.
pub const BROWSER_HOME_URL: &str = "https://fr.wikipedia.org/wiki/Accueil";
const WIKIPEDIA_ARTICLE_BASE: &str = "https://fr.wikipedia.org/wiki/";
/// Hosted tic-tac-toe game.
pub const TIC_TAC_TOE_URL: &str = "https://maelgruand1.github.io/TicTac-Game/";

/// Article URL for a search query; `None` for a blank query.
pub fn wikipedia_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "{WIKIPEDIA_ARTICLE_BASE}{}",
        urlencoding::encode(query)
    ))
}

fn launch_target(launch: &LaunchPayload) -> Option<(String, String)> {
    match launch {
        LaunchPayload::Url { title, url } => Some((title.clone(), url.clone())),
        LaunchPayload::None | LaunchPayload::Text(_) => None,
    }
}

#[component]
/// Contents of a window opened for an installed web app.
pub fn WebViewApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let Some((title, url)) = launch_target(&context.launch) else {
        logging::warn!("web view opened without a url");
        return view! { <EmptyState>"Nothing to display."</EmptyState> }.into_view();
    };

    match embed_policy(&url) {
        EmbedPolicy::Embed => view! {
            <div class="app-web-view iframe-container">
                <iframe class="web-view-frame" src=url title=title></iframe>
            </div>
        }
        .into_view(),
        EmbedPolicy::OpenExternally => {
            let launcher = context.services.launcher;
            view! {
                <Stack layout_class="app-web-view web-view-fallback">
                    <Heading>{title}</Heading>
                    <Text tone=TextTone::Secondary>
                        "This site cannot be displayed inside a window."
                    </Text>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| launcher.open_external_url(url.clone()))
                    >
                        "Open in new tab"
                    </Button>
                </Stack>
            }
            .into_view()
        }
    }
}

#[component]
/// Wikipedia browser window contents.
pub fn BrowserApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let src = create_rw_signal(BROWSER_HOME_URL.to_string());

    let go = move || {
        if let Some(next) = wikipedia_url(&query.get_untracked()) {
            src.set(next);
        }
    };

    view! {
        <Stack layout_class="app-browser iframe-container" gap=LayoutGap::Sm>
            <Cluster layout_class="browser-search">
                <TextField
                    id=window_primary_input_dom_id(context.window_id)
                    placeholder="Recherche Wikipédia..."
                    aria_label="Search Wikipedia"
                    value=query
                    on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            go();
                        }
                    })
                />
                <Button on_click=Callback::new(move |_| go())>"Go"</Button>
            </Cluster>
            <iframe class="browser-frame" src=src title="Navigateur Wikipédia"></iframe>
        </Stack>
    }
}

#[component]
/// Tic-tac-toe window contents.
pub fn TicTacToeApp() -> impl IntoView {
    view! {
        <div class="app-tictactoe iframe-container">
            <iframe src=TIC_TAC_TOE_URL title="Tic Tac Toe Game" allowfullscreen=""></iframe>
        </div>
    }
}
