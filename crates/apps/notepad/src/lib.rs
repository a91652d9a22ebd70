//! Notepad app: a single text buffer saved under the `notepad` storage key.
//!
//! Opening the app with [`LaunchPayload::Text`] (for example from the file manager) starts the
//! editor with that text instead of the saved note. Saving always writes the shared buffer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext, LaunchPayload};
use leptos::*;
use platform_host::{load_note, save_note};
use system_ui::prelude::*;

/// Text supplied by the launcher, if any.
fn launch_text(launch: &LaunchPayload) -> Option<String> {
    match launch {
        LaunchPayload::Text(text) => Some(text.clone()),
        LaunchPayload::None | LaunchPayload::Url { .. } => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveStatus {
    Saved,
    Failed,
}

#[component]
/// Notepad window contents.
pub fn NotepadApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let store = context.services.store.clone();
    let text = create_rw_signal(String::new());
    let status = create_rw_signal(None::<SaveStatus>);

    match launch_text(&context.launch) {
        Some(initial) => text.set(initial),
        None => {
            let store = store.clone();
            spawn_local(async move {
                match load_note(store.as_ref()).await {
                    Ok(saved) => {
                        let _ = text.try_set(saved);
                    }
                    Err(err) => logging::warn!("notepad load failed: {err}"),
                }
            });
        }
    }

    let save = Callback::new(move |_| {
        let store = store.clone();
        let current = text.get_untracked();
        spawn_local(async move {
            let outcome = match save_note(store.as_ref(), &current).await {
                Ok(()) => SaveStatus::Saved,
                Err(err) => {
                    logging::warn!("notepad save failed: {err}");
                    SaveStatus::Failed
                }
            };
            let _ = status.try_set(Some(outcome));
        });
    });

    view! {
        <Stack layout_class="app-notepad" gap=LayoutGap::Sm>
            <TextArea
                id=window_primary_input_dom_id(context.window_id)
                layout_class="notepad-page"
                aria_label="Note"
                placeholder="Write something..."
                value=text
                on_input=Callback::new(move |ev| {
                    text.set(event_target_value(&ev));
                    status.set(None);
                })
            />
            <Cluster>
                <Button variant=ButtonVariant::Primary on_click=save>
                    "Save"
                </Button>
                {move || match status.get() {
                    Some(SaveStatus::Saved) => {
                        view! { <Text tone=TextTone::Success>"Saved."</Text> }.into_view()
                    }
                    Some(SaveStatus::Failed) => {
                        view! { <Text tone=TextTone::Danger>"Could not save the note."</Text> }
                            .into_view()
                    }
                    None => ().into_view(),
                }}
            </Cluster>
        </Stack>
    }
}
