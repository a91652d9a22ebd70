//! File manager app over the `files` collection.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppId, AppMountContext, LaunchPayload};
use leptos::*;
use platform_host::{create_file, delete_file, load_files, FileError, FileRecord};
use system_ui::prelude::*;

const EMPTY_LISTING: &str = "No files created.";

/// Payload that opens `file` in a new notepad window.
fn open_in_notepad(file: &FileRecord) -> LaunchPayload {
    LaunchPayload::Text(file.content.clone())
}

#[component]
/// Files window contents.
pub fn FilesApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let files = create_rw_signal(Vec::<FileRecord>::new());
    let name = create_rw_signal(String::new());
    let content = create_rw_signal(String::new());

    let store = services.store.clone();
    spawn_local(async move {
        match load_files(store.as_ref()).await {
            Ok(loaded) => {
                let _ = files.try_set(loaded);
            }
            Err(err) => logging::warn!("files load failed: {err}"),
        }
    });

    let store = services.store.clone();
    let create = Callback::new(move |_| {
        let store = store.clone();
        let file_name = name.get_untracked();
        let file_content = content.get_untracked();
        spawn_local(async move {
            match create_file(store.as_ref(), &file_name, &file_content).await {
                Ok(updated) => {
                    files.set(updated);
                    name.set(String::new());
                    content.set(String::new());
                }
                Err(FileError::DuplicateName(existing)) => {
                    logging::log!("file \"{existing}\" already exists");
                }
                Err(err) => logging::warn!("file create failed: {err}"),
            }
        });
    });

    let store = services.store.clone();
    let delete = move |index: usize| {
        let store = store.clone();
        spawn_local(async move {
            match delete_file(store.as_ref(), index).await {
                Ok(updated) => files.set(updated),
                Err(err) => logging::warn!("file delete failed: {err}"),
            }
        });
    };

    let launcher = services.launcher;

    view! {
        <Stack layout_class="app-files" gap=LayoutGap::Sm>
            <Cluster>
                <TextField
                    id=window_primary_input_dom_id(context.window_id)
                    placeholder="File Name"
                    aria_label="File name"
                    value=name
                    on_input=Callback::new(move |ev| name.set(event_target_value(&ev)))
                />
                <TextField
                    placeholder="Content"
                    aria_label="File content"
                    value=content
                    on_input=Callback::new(move |ev| content.set(event_target_value(&ev)))
                />
                <Button variant=ButtonVariant::Primary on_click=create>
                    "Create"
                </Button>
            </Cluster>
            <ListSurface aria_label="Files">
                {move || {
                    let listing = files.get();
                    if listing.is_empty() {
                        return view! { <li><EmptyState>{EMPTY_LISTING}</EmptyState></li> }
                            .into_view();
                    }
                    listing
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| {
                            let launch = open_in_notepad(&file);
                            let delete = delete.clone();
                            view! {
                                <li class="files-entry">
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        title="Open in Notepad"
                                        on_click=Callback::new(move |_| {
                                            launcher.open(AppId::Notepad, launch.clone());
                                        })
                                    >
                                        {file.name}
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Danger
                                        on_click=Callback::new(move |_| delete(index))
                                    >
                                        "Delete"
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn opening_a_file_passes_its_content() {
        let file = FileRecord::new("todo.txt", "milk\neggs");
        assert_eq!(
            open_in_notepad(&file),
            LaunchPayload::Text("milk\neggs".to_string())
        );
    }
}
