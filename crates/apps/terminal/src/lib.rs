//! Terminal app: a transcript view over the `system_shell` interpreter.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use desktop_app_contract::{
    window_primary_input_dom_id, AppId, AppMountContext, AppServices, LaunchPayload,
};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::{EnvironmentProbe, KeyValueStore};
use system_shell::{interpret, ShellHost, ShellOutput};
use system_ui::prelude::*;

const WELCOME_LINE: &str = "Welcome to CloudTerminal. Type 'help'.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum TranscriptLine {
    /// Echoed command, rendered as `$ <cmd>`.
    Command(String),
    Output(String),
}

fn welcome_transcript() -> Vec<TranscriptLine> {
    vec![TranscriptLine::Output(WELCOME_LINE.to_string())]
}

fn apply_output(transcript: &mut Vec<TranscriptLine>, output: ShellOutput) {
    match output {
        ShellOutput::Clear => transcript.clear(),
        ShellOutput::Text(text) if text.is_empty() => {}
        ShellOutput::Text(text) => transcript.push(TranscriptLine::Output(text)),
    }
}

/// [`ShellHost`] backed by the services handed to this window.
struct TerminalShellHost {
    services: AppServices,
}

impl ShellHost for TerminalShellHost {
    fn open_app(&self, app_id: AppId, payload: LaunchPayload) {
        self.services.launcher.open(app_id, payload);
    }

    fn store(&self) -> &dyn KeyValueStore {
        self.services.store.as_ref()
    }

    fn environment(&self) -> &dyn EnvironmentProbe {
        self.services.environment.as_ref()
    }

    fn username(&self) -> &str {
        &self.services.username
    }
}

#[component]
/// Terminal window contents.
pub fn TerminalApp(
    /// Runtime mount context for this window.
    context: AppMountContext,
) -> impl IntoView {
    let host = Rc::new(TerminalShellHost {
        services: context.services.clone(),
    });
    let transcript = create_rw_signal(welcome_transcript());
    let input = create_rw_signal(String::new());
    let surface_ref = create_node_ref::<html::Div>();

    create_effect(move |_| {
        transcript.track();
        request_animation_frame(move || {
            if let Some(surface) = surface_ref.get_untracked() {
                surface.set_scroll_top(surface.scroll_height());
            }
        });
    });

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let line = input.get_untracked().trim().to_string();
        input.set(String::new());
        transcript.update(|t| t.push(TranscriptLine::Command(line.clone())));

        let host = Rc::clone(&host);
        spawn_local(async move {
            let output = interpret(&line, host.as_ref()).await;
            let _ = transcript.try_update(|t| apply_output(t, output));
        });
    });

    view! {
        <TerminalSurface layout_class="app-terminal" node_ref=surface_ref>
            <TerminalTranscript>
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|line| match line {
                            TranscriptLine::Command(cmd) => view! {
                                <TerminalLine tone=TextTone::Secondary>{format!("$ {cmd}")}</TerminalLine>
                            }
                            .into_view(),
                            TranscriptLine::Output(text) => {
                                view! { <TerminalLine>{text}</TerminalLine> }.into_view()
                            }
                        })
                        .collect_view()
                }}
            </TerminalTranscript>
            <TerminalPrompt>
                <TextField
                    id=window_primary_input_dom_id(context.window_id)
                    layout_class="terminal-input"
                    aria_label="Command"
                    value=input
                    on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                    on_keydown=on_keydown
                />
            </TerminalPrompt>
        </TerminalSurface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn transcript_starts_with_welcome_line() {
        assert_eq!(
            welcome_transcript(),
            vec![TranscriptLine::Output(
                "Welcome to CloudTerminal. Type 'help'.".to_string()
            )]
        );
    }

    #[test]
    fn clear_empties_transcript_including_echo() {
        let mut transcript = welcome_transcript();
        transcript.push(TranscriptLine::Command("clear".to_string()));
        apply_output(&mut transcript, ShellOutput::Clear);
        assert!(transcript.is_empty());
    }

    #[test]
    fn text_output_follows_echo() {
        let mut transcript = vec![TranscriptLine::Command("echo hi".to_string())];
        apply_output(&mut transcript, ShellOutput::Text("hi".to_string()));
        apply_output(&mut transcript, ShellOutput::Text(String::new()));
        assert_eq!(
            transcript,
            vec![
                TranscriptLine::Command("echo hi".to_string()),
                TranscriptLine::Output("hi".to_string()),
            ]
        );
    }
}
