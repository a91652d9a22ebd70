use super::*;
use system_ui::{Button, ButtonVariant, Card, Heading, Stack, Text, TextField, TextTone};

/// Login card shown over the blurred desktop until a session exists.
#[component]
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let login_error = Signal::derive(move || runtime.state.with(|s| s.login_error.clone()));

    let submit = move || {
        runtime.dispatch_action(DesktopAction::SubmitLogin {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };
    let submit_on_enter = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    });

    view! {
        <div class="login-screen">
            <Card layout_class="login-card" ui_slot="login">
                <Stack>
                    <Heading>"CloudOS"</Heading>
                    <TextField
                        id="login-username"
                        placeholder="Username"
                        aria_label="Username"
                        autocomplete="username"
                        value=username
                        on_input=Callback::new(move |ev| username.set(event_target_value(&ev)))
                        on_keydown=submit_on_enter
                    />
                    <TextField
                        id="login-password"
                        placeholder="Password"
                        aria_label="Password"
                        autocomplete="current-password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                        on_keydown=submit_on_enter
                    />
                    <Button
                        id="login-button"
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| submit())
                    >
                        "Login"
                    </Button>
                    {move || {
                        login_error
                            .get()
                            .map(|message| view! { <Text tone=TextTone::Danger>{message}</Text> })
                    }}
                </Stack>
            </Card>
        </div>
    }
}
