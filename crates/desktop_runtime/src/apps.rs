//! App module registry: one mount function per [`AppId`].

use desktop_app_contract::{AppId, AppModule, AppMountContext};
use desktop_app_files::FilesApp;
use desktop_app_installer::InstallerApp;
use desktop_app_notepad::NotepadApp;
use desktop_app_settings::{AboutApp, SettingsApp};
use desktop_app_terminal::TerminalApp;
use desktop_app_web_view::{BrowserApp, TicTacToeApp, WebViewApp};
use leptos::*;

/// Module that renders `app_id`. The match is exhaustive, so every app has content.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Notepad => AppModule::new(mount_notepad),
        AppId::Terminal => AppModule::new(mount_terminal),
        AppId::Files => AppModule::new(mount_files),
        AppId::TicTacToe => AppModule::new(mount_tic_tac_toe),
        AppId::Browser => AppModule::new(mount_browser),
        AppId::Settings => AppModule::new(mount_settings),
        AppId::Installer => AppModule::new(mount_installer),
        AppId::WebView => AppModule::new(mount_web_view),
        AppId::About => AppModule::new(mount_about),
    }
}

fn mount_notepad(context: AppMountContext) -> View {
    view! { <NotepadApp context=context /> }.into_view()
}

fn mount_terminal(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

fn mount_files(context: AppMountContext) -> View {
    view! { <FilesApp context=context /> }.into_view()
}

fn mount_tic_tac_toe(_context: AppMountContext) -> View {
    view! { <TicTacToeApp /> }.into_view()
}

fn mount_browser(context: AppMountContext) -> View {
    view! { <BrowserApp context=context /> }.into_view()
}

fn mount_settings(context: AppMountContext) -> View {
    view! { <SettingsApp context=context /> }.into_view()
}

fn mount_installer(context: AppMountContext) -> View {
    view! { <InstallerApp context=context /> }.into_view()
}

fn mount_web_view(context: AppMountContext) -> View {
    view! { <WebViewApp context=context /> }.into_view()
}

fn mount_about(_context: AppMountContext) -> View {
    view! { <AboutApp /> }.into_view()
}
