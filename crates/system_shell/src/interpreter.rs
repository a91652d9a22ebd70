//! Command evaluation against a [`ShellHost`].

use desktop_app_contract::{AppId, LaunchPayload};
use leptos::logging::warn;
use platform_host::{
    create_file, find_file, format_cores, format_memory_gb, load_files, load_web_apps,
    EnvironmentProbe, FileError, KeyValueStore, UNKNOWN,
};

use crate::command::{parse_command, Command};

/// Static usage block returned by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
- help                    : Show this help message
- clear, cls              : Clear the terminal output
- echo <text>             : Print text
- date                    : Show the current date and time
- whoami                  : Show the current user
- apps                    : List applications
- ls                      : List files
- create <name> <content> : Create a file
- notepad [file]          : Open Notepad, optionally with a file
- neofetch                : Display system info
- tictactoe               : Open Tic Tac Toe game
- browser                 : Open Wikipedia browser
- files                   : Open Files manager
- settings                : Open Settings
- installer               : Open the web-app installer";

/// Usage line for a malformed `create`.
pub const CREATE_USAGE: &str = "Usage: create <name> <content>";

/// Applications launchable from the shell, with their command keyword.
const SHELL_APPS: [(&str, &str); 7] = [
    ("notepad", "Notepad"),
    ("terminal", "Terminal"),
    ("files", "Files"),
    ("tictactoe", "Tic Tac Toe"),
    ("browser", "Browser"),
    ("settings", "Settings"),
    ("installer", "Installer"),
];

/// Runtime capabilities the interpreter calls back into.
pub trait ShellHost {
    /// Requests a new window. Never fails from the shell's point of view.
    fn open_app(&self, app_id: AppId, payload: LaunchPayload);
    /// Origin-scoped key-value store.
    fn store(&self) -> &dyn KeyValueStore;
    /// Environment probe.
    fn environment(&self) -> &dyn EnvironmentProbe;
    /// Signed-in user name.
    fn username(&self) -> &str;
}

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    /// Text to append to the transcript. May be empty.
    Text(String),
    /// Clear the transcript.
    Clear,
}

impl ShellOutput {
    fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Interprets one command line.
pub async fn interpret<H: ShellHost + ?Sized>(line: &str, host: &H) -> ShellOutput {
    match parse_command(line) {
        Command::Help => ShellOutput::text(HELP_TEXT),
        Command::Clear => ShellOutput::Clear,
        Command::Echo(text) => ShellOutput::Text(text),
        Command::Date => ShellOutput::Text(host.environment().local_time()),
        Command::WhoAmI => ShellOutput::Text(whoami(host.username())),
        Command::Apps => ShellOutput::Text(list_apps(host).await),
        Command::ListFiles => ShellOutput::Text(list_files(host).await),
        Command::Create(None) => ShellOutput::text(CREATE_USAGE),
        Command::Create(Some((name, content))) => {
            ShellOutput::Text(create(host, &name, &content).await)
        }
        Command::Notepad(None) => open(host, AppId::Notepad, "Opening Notepad..."),
        Command::Notepad(Some(name)) => ShellOutput::Text(open_file(host, &name).await),
        Command::Neofetch => ShellOutput::Text(neofetch(host.environment())),
        Command::TicTacToe => open(host, AppId::TicTacToe, "Opening Tic Tac Toe..."),
        Command::Browser => open(host, AppId::Browser, "Opening Browser..."),
        Command::Files => open(host, AppId::Files, "Opening Files manager..."),
        Command::Settings => open(host, AppId::Settings, "Opening Settings..."),
        Command::Installer => open(host, AppId::Installer, "Opening Installer..."),
        Command::Empty => ShellOutput::text(""),
        Command::Unknown(original) => ShellOutput::Text(format!("Command not found: {original}")),
    }
}

fn open<H: ShellHost + ?Sized>(host: &H, app_id: AppId, confirmation: &str) -> ShellOutput {
    host.open_app(app_id, LaunchPayload::None);
    ShellOutput::text(confirmation)
}

fn whoami(username: &str) -> String {
    if username.is_empty() {
        "Hello CloudOS user".to_string()
    } else {
        format!("Hello {username}")
    }
}

async fn list_apps<H: ShellHost + ?Sized>(host: &H) -> String {
    let mut lines = vec!["Applications:".to_string()];
    lines.extend(
        SHELL_APPS
            .iter()
            .map(|(keyword, title)| format!("- {keyword:<10} : {title}")),
    );
    let web_apps = load_web_apps(host.store()).await.unwrap_or_else(|err| {
        warn!("shell could not read installed web apps: {err}");
        Vec::new()
    });
    if !web_apps.is_empty() {
        lines.push("Installed web apps:".to_string());
        lines.extend(
            web_apps
                .iter()
                .map(|app| format!("- {} ({})", app.name, app.url)),
        );
    }
    lines.join("\n")
}

async fn list_files<H: ShellHost + ?Sized>(host: &H) -> String {
    let files = match load_files(host.store()).await {
        Ok(files) => files,
        Err(err) => {
            warn!("shell could not read files: {err}");
            Vec::new()
        }
    };
    if files.is_empty() {
        return "No files in the file system.".to_string();
    }
    let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
    format!("Files:\n{}", names.join("\n"))
}

async fn create<H: ShellHost + ?Sized>(host: &H, name: &str, content: &str) -> String {
    match create_file(host.store(), name, content).await {
        Ok(_) => format!("File \"{name}\" created successfully."),
        Err(FileError::DuplicateName(_)) => format!("Error: file \"{name}\" already exists."),
        Err(err) => {
            warn!("shell create failed: {err}");
            format!("Error: could not create \"{name}\".")
        }
    }
}

async fn open_file<H: ShellHost + ?Sized>(host: &H, name: &str) -> String {
    let files = load_files(host.store()).await.unwrap_or_else(|err| {
        warn!("shell could not read files: {err}");
        Vec::new()
    });
    match find_file(&files, name) {
        Some(file) => {
            host.open_app(AppId::Notepad, LaunchPayload::Text(file.content.clone()));
            format!("Opening \"{name}\" in Notepad...")
        }
        None => format!("File \"{name}\" not found."),
    }
}

/// Formats the `neofetch` system block.
pub fn neofetch(environment: &dyn EnvironmentProbe) -> String {
    let cores = format_cores(environment.hardware_concurrency());
    let memory = format_memory_gb(environment.device_memory_gb());
    let agent = environment
        .user_agent()
        .unwrap_or_else(|| UNKNOWN.to_string());
    format!(
        "CloudOS v1.0\n\
         -------------\n\
         Platform : CloudOS\n\
         Version  : 1\n\
         Lang     : English\n\
         \n\
         Cores    : {cores}\n\
         Memory   : {memory}\n\
         Browser  : {agent}"
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use platform_host::{MemoryKeyValueStore, StaticEnvironment, FILES_KEY};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingShellHost {
        store: MemoryKeyValueStore,
        environment: StaticEnvironment,
        opened: RefCell<Vec<(AppId, LaunchPayload)>>,
    }

    impl ShellHost for RecordingShellHost {
        fn open_app(&self, app_id: AppId, payload: LaunchPayload) {
            self.opened.borrow_mut().push((app_id, payload));
        }

        fn store(&self) -> &dyn KeyValueStore {
            &self.store
        }

        fn environment(&self) -> &dyn EnvironmentProbe {
            &self.environment
        }

        fn username(&self) -> &str {
            "mael"
        }
    }

    fn run(host: &RecordingShellHost, line: &str) -> ShellOutput {
        block_on(interpret(line, host))
    }

    fn text(value: &str) -> ShellOutput {
        ShellOutput::Text(value.to_string())
    }

    #[test]
    fn help_is_case_insensitive() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "HELP"), run(&host, "help"));
        assert_eq!(run(&host, "help"), text(HELP_TEXT));
    }

    #[test]
    fn unknown_command_preserves_casing() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "bogus"), text("Command not found: bogus"));
        assert_eq!(run(&host, "BoGuS 1"), text("Command not found: BoGuS 1"));
        assert!(host.opened.borrow().is_empty());
    }

    #[test]
    fn clear_and_cls_clear() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "clear"), ShellOutput::Clear);
        assert_eq!(run(&host, "cls"), ShellOutput::Clear);
    }

    #[test]
    fn app_commands_open_windows_and_confirm() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "notepad"), text("Opening Notepad..."));
        assert_eq!(run(&host, "TicTacToe"), text("Opening Tic Tac Toe..."));
        assert_eq!(run(&host, "browser"), text("Opening Browser..."));
        assert_eq!(run(&host, "files"), text("Opening Files manager..."));
        assert_eq!(run(&host, "settings"), text("Opening Settings..."));
        assert_eq!(run(&host, "installer"), text("Opening Installer..."));
        let opened: Vec<AppId> = host.opened.borrow().iter().map(|(app, _)| *app).collect();
        assert_eq!(
            opened,
            vec![
                AppId::Notepad,
                AppId::TicTacToe,
                AppId::Browser,
                AppId::Files,
                AppId::Settings,
                AppId::Installer,
            ]
        );
    }

    #[test]
    fn echo_whoami_and_date() {
        let host = RecordingShellHost {
            environment: StaticEnvironment {
                local_time: "18/10/2026 09:00:00".to_string(),
                ..StaticEnvironment::default()
            },
            ..RecordingShellHost::default()
        };
        assert_eq!(run(&host, "echo Hi There"), text("Hi There"));
        assert_eq!(run(&host, "whoami"), text("Hello mael"));
        assert_eq!(run(&host, "date"), text("18/10/2026 09:00:00"));
    }

    #[test]
    fn create_ls_and_open_file() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "ls"), text("No files in the file system."));
        assert_eq!(
            run(&host, "create todo buy milk"),
            text("File \"todo\" created successfully.")
        );
        assert_eq!(
            run(&host, "create todo again"),
            text("Error: file \"todo\" already exists.")
        );
        assert_eq!(run(&host, "create todo"), text(CREATE_USAGE));
        assert_eq!(run(&host, "ls"), text("Files:\ntodo"));

        assert_eq!(
            run(&host, "notepad todo"),
            text("Opening \"todo\" in Notepad...")
        );
        assert_eq!(
            host.opened.borrow().last(),
            Some(&(AppId::Notepad, LaunchPayload::Text("buy milk".to_string())))
        );
        assert_eq!(run(&host, "notepad nope"), text("File \"nope\" not found."));
    }

    #[test]
    fn corrupt_file_store_reads_as_empty() {
        let host = RecordingShellHost::default();
        host.store.seed(FILES_KEY, "garbage");
        assert_eq!(run(&host, "ls"), text("No files in the file system."));
    }

    #[test]
    fn apps_lists_installed_web_apps() {
        let host = RecordingShellHost::default();
        block_on(platform_host::install_web_app(
            &host.store,
            "Docs",
            "https://docs.example.com",
        ))
        .expect("install");
        let ShellOutput::Text(listing) = run(&host, "apps") else {
            panic!("apps should print text");
        };
        assert!(listing.starts_with("Applications:\n- notepad"));
        assert!(listing.ends_with("Installed web apps:\n- Docs (https://docs.example.com)"));
    }

    #[test]
    fn neofetch_falls_back_to_unknown() {
        let host = RecordingShellHost::default();
        let ShellOutput::Text(block) = run(&host, "neofetch") else {
            panic!("neofetch should print text");
        };
        assert!(block.starts_with("CloudOS v1.0\n"));
        assert!(block.contains("Cores    : Unknown"));
        assert!(block.contains("Memory   : Unknown"));
        assert!(block.ends_with("Browser  : Unknown"));
    }

    #[test]
    fn neofetch_reports_environment() {
        let environment = StaticEnvironment {
            hardware_concurrency: Some(4),
            device_memory_gb: Some(8.0),
            user_agent: Some("TestAgent/1.0".to_string()),
            ..StaticEnvironment::default()
        };
        let block = neofetch(&environment);
        assert!(block.contains("Cores    : 4\n"));
        assert!(block.contains("Memory   : 8 GB\n"));
        assert!(block.ends_with("Browser  : TestAgent/1.0"));
    }

    #[test]
    fn blank_line_prints_nothing() {
        let host = RecordingShellHost::default();
        assert_eq!(run(&host, "  "), text(""));
    }
}
