use desktop_app_contract::AppCommand;

use crate::{model::OpenWindowRequest, reducer::DesktopAction};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum CommandRoute {
    Dispatch(DesktopAction),
    OpenExternal(String),
}

/// Maps an app request onto a reducer action or a host call.
pub(super) fn route_app_command(command: AppCommand) -> CommandRoute {
    match command {
        AppCommand::OpenApp { app_id, payload } => CommandRoute::Dispatch(
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_id).with_launch(payload)),
        ),
        AppCommand::WebAppsChanged => CommandRoute::Dispatch(DesktopAction::RefreshWebApps),
        AppCommand::Logout => CommandRoute::Dispatch(DesktopAction::Logout),
        AppCommand::OpenExternalUrl { url } => CommandRoute::OpenExternal(url),
    }
}
