//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{check_credentials, InstalledWebApp, SessionState};
use thiserror::Error;

use crate::catalog;
use crate::model::{
    DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition, WindowGeometry,
    WindowId, WindowPosition, WindowRecord, WindowRect, DRAG_STACK_ORDER,
};
use crate::window_manager::{
    focus_window_internal, maximize, next_stack_order, refocus_top_window, restore,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Maximize or restore depending on the current state.
    ToggleMaximize {
        /// Window whose title bar was double-clicked.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Begin dragging a window.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndDrag,
    /// Show the application menu at the pointer.
    OpenContextMenu {
        /// Menu anchor.
        position: PointerPosition,
    },
    /// Hide the application menu.
    CloseContextMenu,
    /// Check a login attempt.
    SubmitLogin {
        /// Entered username.
        username: String,
        /// Entered password.
        password: String,
    },
    /// Apply the session flag read at boot.
    HydrateSession {
        /// Persisted session.
        session: SessionState,
    },
    /// End the session.
    Logout,
    /// Replace the installed web apps shown by menus and shortcuts.
    WebAppsLoaded {
        /// Collection as read from storage.
        apps: Vec<InstalledWebApp>,
    },
    /// Re-read installed web apps from storage.
    RefreshWebApps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly opened window's primary input.
    FocusWindowInput(WindowId),
    /// Fire the close hooks registered for a removed window.
    WindowClosed(WindowId),
    /// Write the session flag for a successful login.
    PersistSession {
        /// Signed-in user.
        username: String,
    },
    /// Remove the session flag and reload the page.
    ClearSessionAndReload,
    /// Read installed web apps and feed them back as [`DesktopAction::WebAppsLoaded`].
    LoadWebApps,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present. State may be partially written on error; callers reduce into a copy.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            state.windows_created = state.windows_created.saturating_add(1);
            let window_id = WindowId(state.windows_created);
            let size = catalog::default_window_size(req.app_id);
            let title = req
                .launch
                .title()
                .map_or_else(|| catalog::window_title(req.app_id), str::to_string);
            for window in &mut state.windows {
                window.is_focused = false;
            }
            let stack_order = next_stack_order(state);
            state.windows.push(WindowRecord {
                id: window_id,
                app_id: req.app_id,
                title,
                geometry: WindowGeometry::cascaded(window_id.0, size),
                stack_order,
                is_focused: true,
                maximized: false,
                saved_geometry: None,
                launch: req.launch,
            });
            state.context_menu = None;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            refocus_top_window(state);
            effects.push(RuntimeEffect::WindowClosed(window_id));
        }
        DesktopAction::FocusWindow { window_id } => {
            if !focus_window_internal(state, window_id) {
                return Err(ReducerError::WindowNotFound);
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            let window = find_window_mut(state, window_id)?;
            if window.maximized {
                restore(window);
            } else {
                maximize(window, viewport);
            }
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            let drag_order = state
                .top_stack_order()
                .map_or(DRAG_STACK_ORDER, |top| DRAG_STACK_ORDER.max(top.saturating_add(1)));
            for window in &mut state.windows {
                window.is_focused = false;
            }
            let window = find_window_mut(state, window_id)?;
            window.is_focused = true;
            window.stack_order = drag_order;
            let position = window.geometry.position;
            interaction.dragging = Some(DragSession {
                window_id,
                offset: PointerPosition {
                    x: pointer.x - position.x,
                    y: pointer.y - position.y,
                },
            });
        }
        DesktopAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let offset = session.offset;
                find_window_mut(state, session.window_id)?.geometry.position = WindowPosition {
                    x: pointer.x - offset.x,
                    y: pointer.y - offset.y,
                };
            }
        }
        DesktopAction::EndDrag => {
            if let Some(session) = interaction.dragging.take() {
                let stack_order = next_stack_order(state);
                find_window_mut(state, session.window_id)?.stack_order = stack_order;
            }
        }
        DesktopAction::OpenContextMenu { position } => {
            state.context_menu = Some(position);
        }
        DesktopAction::CloseContextMenu => {
            state.context_menu = None;
        }
        DesktopAction::SubmitLogin { username, password } => {
            match check_credentials(&username, &password) {
                Ok(()) => {
                    state.session = SessionState::signed_in(username.clone());
                    state.login_error = None;
                    effects.push(RuntimeEffect::PersistSession { username });
                    effects.push(RuntimeEffect::LoadWebApps);
                }
                Err(err) => {
                    state.login_error = Some(err.user_message().to_string());
                }
            }
        }
        DesktopAction::HydrateSession { session } => {
            let logged_in = session.is_logged_in();
            state.session = session;
            if logged_in {
                effects.push(RuntimeEffect::LoadWebApps);
            }
        }
        DesktopAction::Logout => {
            state.session = SessionState::default();
            state.context_menu = None;
            effects.push(RuntimeEffect::ClearSessionAndReload);
        }
        DesktopAction::WebAppsLoaded { apps } => {
            state.web_apps = apps;
        }
        DesktopAction::RefreshWebApps => {
            effects.push(RuntimeEffect::LoadWebApps);
        }
    }

    Ok(effects)
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppId, LaunchPayload};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowSize, BASE_STACK_ORDER};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 682,
    };

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_id: AppId,
    ) -> WindowId {
        let _ = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)),
        )
        .expect("open window");
        state.windows.last().expect("window").id
    }

    fn record(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window")
    }

    #[test]
    fn opening_same_app_twice_creates_two_windows_with_rising_stack_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Notepad);
        let second = open(&mut state, &mut interaction, AppId::Notepad);

        assert_eq!(state.windows.len(), 2);
        assert_ne!(first, second);
        assert_eq!(record(&state, first).stack_order, BASE_STACK_ORDER);
        assert!(record(&state, second).stack_order > record(&state, first).stack_order);
        assert_eq!(state.focused_window_id(), Some(second));
    }

    #[test]
    fn open_window_cascades_and_requests_input_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(AppId::Terminal)),
        )
        .expect("open");
        let id = state.windows[0].id;

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
        assert_eq!(
            state.windows[0].geometry.position,
            WindowPosition { x: 70, y: 70 }
        );
        assert_eq!(state.windows[0].title, "Terminal");
    }

    #[test]
    fn open_window_uses_catalog_size_and_payload_title() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Settings);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(AppId::WebView).with_launch(
                LaunchPayload::Url {
                    title: "Docs".to_string(),
                    url: "https://docs.example.com".to_string(),
                },
            )),
        )
        .expect("open web view");

        assert_eq!(
            state.windows[0].geometry.size,
            WindowSize::Fixed {
                width: 400,
                height: 280
            }
        );
        assert_eq!(state.windows[1].title, "Docs");
    }

    #[test]
    fn opening_closes_the_context_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: PointerPosition { x: 5, y: 6 },
            },
        )
        .expect("menu");
        assert!(state.context_menu.is_some());

        open(&mut state, &mut interaction, AppId::About);
        assert_eq!(state.context_menu, None);
    }

    #[test]
    fn focusing_raises_unless_already_on_top() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Files);
        let second = open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: second },
        )
        .expect("focus top");
        assert_eq!(state, before);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: first },
        )
        .expect("focus lower");
        assert_eq!(state.focused_window_id(), Some(first));
        assert!(record(&state, first).stack_order > record(&state, second).stack_order);
    }

    #[test]
    fn maximize_then_restore_returns_exact_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Browser);
        let original = record(&state, win).geometry;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("maximize");
        assert!(record(&state, win).maximized);
        assert_eq!(record(&state, win).geometry, WindowGeometry::from(VIEWPORT));
        assert_eq!(record(&state, win).saved_geometry, Some(original));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("restore");
        assert!(!record(&state, win).maximized);
        assert_eq!(record(&state, win).geometry, original);
        assert_eq!(record(&state, win).saved_geometry, None);
    }

    #[test]
    fn restore_without_saved_geometry_falls_back_to_cascade() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Settings);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("maximize");
        state.windows[0].saved_geometry = None;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("restore");
        assert_eq!(
            record(&state, win).geometry,
            WindowGeometry::cascaded(win.0, WindowSize::Auto)
        );
    }

    #[test]
    fn drag_lifts_window_then_assigns_next_stack_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Notepad);
        let second = open(&mut state, &mut interaction, AppId::Files);
        let second_order = record(&state, second).stack_order;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: first,
                pointer: PointerPosition { x: 80, y: 75 },
            },
        )
        .expect("begin");
        assert_eq!(record(&state, first).stack_order, DRAG_STACK_ORDER);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: -40, y: -45 },
            },
        )
        .expect("update");
        assert_eq!(
            record(&state, first).geometry.position,
            WindowPosition { x: -50, y: -50 }
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag).expect("end");
        assert_eq!(interaction.dragging, None);
        assert_eq!(record(&state, first).stack_order, second_order + 1);
    }

    #[test]
    fn maximized_window_follows_drag_and_restores_saved_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notepad);
        let original = record(&state, win).geometry;
        let toggle = DesktopAction::ToggleMaximize {
            window_id: win,
            viewport: VIEWPORT,
        };
        reduce_desktop(&mut state, &mut interaction, toggle.clone()).expect("maximize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 210, y: 110 },
            },
        )
        .expect("update");
        assert_eq!(
            record(&state, win).geometry.position,
            WindowPosition { x: 200, y: 100 }
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag).expect("end");
        reduce_desktop(&mut state, &mut interaction, toggle).expect("restore");
        assert!(!record(&state, win).maximized);
        assert_eq!(record(&state, win).geometry, original);
    }

    #[test]
    fn dragged_window_stays_above_long_lived_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let dragged = open(&mut state, &mut interaction, AppId::Notepad);
        state.stack_raises = DRAG_STACK_ORDER;
        let other = open(&mut state, &mut interaction, AppId::Files);
        let other_order = record(&state, other).stack_order;
        assert!(other_order > DRAG_STACK_ORDER);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: dragged,
                pointer: PointerPosition { x: 60, y: 60 },
            },
        )
        .expect("begin");
        assert_eq!(record(&state, dragged).stack_order, other_order + 1);
    }

    #[test]
    fn refresh_requests_a_web_app_reload() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::RefreshWebApps)
            .expect("refresh");
        assert_eq!(effects, vec![RuntimeEffect::LoadWebApps]);
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn loaded_web_apps_replace_the_menu_source() {
        let docs = InstalledWebApp {
            name: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
            icon: "https://www.google.com/s2/favicons?domain=docs.example.com&sz=64".to_string(),
        };
        let mut state = DesktopState {
            web_apps: vec![InstalledWebApp {
                name: "Old".to_string(),
                url: "https://old.example.com".to_string(),
                icon: String::new(),
            }],
            ..DesktopState::default()
        };
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::WebAppsLoaded {
                apps: vec![docs.clone()],
            },
        )
        .expect("loaded");
        assert!(effects.is_empty());
        assert_eq!(state.web_apps, vec![docs]);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::WebAppsLoaded { apps: Vec::new() },
        )
        .expect("uninstalled all");
        assert!(state.web_apps.is_empty());
    }

    #[test]
    fn close_removes_window_refocuses_and_emits_close_notification() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Notepad);
        let second = open(&mut state, &mut interaction, AppId::Settings);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: second },
        )
        .expect("close");

        assert_eq!(effects, vec![RuntimeEffect::WindowClosed(second)]);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.focused_window_id(), Some(first));
    }

    #[test]
    fn unknown_window_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId(42),
            },
        )
        .expect_err("missing window");
        assert_eq!(err, ReducerError::WindowNotFound);
    }

    #[test]
    fn account_login_sets_session_and_persists() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SubmitLogin {
                username: "mael".to_string(),
                password: "1234".to_string(),
            },
        )
        .expect("login");

        assert_eq!(state.session, SessionState::signed_in("mael"));
        assert_eq!(state.login_error, None);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistSession {
                    username: "mael".to_string()
                },
                RuntimeEffect::LoadWebApps,
            ]
        );
    }

    #[test]
    fn rejected_login_leaves_session_unset() {
        for (username, password) in [("mael", "0000"), ("admin", "1234"), ("", "")] {
            let mut state = DesktopState::default();
            let mut interaction = InteractionState::default();

            let effects = reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::SubmitLogin {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .expect("login attempt");

            assert!(effects.is_empty());
            assert!(!state.session.is_logged_in());
            assert!(state.login_error.is_some());
        }
    }

    #[test]
    fn logout_clears_session_and_requests_reload() {
        let mut state = DesktopState {
            session: SessionState::signed_in("mael"),
            ..DesktopState::default()
        };
        let mut interaction = InteractionState::default();

        let effects =
            reduce_desktop(&mut state, &mut interaction, DesktopAction::Logout).expect("logout");
        assert_eq!(effects, vec![RuntimeEffect::ClearSessionAndReload]);
        assert!(!state.session.is_logged_in());
    }

    #[test]
    fn hydrated_session_loads_web_apps_only_when_logged_in() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateSession {
                session: SessionState::default(),
            },
        )
        .expect("hydrate");
        assert!(effects.is_empty());

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateSession {
                session: SessionState::signed_in("mael"),
            },
        )
        .expect("hydrate");
        assert_eq!(effects, vec![RuntimeEffect::LoadWebApps]);
    }
}
