//! Per-window close-hook registry owned by the desktop shell.

use std::collections::HashMap;

use desktop_app_contract::WindowLifecycle;
use leptos::{logging, StoredValue};

use crate::model::WindowId;

#[derive(Default)]
/// Lifecycle handles for every mounted window.
pub struct AppRuntimeState {
    lifecycles: HashMap<WindowId, WindowLifecycle>,
}

impl AppRuntimeState {
    fn ensure_lifecycle(&mut self, window_id: WindowId) -> WindowLifecycle {
        self.lifecycles.entry(window_id).or_default().clone()
    }

    fn take_lifecycle(&mut self, window_id: WindowId) -> Option<WindowLifecycle> {
        self.lifecycles.remove(&window_id)
    }
}

/// Returns the lifecycle handle for `window_id`, creating it on first mount.
pub fn ensure_window_lifecycle(
    runtime_state: StoredValue<AppRuntimeState>,
    window_id: WindowId,
) -> WindowLifecycle {
    runtime_state
        .try_update_value(|state| state.ensure_lifecycle(window_id))
        .unwrap_or_default()
}

/// Fires and forgets the close hooks of `window_id`.
pub fn notify_window_closed(runtime_state: StoredValue<AppRuntimeState>, window_id: WindowId) {
    // Hooks run outside the stored-value borrow; they may touch runtime state.
    let lifecycle = runtime_state
        .try_update_value(|state| state.take_lifecycle(window_id))
        .flatten();
    match lifecycle {
        Some(lifecycle) => lifecycle.notify_closed(),
        None => logging::log!("window {} closed before mounting", window_id.0),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn ensure_returns_shared_handle() {
        let mut state = AppRuntimeState::default();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        state
            .ensure_lifecycle(WindowId(1))
            .on_close(move || flag.set(true));

        state
            .take_lifecycle(WindowId(1))
            .expect("tracked")
            .notify_closed();
        assert!(ran.get());
    }

    #[test]
    fn taking_twice_yields_nothing() {
        let mut state = AppRuntimeState::default();
        state.ensure_lifecycle(WindowId(3));
        assert!(state.take_lifecycle(WindowId(3)).is_some());
        assert!(state.take_lifecycle(WindowId(3)).is_none());
    }
}
