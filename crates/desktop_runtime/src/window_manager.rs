//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{
    DesktopState, WindowGeometry, WindowId, WindowRecord, WindowRect, WindowSize,
    BASE_STACK_ORDER,
};

/// Hands out the next value of the process-wide stack counter.
pub fn next_stack_order(state: &mut DesktopState) -> u32 {
    let order = BASE_STACK_ORDER.saturating_add(state.stack_raises);
    state.stack_raises = state.stack_raises.saturating_add(1);
    order
}

/// Focuses and raises `window_id` unless it is already the focused top window.
///
/// Returns `false` when the window does not exist.
pub fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let top = state.top_stack_order();
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_focused && Some(window.stack_order) == top {
        return true;
    }

    let stack_order = next_stack_order(state);
    for window in &mut state.windows {
        window.is_focused = window.id == window_id;
        if window.is_focused {
            window.stack_order = stack_order;
        }
    }
    true
}

/// Gives focus to the window with the highest stack order, if any.
pub fn refocus_top_window(state: &mut DesktopState) {
    let top = state
        .windows
        .iter()
        .max_by_key(|w| w.stack_order)
        .map(|w| w.id);
    for window in &mut state.windows {
        window.is_focused = Some(window.id) == top;
    }
}

/// Fills `viewport`, remembering the current geometry on the first maximize.
pub fn maximize(window: &mut WindowRecord, viewport: WindowRect) {
    if !window.maximized {
        window.saved_geometry = Some(window.geometry);
    }
    window.geometry = viewport.into();
    window.maximized = true;
}

/// Puts back the remembered geometry. Without one the window returns to its cascade slot
/// with automatic size.
pub fn restore(window: &mut WindowRecord) {
    if !window.maximized {
        return;
    }
    window.geometry = window
        .saved_geometry
        .take()
        .unwrap_or_else(|| WindowGeometry::cascaded(window.id.0, WindowSize::Auto));
    window.maximized = false;
}
