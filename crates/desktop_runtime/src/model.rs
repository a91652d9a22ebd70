use desktop_app_contract::{AppId, LaunchPayload};
use platform_host::{InstalledWebApp, SessionState};
use serde::{Deserialize, Serialize};

/// First stack order handed out; every later open or raise gets a strictly higher one.
pub const BASE_STACK_ORDER: u32 = 10;
/// Minimum stack order a window holds while it is being dragged; a longer-lived stack lifts it
/// one above the current top.
pub const DRAG_STACK_ORDER: u32 = 10_000;
/// Cascade origin for newly opened windows.
pub const CASCADE_ORIGIN: i32 = 50;
/// Cascade offset per window ever created.
pub const CASCADE_STEP: i32 = 20;
/// Taskbar height reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 38;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

/// Window size; `Auto` lets the content decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowSize {
    #[default]
    Auto,
    Fixed { width: i32, height: i32 },
}

impl WindowSize {
    /// CSS `width` value.
    pub fn css_width(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Fixed { width, .. } => format!("{width}px"),
        }
    }

    /// CSS `height` value.
    pub fn css_height(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Fixed { height, .. } => format!("{height}px"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowGeometry {
    /// Cascaded geometry for the `nth` window ever created.
    pub fn cascaded(nth: u64, size: WindowSize) -> Self {
        let step = CASCADE_STEP.saturating_mul(i32::try_from(nth).unwrap_or(i32::MAX));
        let offset = CASCADE_ORIGIN.saturating_add(step);
        Self {
            position: WindowPosition {
                x: offset,
                y: offset,
            },
            size,
        }
    }
}

/// Viewport rectangle available to windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl From<WindowRect> for WindowGeometry {
    fn from(rect: WindowRect) -> Self {
        Self {
            position: WindowPosition {
                x: rect.x,
                y: rect.y,
            },
            size: WindowSize::Fixed {
                width: rect.w,
                height: rect.h,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub geometry: WindowGeometry,
    pub stack_order: u32,
    pub is_focused: bool,
    pub maximized: bool,
    /// Geometry to restore; present only while maximized.
    pub saved_geometry: Option<WindowGeometry>,
    pub launch: LaunchPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    /// Windows ever created; drives ids and the open cascade.
    pub windows_created: u64,
    /// Stack orders handed out after the base; never decreases.
    pub stack_raises: u32,
    pub windows: Vec<WindowRecord>,
    /// Context menu anchor while it is open.
    pub context_menu: Option<PointerPosition>,
    pub session: SessionState,
    /// Fixed message shown under the login form after a rejected attempt.
    pub login_error: Option<String>,
    /// Installed web apps backing the context menu and desktop shortcuts.
    pub web_apps: Vec<InstalledWebApp>,
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Highest stack order currently on screen.
    pub fn top_stack_order(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.stack_order).max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWindowRequest {
    pub app_id: AppId,
    pub launch: LaunchPayload,
}

impl OpenWindowRequest {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            launch: LaunchPayload::None,
        }
    }

    pub fn with_launch(mut self, launch: LaunchPayload) -> Self {
        self.launch = launch;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window position at drag start.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cascade_steps_from_origin() {
        let third = WindowGeometry::cascaded(3, WindowSize::Auto);
        assert_eq!(third.position, WindowPosition { x: 110, y: 110 });
        assert_eq!(third.size, WindowSize::Auto);
    }

    #[test]
    fn auto_size_renders_css_auto() {
        assert_eq!(WindowSize::Auto.css_width(), "auto");
        assert_eq!(
            WindowSize::Fixed {
                width: 600,
                height: 500
            }
            .css_height(),
            "500px"
        );
    }
}
