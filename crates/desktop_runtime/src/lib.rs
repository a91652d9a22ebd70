//! Desktop window manager, app registry, and shell UI for the CloudOS browser desktop.
//!
//! State changes flow through [`reduce_desktop`]; side effects come back out as
//! [`RuntimeEffect`] values that [`DesktopProvider`] executes against the injected host.

mod app_runtime;
pub mod apps;
pub mod catalog;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
