//! Shell, overlay, data-display, control, and layout primitives plus their variant tokens.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod layout;
mod overlays;
mod shell;

pub use controls::{Button, TextArea, TextField};
pub use data_display::{
    Card, DataTable, EmptyState, Heading, ListSurface, TerminalLine, TerminalPrompt,
    TerminalSurface, TerminalTranscript, Text,
};
pub use layout::{Cluster, Stack};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Taskbar,
    TaskbarButton, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Emphasized action, such as a form submit.
    Primary,
    /// Borderless button for menus and title bars.
    Quiet,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset editor input.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Form or table label.
    Label,
    /// Secondary caption.
    Caption,
    /// Monospace text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Muted text.
    Secondary,
    /// Success status.
    Success,
    /// Error status.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_after_base() {
        assert_eq!(
            merge_layout_class("ui-button", Some("login-submit")),
            "ui-button login-submit"
        );
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
    }

    #[test]
    fn defaults_render_expected_tokens() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(FieldVariant::default().token(), "standard");
        assert_eq!(TextRole::default().token(), "body");
        assert_eq!(TextTone::default().token(), "primary");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(bool_token(true), "true");
    }

    #[test]
    fn app_facing_tokens_are_distinct() {
        assert_eq!(LayoutGap::Sm.token(), "sm");
        assert_eq!(TextRole::Code.token(), "code");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(ButtonVariant::Quiet.token(), "quiet");
    }
}
