//! Shared UI primitive library for the desktop shell and the built-in apps.
//!
//! Every primitive renders the stable `data-ui-*` DOM contract consumed by the shell
//! stylesheet. Apps compose these instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, Card, Cluster, DataTable, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopWindowLayer, EmptyState, FieldVariant, Heading, LayoutGap,
    ListSurface, MenuItem, MenuSeparator, MenuSurface, Stack, Taskbar, TaskbarButton,
    TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, Text, TextArea, TextField,
    TextRole, TextTone, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for app crates.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, Card, Cluster, DataTable, EmptyState, FieldVariant, Heading,
        LayoutGap, ListSurface, Stack, TerminalLine, TerminalPrompt, TerminalSurface,
        TerminalTranscript, Text, TextArea, TextField, TextRole, TextTone,
    };
}
