//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    EnvironmentProbe, KeyValueStore, MemoryKeyValueStore, NavigationService,
    NoopNavigationService, StaticEnvironment,
};

/// Runtime-selected host services.
///
/// All environment-specific selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates free of browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Origin-scoped key-value store.
    pub store: Rc<dyn KeyValueStore>,
    /// Hardware, memory, and clock probe.
    pub environment: Rc<dyn EnvironmentProbe>,
    /// External tab and reload service.
    pub navigation: Rc<dyn NavigationService>,
}

impl HostServices {
    /// In-memory services for native builds and tests.
    pub fn in_memory() -> Self {
        Self {
            store: Rc::new(MemoryKeyValueStore::default()),
            environment: Rc::new(StaticEnvironment::default()),
            navigation: Rc::new(NoopNavigationService),
        }
    }
}
