//! Concrete adapter factories used by the site entry point to wire the runtime.

use std::rc::Rc;

use platform_host::HostServices;

use crate::{WebEnvironmentProbe, WebKeyValueStore, WebNavigationService};

/// Builds the browser host service bundle.
pub fn build_host_services() -> HostServices {
    HostServices {
        store: Rc::new(WebKeyValueStore),
        environment: Rc::new(WebEnvironmentProbe),
        navigation: Rc::new(WebNavigationService),
    }
}
