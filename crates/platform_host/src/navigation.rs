//! Top-level page navigation contracts: opening external tabs and reloading the shell.

use std::{cell::RefCell, rc::Rc};

/// Host service for navigation outside the desktop shell.
pub trait NavigationService {
    /// Opens `url` in a new browser tab.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses to open the tab.
    fn open_external(&self, url: &str) -> Result<(), String>;

    /// Reloads the whole shell page.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot reload.
    fn reload(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigation service for unsupported targets.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn open_external(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }

    fn reload(&self) -> Result<(), String> {
        Ok(())
    }
}

/// One navigation request observed by [`RecordingNavigationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// An external tab was requested.
    OpenExternal(String),
    /// A reload was requested.
    Reload,
}

#[derive(Debug, Clone, Default)]
/// Navigation service that records requests instead of performing them.
pub struct RecordingNavigationService {
    requests: Rc<RefCell<Vec<NavigationRequest>>>,
}

impl RecordingNavigationService {
    /// Requests observed so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.borrow().clone()
    }
}

impl NavigationService for RecordingNavigationService {
    fn open_external(&self, url: &str) -> Result<(), String> {
        self.requests
            .borrow_mut()
            .push(NavigationRequest::OpenExternal(url.to_string()));
        Ok(())
    }

    fn reload(&self) -> Result<(), String> {
        self.requests.borrow_mut().push(NavigationRequest::Reload);
        Ok(())
    }
}
