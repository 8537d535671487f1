//! # Use Cases Accessor
//!
//! [`AppRuntime`] holds the wired [`AppDeps`]; `runtime.usecases()` hands
//! out use case instances with their ports already injected.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking its ports
//! 2. Add a method to [`UseCases`] that calls `new()` with deps

use std::sync::Arc;
use std::time::Duration;

use fc_app::usecases::*;
use fc_app::{AppDeps, PageCommandHandler, TabDispatcher};
use fc_core::ports::{ActiveTabPort, PageDomPort};

use crate::session::PageSession;

/// Application runtime with dependencies.
pub struct AppRuntime {
    deps: AppDeps,
    notify: Arc<Notify>,
    dispatch_timeout: Duration,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, dispatch_timeout: Duration) -> Self {
        let notify = Arc::new(Notify::new(
            deps.settings.clone(),
            deps.notifier.clone(),
            deps.badge.clone(),
        ));
        Self {
            deps,
            notify,
            dispatch_timeout,
        }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    /// Opens a page context around `document`.
    pub fn open_page<D>(&self, document: D) -> PageSession<D>
    where
        D: PageDomPort + 'static,
    {
        PageSession::spawn(
            document,
            PageCommandHandler::new(&self.deps, self.notify.clone()),
        )
    }

    /// Popup-side router talking to `tab`.
    pub fn dispatcher(&self, tab: Arc<dyn ActiveTabPort>) -> TabDispatcher {
        TabDispatcher::new(
            tab,
            self.deps.settings.clone(),
            self.notify.clone(),
            self.dispatch_timeout,
        )
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn initialize_defaults(&self) -> InitializeDefaults {
        InitializeDefaults::new(self.runtime.deps.transfer.clone())
    }

    pub fn list_fields(&self) -> ListFields {
        ListFields::new(self.runtime.deps.catalog.clone())
    }

    pub fn add_field(&self) -> AddField {
        AddField::new(self.runtime.deps.catalog.clone())
    }

    pub fn edit_field(&self) -> EditField {
        EditField::new(self.runtime.deps.catalog.clone())
    }

    pub fn delete_field(&self) -> DeleteField {
        DeleteField::new(self.runtime.deps.catalog.clone())
    }

    pub fn clipboard_status(&self) -> GetClipboardStatus {
        GetClipboardStatus::new(
            self.runtime.deps.clipboard.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn clear_clipboard(&self) -> ClearClipboard {
        ClearClipboard::new(self.runtime.deps.clipboard.clone())
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new(self.runtime.deps.transfer.clone())
    }

    pub fn import_config(&self) -> ImportConfig {
        ImportConfig::new(self.runtime.deps.transfer.clone())
    }

    pub fn notify(&self) -> Arc<Notify> {
        self.runtime.notify.clone()
    }
}
