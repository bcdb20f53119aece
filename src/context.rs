//! Shared context for the portfolio app.
//!
//! Provides the active data source, the notification center and the
//! theme controller to all components via use_context.

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{theme, DataSource, Preferences};

use crate::components::Notifier;

/// Shared data-source handle.
///
/// Built once at startup from the command-line configuration; every
/// component that fetches or submits goes through this trait object.
pub type SharedSource = Arc<dyn DataSource>;

/// Hook to access the active data source from context
pub fn use_data_source() -> SharedSource {
    use_context::<SharedSource>()
}

/// Hook to access the notification center from context
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Theme state: the active palette plus the write-through preference store.
///
/// `set_theme` with an unknown name is a no-op; a failed preference
/// write keeps the in-memory switch and logs.
#[derive(Clone, Copy)]
pub struct ThemeController {
    current: Signal<&'static theme::Palette>,
    prefs: Signal<Preferences>,
}

impl ThemeController {
    pub fn new(current: Signal<&'static theme::Palette>, prefs: Signal<Preferences>) -> Self {
        Self { current, prefs }
    }

    /// The active palette
    pub fn current(&self) -> &'static theme::Palette {
        (self.current)()
    }

    /// Switch to the named palette and persist the choice
    pub fn set_theme(&mut self, name: &str) {
        let Some(palette) = theme::lookup(name) else {
            return;
        };
        self.current.set(palette);
        if let Err(e) = self.prefs.write().set_theme(name) {
            tracing::warn!("Failed to persist theme '{}': {}", name, e);
        }
    }
}

/// Hook to access the theme controller from context
pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}
