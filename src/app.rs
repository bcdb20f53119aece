use dioxus::prelude::*;
use portfolio_core::{build_source, theme, Preferences, DEFAULT_THEME};

use crate::components::{NotificationLayer, Notifier, Toast};
use crate::context::{SharedSource, ThemeController};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the data source, the notification center
/// and the theme controller, then renders the single portfolio page.
#[component]
pub fn App() -> Element {
    // Data source selected from command line (mock by default)
    let source: SharedSource = use_hook(|| build_source(crate::get_source_config()));
    use_context_provider(move || source.clone());

    // Theme: read the persisted name once at startup, default blue
    let prefs: Signal<Preferences> = use_signal(|| Preferences::load(&crate::get_data_dir()));
    let current: Signal<&'static theme::Palette> = use_signal(move || {
        let prefs = prefs.peek();
        let name = prefs.theme().unwrap_or(DEFAULT_THEME).to_string();
        theme::lookup(&name).unwrap_or(&theme::BLUE)
    });
    let controller = ThemeController::new(current, prefs);
    use_context_provider(|| controller);

    // Notification center
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let notifier = Notifier::new(toasts);
    use_context_provider(|| notifier);

    let palette = controller.current();

    rsx! {
        style { {GLOBAL_STYLES} }
        // Palette override re-rendered on every theme switch
        style { {palette.css_variables()} }
        Home {}
        NotificationLayer {}
    }
}
