//! Theme switcher.
//!
//! One swatch per palette; clicking applies the palette and persists
//! the choice through the theme controller.

use dioxus::prelude::*;
use portfolio_core::theme;

use crate::context::use_theme;

#[component]
pub fn ThemeSwitcher() -> Element {
    let mut controller = use_theme();
    let active = controller.current().name;

    rsx! {
        div { class: "theme-switcher",
            for palette in theme::PALETTES {
                button {
                    key: "{palette.name}",
                    class: if palette.name == active { "theme-swatch active" } else { "theme-swatch" },
                    style: "background-color: {palette.primary}",
                    "aria-label": "Switch to {palette.name} theme",
                    title: "{palette.name}",
                    onclick: move |_| controller.set_theme(palette.name),
                }
            }
        }
    }
}
