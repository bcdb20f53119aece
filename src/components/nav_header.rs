//! Navigation header.
//!
//! Section links with smooth scrolling and a burger toggle for the
//! mobile menu. Navigating closes the menu; open-menu links fade in
//! with a small per-index delay.

use dioxus::document;
use dioxus::prelude::*;

use crate::components::ThemeSwitcher;

/// Page sections, in nav order
const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn NavHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    let mut scroll_to = move |id: &str| {
        let js = format!(
            "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }});"
        );
        let _ = document::eval(&js);
        menu_open.set(false);
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-brand", "Portfolio" }

            nav {
                class: if menu_open() { "nav-links nav-active" } else { "nav-links" },
                ul {
                    for (index, (id, label)) in SECTIONS.iter().enumerate() {
                        {
                            let delay = index * 70;
                            rsx! {
                                li {
                                    key: "{id}",
                                    style: if menu_open() { "animation-delay: {delay}ms" } else { "" },
                                    a {
                                        href: "#{id}",
                                        onclick: move |e: MouseEvent| {
                                            e.prevent_default();
                                            scroll_to(id);
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
                ThemeSwitcher {}
            }

            button {
                class: if menu_open() { "burger toggle" } else { "burger" },
                "aria-label": "Toggle navigation",
                onclick: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
                div { class: "line1" }
                div { class: "line2" }
                div { class: "line3" }
            }
        }
    }
}
