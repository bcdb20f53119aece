//! The single portfolio page.
//!
//! Hero, about (with the resume affordance), project gallery and
//! contact form, stitched together under the navigation header.

use dioxus::prelude::*;

use crate::components::{ContactForm, NavHeader, ProjectGallery, ResumeButton};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader {}

        main {
            section { id: "home", class: "hero",
                h1 { class: "hero-title", "Hi, I'm a Developer" }
                p { class: "hero-subtitle",
                    "I build web applications, tools and the occasional experiment."
                }
                a { href: "#projects", class: "btn btn-primary", "See my work" }
            }

            section { id: "about", class: "section",
                h2 { class: "section-header", "About" }
                p { class: "section-text",
                    "Full-stack developer with a soft spot for clean interfaces "
                    "and small, sharp tools. Currently open to new projects."
                }
                ResumeButton {}
            }

            section { id: "projects", class: "section",
                h2 { class: "section-header", "Projects" }
                ProjectGallery {}
            }

            section { id: "contact", class: "section",
                h2 { class: "section-header", "Get in touch" }
                ContactForm {}
            }
        }

        footer { class: "footer",
            p { "© 2026 - built with Rust" }
        }
    }
}
