//! Project Card Component
//!
//! One display unit per project record: image, title, description, tag
//! labels and the two links. Cards enter with a cascading reveal - the
//! entrance animation of card *i* starts `i * 100` ms after mount.

use dioxus::prelude::*;
use portfolio_core::ProjectRecord;

/// Per-card entrance delay, linear in list position
fn entrance_delay_ms(index: usize) -> usize {
    index * 100
}

/// One rendered project card
#[component]
pub fn ProjectCard(project: ProjectRecord, index: usize) -> Element {
    let delay = entrance_delay_ms(index);

    rsx! {
        div {
            class: "project-card",
            style: "animation-delay: {delay}ms",

            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }

            div { class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }

                div { class: "project-tags",
                    for (i, tag) in project.tags.iter().enumerate() {
                        span { key: "{i}", class: "project-tag", "{tag}" }
                    }
                }

                div { class: "project-links",
                    a { href: "{project.live_url}", class: "project-link", "Live Demo" }
                    a { href: "{project.code_url}", class: "project-link", "View Code" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_delay_is_linear() {
        assert_eq!(entrance_delay_ms(0), 0);
        assert_eq!(entrance_delay_ms(1), 100);
        assert_eq!(entrance_delay_ms(5), 500);
    }
}
