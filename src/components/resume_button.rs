//! Resume download button.
//!
//! No actual transfer; clicking only reports that the download started.

use dioxus::prelude::*;

use crate::components::Severity;
use crate::context::use_notifier;

#[component]
pub fn ResumeButton() -> Element {
    let mut notifier = use_notifier();

    rsx! {
        button {
            id: "resume-btn",
            class: "btn btn-secondary",
            onclick: move |_| notifier.notify("Resume download started!", Severity::Success),
            "Download Resume"
        }
    }
}
