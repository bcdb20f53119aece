//! Contact form.
//!
//! Submit intent validates locally first; a draft with any blank field
//! shows a notification and never reaches the data source. A valid
//! draft goes out through the active source with the submit button
//! disabled until the outcome lands. Fields are cleared on success
//! only.

use dioxus::prelude::*;
use portfolio_core::{submit_contact, ContactDraft};

use crate::components::Severity;
use crate::context::{use_data_source, use_notifier};

#[component]
pub fn ContactForm() -> Element {
    let source = use_data_source();
    let mut notifier = use_notifier();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }

        let draft = ContactDraft {
            name: name(),
            email: email(),
            message: message(),
        };
        // Validation failures stay in the Idle state
        if let Err(err) = draft.validate() {
            notifier.notify(err.to_string(), Severity::Error);
            return;
        }

        submitting.set(true);
        let source = source.clone();
        spawn(async move {
            match submit_contact(source.as_ref(), draft).await {
                Ok(ack) => {
                    tracing::info!("Message submitted, ack id {}", ack.id);
                    notifier.notify("Message sent successfully!", Severity::Success);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    tracing::error!("Error sending message: {}", err);
                    notifier.notify("Failed to send message. Please try again.", Severity::Error);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form { id: "contact-form", class: "contact-form", onsubmit: submit,
            div { class: "form-group",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    class: "input",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "input",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    class: "input message-textarea",
                    rows: 5,
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Sending..." } else { "Send Message" }
            }
        }
    }
}
