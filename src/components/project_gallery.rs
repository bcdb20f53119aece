//! Project gallery.
//!
//! The load/render/retry pipeline: a loading placeholder goes up
//! synchronously, the active data source is asked for the project
//! collection, and the outcome lands in one of four states. A failure
//! renders an error panel whose Retry button re-enters the same
//! pipeline from the loading state, any number of times.
//!
//! Every pass carries a generation number; a completion whose pass has
//! been superseded by a newer retry is discarded, so a stale response
//! can never overwrite fresher content.

use dioxus::prelude::*;
use portfolio_core::{PortfolioResult, ProjectRecord};

use crate::components::ProjectCard;
use crate::context::use_data_source;

#[derive(Debug, Clone, PartialEq)]
enum GalleryState {
    Loading,
    Loaded(Vec<ProjectRecord>),
    Empty,
    Failed(String),
}

/// Fold a completed fetch pass into the next gallery state.
///
/// `None` when `pass` is no longer the latest one: a newer pass owns
/// the container and the stale completion is discarded.
fn completed_state(
    latest_pass: u64,
    pass: u64,
    result: PortfolioResult<Vec<ProjectRecord>>,
) -> Option<GalleryState> {
    if latest_pass != pass {
        return None;
    }
    Some(match result {
        Ok(projects) if projects.is_empty() => GalleryState::Empty,
        Ok(projects) => GalleryState::Loaded(projects),
        Err(e) => GalleryState::Failed(e.to_string()),
    })
}

/// Project gallery bound to the active data source
#[component]
pub fn ProjectGallery() -> Element {
    let source = use_data_source();
    let mut state = use_signal(|| GalleryState::Loading);
    let mut generation = use_signal(|| 0u64);

    let load = use_callback(move |_: ()| {
        // Placeholder first, before any async work starts
        state.set(GalleryState::Loading);
        let pass = generation() + 1;
        generation.set(pass);

        let source = source.clone();
        spawn(async move {
            let result = source.fetch_projects().await;

            if let Err(e) = &result {
                tracing::error!("Error loading projects: {}", e);
            }
            if let Some(next) = completed_state(*generation.peek(), pass, result) {
                state.set(next);
            }
        });
    });

    use_effect(move || {
        load.call(());
    });

    rsx! {
        div { id: "projects-container", class: "projects-container",
            match state() {
                GalleryState::Loading => rsx! {
                    div { class: "project-loader", "Loading projects..." }
                },
                GalleryState::Empty => rsx! {
                    div { class: "project-loader", "No projects found." }
                },
                GalleryState::Loaded(projects) => rsx! {
                    for (index, project) in projects.iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            index,
                        }
                    }
                },
                GalleryState::Failed(_) => rsx! {
                    ErrorPanel { on_retry: move |_| load.call(()) }
                },
            }
        }
    }
}

/// Fixed failure message with a retry control.
///
/// Re-entrant: each click independently re-runs the full pipeline.
#[component]
fn ErrorPanel(on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "project-error",
            p { "Failed to load projects. Please try again later." }
            button {
                class: "btn",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{source::seed_projects, PortfolioError};

    #[test]
    fn test_stale_completion_is_discarded() {
        // Pass 2 finished after a retry already started pass 3
        assert_eq!(completed_state(3, 2, Ok(seed_projects())), None);
        assert_eq!(
            completed_state(3, 2, Err(PortfolioError::CollectionNotFound("projects".into()))),
            None
        );
    }

    #[test]
    fn test_current_pass_preserves_record_order() {
        let next = completed_state(1, 1, Ok(seed_projects())).unwrap();
        match next {
            GalleryState::Loaded(projects) => {
                let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec![1, 2, 3]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_current_pass_empty_sequence() {
        assert_eq!(completed_state(1, 1, Ok(Vec::new())), Some(GalleryState::Empty));
    }

    #[test]
    fn test_current_pass_failure_carries_message() {
        let next = completed_state(1, 1, Err(PortfolioError::CollectionNotFound("projects".into())));
        match next {
            Some(GalleryState::Failed(msg)) => {
                assert!(msg.contains("Collection not found"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
