//! Portfolio Core Library
//!
//! Data model and data sources for the portfolio desktop app.
//!
//! ## Overview
//!
//! One render pipeline is fed by two interchangeable data-source
//! variants: an in-memory mock that simulates network latency and a
//! real HTTP client against the portfolio backend. The UI only ever
//! talks to the [`DataSource`] trait; which variant is active is a
//! configuration choice.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{build_source, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = build_source(SourceConfig::Mock);
//!
//!     for project in source.fetch_projects().await? {
//!         println!("{}: {}", project.id, project.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod contact;
pub mod error;
pub mod prefs;
pub mod source;
pub mod theme;
pub mod types;

// Re-exports
pub use contact::{submit_contact, ContactDraft, VALIDATION_MESSAGE};
pub use error::{PortfolioError, PortfolioResult};
pub use prefs::{Preferences, THEME_KEY};
pub use source::{build_source, ApiClient, DataSource, MockStore, SourceConfig};
pub use theme::{Palette, DEFAULT_THEME};
pub use types::{MessageRecord, NewMessage, ProjectRecord, SubmitAck};
