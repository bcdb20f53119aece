//! Global styling for the portfolio app.

mod styles;

pub use styles::GLOBAL_STYLES;
