// Export the data-facing modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod heatmap;

pub use domain::{Dataset, Observation};
