pub mod client;
pub mod models;

pub use client::{fetch_dataset, parse_dataset};

use thiserror::Error;

/// Errors surfaced by the dataset layer. Both variants end up in front of
/// the user: the TUI switches to the error screen, headless mode exits
/// non-zero with the chain printed.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("request for {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response is not a valid temperature dataset")]
    Format(#[from] serde_json::Error),

    #[error("observation for year {year} has month {month}, expected 1-12")]
    InvalidMonth { year: i32, month: u32 },
}
