use std::time::Duration;

use reqwest::Client;

use crate::data::models::DatasetFile;
use crate::data::DataError;
use crate::domain::Dataset;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch and parse the dataset. One GET, no retries: a failure is reported
/// to the caller, not retried behind its back.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, DataError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(|source| network_error(url, source))?;

    let body = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| network_error(url, source))?
        .text()
        .await
        .map_err(|source| network_error(url, source))?;

    parse_dataset(&body)
}

/// Parse a dataset body. Split out of the fetch path so the format can be
/// exercised without a network.
pub fn parse_dataset(body: &str) -> Result<Dataset, DataError> {
    let file: DatasetFile = serde_json::from_str(body)?;
    file.into_dataset()
}

fn network_error(url: &str, source: reqwest::Error) -> DataError {
    DataError::Network {
        url: url.to_string(),
        source,
    }
}
