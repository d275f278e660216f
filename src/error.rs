use std::io;

use reqwest::StatusCode;

/// Errors from fetching the events feed.
///
/// `Transport` covers everything below HTTP (DNS, connect, TLS) as well as a
/// body that fails to arrive after the status line was read.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("error fetching data from GitHub")]
    Transport(#[from] reqwest::Error),

    #[error("failed to fetch activity, status: {status}")]
    Status { status: StatusCode },
}

/// The response body was not a JSON array of events.
#[derive(thiserror::Error, Debug)]
#[error("error parsing JSON")]
pub struct DecodeError(#[from] pub serde_json::Error);

#[derive(thiserror::Error, Debug)]
pub enum ActivityError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("error writing output")]
    Output(#[from] io::Error),
}
