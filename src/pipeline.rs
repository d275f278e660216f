use std::io::Write;

use crate::error::ActivityError;
use crate::github::client::GithubClient;
use crate::github::models::decode_events;
use crate::render::render;

/// Fetch `username`'s events and write one summary line per event to `out`.
///
/// Nothing is written unless both the fetch and the decode succeed. Returns
/// the number of lines written.
pub async fn print_activity<W: Write>(
    client: &dyn GithubClient,
    username: &str,
    out: &mut W,
) -> Result<usize, ActivityError> {
    let body = client.fetch_user_events(username).await?;
    let events = decode_events(&body)?;
    tracing::debug!(count = events.len(), "decoded events");

    let mut written = 0;
    for line in render(&events) {
        writeln!(out, "{line}")?;
        written += 1;
    }
    out.flush()?;

    tracing::debug!(
        events = events.len(),
        lines = written,
        "rendered {} of {} events",
        written,
        events.len()
    );
    Ok(written)
}
