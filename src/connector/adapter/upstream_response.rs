use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::DomainError;

/// Append path segments to a base URL, percent-encoding each one.
///
/// Opaque upstream ids end up in the path, so they must not be spliced in raw.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, DomainError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DomainError::upstream(format!("invalid upstream base URL: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, DomainError> {
    Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| DomainError::upstream(format!("invalid upstream base URL {raw}: {e}")))
}

pub(crate) fn request_failed(api: &str, err: reqwest::Error) -> DomainError {
    warn!("{api}: request failed: {err}");
    DomainError::upstream(format!("{api}: request failed: {err}"))
}

/// Decode a successful upstream response, or turn a non-2xx one into an error
/// carrying the status and whatever message the upstream put in its body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    api: &str,
    response: Response,
) -> Result<T, DomainError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{api}: API returned {status}: {body}");
        return Err(match error_message(&body) {
            Some(message) => DomainError::upstream(format!("{api} returned {status}: {message}")),
            None => DomainError::upstream(format!("{api} returned {status}")),
        });
    }

    response
        .json()
        .await
        .map_err(|e| DomainError::upstream(format!("{api}: failed to parse response: {e}")))
}

/// Pull a human-readable message out of an error body.
///
/// Understands the OpenAI shape `{"error": {"message": ..}}` and the flat
/// `{"message": ..}` used by the cat API.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .or_else(|| value.get("error").filter(|e| e.is_string()))
        .and_then(Value::as_str)
        .map(str::to_string)
}
