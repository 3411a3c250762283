//! Request plumbing shared by the HTTP provider adapters.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ProviderError;

/// Longest slice of an error body kept in [`ProviderError::Api`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Return the API key, or a `MissingApiKey` error naming `env_var`.
pub(crate) fn require_key<'a>(
    provider: &'static str,
    env_var: &'static str,
    api_key: Option<&'a str>,
) -> Result<&'a str, ProviderError> {
    api_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(ProviderError::MissingApiKey { provider, env_var })
}

/// Send `body` as JSON and decode a successful response as `R`.
pub(crate) async fn send_json<B, R>(
    provider: &'static str,
    request: RequestBuilder,
    body: &B,
) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|source| ProviderError::Transport {
            provider,
            source: source.without_url(),
        })?;

    let status = response.status();
    debug!("{} responded with HTTP {}", provider, status.as_u16());

    let text = response
        .text()
        .await
        .map_err(|source| ProviderError::Transport {
            provider,
            source: source.without_url(),
        })?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse {
        provider,
        detail: e.to_string(),
    })
}

/// Reject blank model output.
pub(crate) fn non_empty_text(provider: &'static str, text: String) -> Result<String, ProviderError> {
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse { provider });
    }
    Ok(text)
}
