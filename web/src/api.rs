use wrapped_stats::{ErrorBody, GitHubData};

const FETCH_FAILED: &str = "Failed to fetch data";

/// Load a user's contributions from the data proxy on the page's own origin.
///
/// The error is the message to show: the proxy's `error` field when it sent
/// one, otherwise a generic failure.
pub async fn fetch_data(username: &str) -> Result<GitHubData, String> {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    let url = format!(
        "{}/api/get-data?username={}",
        origin,
        urlencoding::encode(username)
    );

    let response = reqwest::get(&url)
        .await
        .map_err(|_| FETCH_FAILED.to_string())?;

    if !response.status().is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return Err(failure_message(&body));
    }

    response
        .json::<GitHubData>()
        .await
        .map_err(|_| FETCH_FAILED.to_string())
}

/// Message for a non-2xx proxy response: its `error` field, or the generic
/// failure when the body is not an error body.
pub fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| FETCH_FAILED.to_string())
}
