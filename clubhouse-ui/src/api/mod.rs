//! HTTP API Client
//!
//! Functions for communicating with the Clubhouse REST API.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::state::global::ActivityMap;

/// Default API base URL (empty: same origin as the page)
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("clubhouse_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body sent by the API. Older deployments used `message` for
/// errors too, so both fields are accepted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_text(self, fallback: &str) -> String {
        self.detail
            .or(self.message)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Success body for mutations
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Fetch the full activity collection.
///
/// A non-JSON body is reported as an error rather than left to propagate;
/// callers treat it exactly like a transport failure.
pub async fn fetch_activities() -> Result<ActivityMap, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/activities", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Sign `email` up for an activity.
///
/// Returns the server's confirmation message on success, or the display
/// text for the status area on failure.
pub async fn signup(activity: &str, email: &str) -> Result<String, String> {
    post_registration(activity, email, "signup", "Failed to sign up. Please try again.").await
}

/// Remove `email` from an activity's participant list.
pub async fn unregister(activity: &str, email: &str) -> Result<String, String> {
    post_registration(activity, email, "unregister", "Failed to unregister").await
}

async fn post_registration(
    activity: &str,
    email: &str,
    action: &str,
    fallback: &str,
) -> Result<String, String> {
    let api_base = get_api_base();
    let url = format!(
        "{}/activities/{}/{}?email={}",
        api_base,
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email),
    );

    let response = match Request::post(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            web_sys::console::error_1(&format!("Error calling {}: {}", action, e).into());
            return Err(fallback.to_string());
        }
    };

    if !response.ok() {
        let body: ErrorBody = response.json().await.unwrap_or(ErrorBody {
            detail: None,
            message: None,
        });
        return Err(body.into_text(fallback));
    }

    // A 2xx with a malformed body still means the mutation went through;
    // fall back to a generic confirmation rather than reporting an error.
    let body: MessageBody = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            web_sys::console::error_1(&format!("Error decoding {} response: {}", action, e).into());
            return Ok("Done".to_string());
        }
    };

    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_detail() {
        let body = ErrorBody {
            detail: Some("detail text".into()),
            message: Some("message text".into()),
        };
        assert_eq!(body.into_text("fallback"), "detail text");
    }

    #[test]
    fn error_body_falls_back_through_message() {
        let body = ErrorBody {
            detail: None,
            message: Some("message text".into()),
        };
        assert_eq!(body.into_text("fallback"), "message text");

        let empty = ErrorBody {
            detail: None,
            message: None,
        };
        assert_eq!(empty.into_text("fallback"), "fallback");
    }
}
