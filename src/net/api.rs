//! REST API helpers for communicating with the asset-management server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors/`None` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ApiError` values, never panics or thrown
//! exceptions. Server rejections carry the message from the response body
//! so the embedding form can show it verbatim; the caller logs once at the
//! boundary and keeps the form open for correction. Persistence of drafts
//! is the caller's concern — a failed call must never lose one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::Asset;

/// Failures surfaced by the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete at all.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status. `Display` is the
    /// server-provided message alone so forms can render it verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Extract the rejection message from a non-success response body.
///
/// The API replies with `{ "error": "..." }` on failure; a missing,
/// empty, or unparseable message falls back to `"Unknown error"`.
pub fn rejection_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
    }
    "Unknown error".to_owned()
}

/// Accept both `{ "assets": [...] }` and a bare array, the two shapes the
/// asset list endpoint has returned across versions. Anything else parses
/// to an empty list.
pub fn parse_asset_list(value: serde_json::Value) -> Vec<Asset> {
    let items = match value {
        serde_json::Value::Object(mut map) => match map.remove("assets") {
            Some(assets) => assets,
            None => serde_json::Value::Null,
        },
        other => other,
    };
    match serde_json::from_value(items) {
        Ok(assets) => assets,
        Err(_) => Vec::new(),
    }
}

#[cfg(feature = "hydrate")]
mod imp {
    use gloo_net::http::{Request, Response};

    use super::{ApiError, parse_asset_list, rejection_message};
    use crate::net::types::{Asset, AuditRecord, UserInfo};
    use crate::state::form::{AssetFormValues, InspectionDraft};

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    async fn rejection(resp: Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ApiError::Server {
            status,
            message: rejection_message(&body),
        }
    }

    /// Resolve the SSO redirect target from `GET /api/auth/login`,
    /// returned by the server as plain text.
    pub async fn fetch_login_url() -> Result<String, ApiError> {
        let resp = Request::get("/api/auth/login")
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.text().await.map_err(network)
    }

    /// Fetch the signed-in user's identity from `/api/auth/me`.
    /// Returns `None` if not authenticated.
    pub async fn fetch_current_user() -> Option<UserInfo> {
        let resp = match Request::get("/api/auth/me").send().await {
            Ok(resp) => resp,
            Err(_) => return None,
        };
        if !resp.ok() {
            return None;
        }
        match resp.json::<UserInfo>().await {
            Ok(user) => Some(user),
            Err(_) => None,
        }
    }

    /// Terminate the server-side session via `GET /api/auth/logout`.
    pub async fn logout() -> Result<(), ApiError> {
        let resp = Request::get("/api/auth/logout")
            .send()
            .await
            .map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(rejection(resp).await)
        }
    }

    pub async fn fetch_assets() -> Result<Vec<Asset>, ApiError> {
        let resp = Request::get("/api/assets").send().await.map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let value = resp
            .json::<serde_json::Value>()
            .await
            .map_err(network)?;
        Ok(parse_asset_list(value))
    }

    pub async fn fetch_asset(id: &str) -> Result<Asset, ApiError> {
        let url = format!("/api/assets/{id}");
        let resp = Request::get(&url).send().await.map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<Asset>().await.map_err(network)
    }

    pub async fn create_asset(draft: &AssetFormValues) -> Result<(), ApiError> {
        let resp = Request::post("/api/assets")
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(rejection(resp).await)
        }
    }

    pub async fn update_asset(id: &str, draft: &AssetFormValues) -> Result<(), ApiError> {
        let url = format!("/api/assets/{id}");
        let resp = Request::put(&url)
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(rejection(resp).await)
        }
    }

    /// Record one inspection entry via `POST /api/asset-audit`. Only a
    /// confirmed success returns `Ok`; any rejection carries the server's
    /// message for the embedding form to display.
    pub async fn submit_inspection(draft: &InspectionDraft) -> Result<(), ApiError> {
        let resp = Request::post("/api/asset-audit")
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(rejection(resp).await)
        }
    }

    pub async fn fetch_audit_history(asset_id: &str) -> Result<Vec<AuditRecord>, ApiError> {
        let url = format!("/api/asset-audit?assetId={asset_id}");
        let resp = Request::get(&url).send().await.map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<Vec<AuditRecord>>().await.map_err(network)
    }

    /// Fetch an asset and its audit history concurrently. The asset is
    /// load-bearing; a history failure degrades to an empty log.
    pub async fn fetch_asset_with_history(
        id: &str,
    ) -> Result<(Asset, Vec<AuditRecord>), ApiError> {
        let (asset, history) =
            futures::future::join(fetch_asset(id), fetch_audit_history(id)).await;
        let asset = asset?;
        let history = match history {
            Ok(records) => records,
            Err(err) => {
                leptos::logging::warn!("audit history fetch failed: {err}");
                Vec::new()
            }
        };
        Ok((asset, history))
    }
}

#[cfg(not(feature = "hydrate"))]
mod imp {
    use super::ApiError;
    use crate::net::types::{Asset, AuditRecord, UserInfo};
    use crate::state::form::{AssetFormValues, InspectionDraft};

    fn unavailable() -> ApiError {
        ApiError::Network("not available on server".to_owned())
    }

    pub async fn fetch_login_url() -> Result<String, ApiError> {
        Err(unavailable())
    }

    pub async fn fetch_current_user() -> Option<UserInfo> {
        None
    }

    pub async fn logout() -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn fetch_assets() -> Result<Vec<Asset>, ApiError> {
        Err(unavailable())
    }

    pub async fn fetch_asset(_id: &str) -> Result<Asset, ApiError> {
        Err(unavailable())
    }

    pub async fn create_asset(_draft: &AssetFormValues) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn update_asset(_id: &str, _draft: &AssetFormValues) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn submit_inspection(_draft: &InspectionDraft) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn fetch_audit_history(_asset_id: &str) -> Result<Vec<AuditRecord>, ApiError> {
        Err(unavailable())
    }

    pub async fn fetch_asset_with_history(
        _id: &str,
    ) -> Result<(Asset, Vec<AuditRecord>), ApiError> {
        Err(unavailable())
    }
}

pub use imp::*;
