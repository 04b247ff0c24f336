//! Wire types shared with the asset-management API.
//!
//! Field names follow the server's camelCase JSON. Everything except the
//! identifier is default-tolerant since list and detail endpoints return
//! different projections of the same records; the core only depends on
//! `id` for selection identity.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// An asset record as returned by `/api/assets`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub asset_no: String,
    #[serde(default)]
    pub line_no: String,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub category_code: String,
    #[serde(default)]
    pub acq_value: Option<f64>,
    #[serde(default)]
    pub book_value: Option<f64>,
    #[serde(default)]
    pub pis_date: String,
    #[serde(default)]
    pub trans_date: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One inspection/audit entry from the asset-audit history endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub check_date: String,
    #[serde(default)]
    pub checked_by: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: String,
}

/// Identity attributes delivered by `/api/auth/me` after sign-in; the
/// input to `SessionStore::set_user`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: serde_json::Value,
}
