//! Request and response payloads exchanged with the backend.
//!
//! Field names follow the backend's camelCase JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Interface status value meaning "online".
pub const STATUS_ONLINE: i32 = 1;

/// Interface status value meaning "offline".
pub const STATUS_OFFLINE: i32 = 0;

/// A third-party interface listed in the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfaceInfo {
    /// Listing id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Description shown on the detail page.
    pub description: Option<String>,
    /// Upstream URL.
    pub url: String,
    /// Example request parameters (JSON text).
    pub request_params: Option<String>,
    /// Request headers (JSON text).
    pub request_header: Option<String>,
    /// Response headers (JSON text).
    pub response_header: Option<String>,
    /// [`STATUS_ONLINE`] or [`STATUS_OFFLINE`].
    pub status: i32,
    /// HTTP method, upper case.
    pub method: String,
    /// Owner of the listing.
    pub user_id: Option<u64>,
    /// Price per call.
    pub price: Option<f64>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last update timestamp.
    pub update_time: Option<String>,
}

impl InterfaceInfo {
    /// Whether the interface can currently be invoked.
    pub fn is_online(&self) -> bool {
        self.status == STATUS_ONLINE
    }
}

/// Create/update payload for an interface listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Payload for invoking an interface through the platform gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeInterfaceRequest {
    /// Interface id.
    pub id: u64,
    /// Caller-supplied parameters (JSON text).
    pub user_request_params: String,
}

/// Payload carrying only an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRequest {
    /// Target id.
    pub id: u64,
}

/// Registration form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_account: String,
    pub user_password: String,
    pub check_password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("user_account", &self.user_account)
            .finish_non_exhaustive()
    }
}

/// Profile edit form; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<String>,
}

/// Per-user quota for one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInterfaceInfo {
    pub id: u64,
    pub user_id: u64,
    pub interface_info_id: u64,
    /// Calls made so far.
    pub total_num: u64,
    /// Calls left.
    pub remain_num: u64,
    pub status: i32,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// One row of the "my invocations" table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvokeRecord {
    pub id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub total_num: u64,
    pub status: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Sort direction as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// Paging, sorting, and free-form filters for list endpoints.
///
/// Serializes straight into the query string of the list requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Additional filters, sent verbatim as query parameters.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl PageParams {
    /// First page with the given size.
    pub fn page(current: u32, page_size: u32) -> Self {
        Self {
            current: Some(current),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// Adds a filter.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Sorts by `field`.
    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = Some(field.into());
        self.sort_order = Some(order);
        self
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub current: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_info_from_backend_json() {
        let json = r#"{
            "id": 3,
            "name": "weather",
            "url": "http://localhost:8123/api/weather",
            "status": 1,
            "method": "GET",
            "userId": 1,
            "requestHeader": "{\"Content-Type\":\"application/json\"}"
        }"#;
        let info: InterfaceInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "weather");
        assert!(info.is_online());
        assert_eq!(info.user_id, Some(1));
        assert!(info.request_header.unwrap().contains("Content-Type"));
    }

    #[test]
    fn test_interface_request_skips_unset_fields() {
        let req = InterfaceInfoRequest {
            id: Some(3),
            status: Some(STATUS_OFFLINE),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "status": 0 }));
    }

    #[test]
    fn test_invoke_request_camel_case() {
        let req = InvokeInterfaceRequest {
            id: 3,
            user_request_params: "{\"city\":\"hz\"}".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userRequestParams"], "{\"city\":\"hz\"}");
    }

    #[test]
    fn test_page_params_serialized_shape() {
        let params = PageParams::page(2, 10)
            .sorted_by("createTime", SortOrder::Descend)
            .with_filter("name", "weather");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "current": 2,
                "pageSize": 10,
                "sortField": "createTime",
                "sortOrder": "descend",
                "name": "weather"
            })
        );
    }

    #[test]
    fn test_page_params_skips_unset_fields() {
        let params = PageParams::default().with_filter("status", "1");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "1" }));
    }

    #[test]
    fn test_page_result() {
        let json = r#"{ "records": [{ "id": 1, "name": "a", "totalNum": 4, "updateTime": "x" }], "total": 1 }"#;
        let page: PageResult<InvokeRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].total_num, 4);
    }

    #[test]
    fn test_register_request_debug_hides_passwords() {
        let req = RegisterRequest {
            user_account: "carol".into(),
            user_password: "pw12345678".into(),
            check_password: "pw12345678".into(),
        };
        let debug = format!("{req:?}");
        assert!(debug.contains("carol"));
        assert!(!debug.contains("pw12345678"));
    }
}
