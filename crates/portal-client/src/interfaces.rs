//! Interface marketplace endpoints.

use portal_core::Result;
use reqwest::Method;

use crate::client::ApiClient;
use crate::models::{
    IdRequest, InterfaceInfo, InterfaceInfoRequest, InvokeInterfaceRequest, PageParams,
    PageResult,
};

impl ApiClient {
    /// `GET /interfaceInfo/list` with free-form filters.
    pub async fn list_interfaces(&self, filters: &[(String, String)]) -> Result<Vec<InterfaceInfo>> {
        self.call(self.request(Method::GET, "/interfaceInfo/list").query(filters))
            .await
    }

    /// `GET /interfaceInfo/list/page/public`: online listings only.
    pub async fn list_interfaces_page(
        &self,
        params: &PageParams,
    ) -> Result<PageResult<InterfaceInfo>> {
        self.call(
            self.request(Method::GET, "/interfaceInfo/list/page/public")
                .query(params),
        )
        .await
    }

    /// `GET /interfaceInfo/list/page`: every listing (admin only).
    pub async fn list_interfaces_page_admin(
        &self,
        params: &PageParams,
    ) -> Result<PageResult<InterfaceInfo>> {
        self.call(
            self.request(Method::GET, "/interfaceInfo/list/page")
                .query(params),
        )
        .await
    }

    /// `GET /interfaceInfo/get?id=`
    pub async fn get_interface(&self, id: u64) -> Result<InterfaceInfo> {
        self.call(
            self.request(Method::GET, "/interfaceInfo/get")
                .query(&[("id", id)]),
        )
        .await
    }

    /// `POST /interfaceInfo/invoke`: returns the upstream body as JSON.
    pub async fn invoke_interface(
        &self,
        request: &InvokeInterfaceRequest,
    ) -> Result<serde_json::Value> {
        self.call(self.request(Method::POST, "/interfaceInfo/invoke").json(request))
            .await
    }

    /// `POST /interfaceInfo/add`: returns the new id.
    pub async fn add_interface(&self, request: &InterfaceInfoRequest) -> Result<u64> {
        self.call(self.request(Method::POST, "/interfaceInfo/add").json(request))
            .await
    }

    /// `POST /interfaceInfo/update`
    pub async fn update_interface(&self, request: &InterfaceInfoRequest) -> Result<bool> {
        self.call(self.request(Method::POST, "/interfaceInfo/update").json(request))
            .await
    }

    /// `POST /interfaceInfo/delete`
    pub async fn delete_interface(&self, id: u64) -> Result<bool> {
        self.call(
            self.request(Method::POST, "/interfaceInfo/delete")
                .json(&IdRequest { id }),
        )
        .await
    }

    /// `POST /interfaceInfo/online`
    pub async fn online_interface(&self, id: u64) -> Result<bool> {
        self.call(
            self.request(Method::POST, "/interfaceInfo/online")
                .json(&IdRequest { id }),
        )
        .await
    }

    /// `POST /interfaceInfo/offline`
    pub async fn offline_interface(&self, id: u64) -> Result<bool> {
        self.call(
            self.request(Method::POST, "/interfaceInfo/offline")
                .json(&IdRequest { id }),
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{STATUS_OFFLINE, SortOrder};
    use portal_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": data, "message": "ok" }))
    }

    fn weather() -> serde_json::Value {
        json!({ "id": 3, "name": "weather", "url": "http://gw/weather", "status": 1, "method": "GET" })
    }

    #[tokio::test]
    async fn test_list_page_sends_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interfaceInfo/list/page/public"))
            .and(query_param("current", "1"))
            .and(query_param("pageSize", "8"))
            .and(query_param("sortOrder", "ascend"))
            .respond_with(ok(json!({ "records": [weather()], "total": 1 })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let params = PageParams::page(1, 8).sorted_by("name", SortOrder::Ascend);
        let page = client.list_interfaces_page(&params).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].name, "weather");
    }

    #[tokio::test]
    async fn test_get_interface_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interfaceInfo/get"))
            .and(query_param("id", "3"))
            .respond_with(ok(weather()))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let info = client.get_interface(3).await.unwrap();
        assert!(info.is_online());
    }

    #[tokio::test]
    async fn test_invoke_returns_upstream_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interfaceInfo/invoke"))
            .and(body_json(json!({ "id": 3, "userRequestParams": "{\"city\":\"hz\"}" })))
            .respond_with(ok(json!({ "temperature": 21 })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let body = client
            .invoke_interface(&InvokeInterfaceRequest {
                id: 3,
                user_request_params: "{\"city\":\"hz\"}".into(),
            })
            .await
            .unwrap();
        assert_eq!(body["temperature"], 21);
    }

    #[tokio::test]
    async fn test_admin_mutations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interfaceInfo/add"))
            .respond_with(ok(json!(42)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/interfaceInfo/offline"))
            .and(body_json(json!({ "id": 42 })))
            .respond_with(ok(json!(true)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/interfaceInfo/update"))
            .and(body_json(json!({ "id": 42, "status": 0 })))
            .respond_with(ok(json!(true)))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let id = client
            .add_interface(&InterfaceInfoRequest {
                name: Some("geo".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(id, 42);
        assert!(client.offline_interface(id).await.unwrap());
        assert!(
            client
                .update_interface(&InterfaceInfoRequest {
                    id: Some(id),
                    status: Some(STATUS_OFFLINE),
                    ..Default::default()
                })
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_forbidden_for_non_admin() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interfaceInfo/delete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({ "code": 40101, "data": null, "message": "no permission" }),
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let err = client.delete_interface(3).await.unwrap_err();
        assert_eq!(err.to_string(), "API error 40101: no permission");
        assert!(matches!(err, Error::Api { .. }));
    }
}
