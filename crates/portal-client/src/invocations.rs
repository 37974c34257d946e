//! Per-user interface quota endpoints.

use portal_core::Result;
use reqwest::Method;

use crate::client::ApiClient;
use crate::models::{IdRequest, InvokeRecord, PageParams, PageResult, UserInterfaceInfo};

impl ApiClient {
    /// `GET /userInterfaceInfo/my/list/page`: the caller's invocation history.
    pub async fn list_my_invoke_records(
        &self,
        params: &PageParams,
    ) -> Result<PageResult<InvokeRecord>> {
        self.call(
            self.request(Method::GET, "/userInterfaceInfo/my/list/page")
                .query(params),
        )
        .await
    }

    /// `GET /userInterfaceInfo/get/interface?interfaceInfoId=`
    pub async fn get_user_interface_info(&self, interface_info_id: u64) -> Result<UserInterfaceInfo> {
        self.call(
            self.request(Method::GET, "/userInterfaceInfo/get/interface")
                .query(&[("interfaceInfoId", interface_info_id)]),
        )
        .await
    }

    /// `POST /userInterfaceInfo/apply`: requests a call quota for an interface.
    pub async fn apply_interface(&self, interface_info_id: u64) -> Result<bool> {
        self.call(
            self.request(Method::POST, "/userInterfaceInfo/apply")
                .json(&IdRequest {
                    id: interface_info_id,
                }),
        )
        .await
    }
}
