//! File upload endpoint.

use portal_core::Result;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;

/// Upload category for profile avatars.
pub const BIZ_USER_AVATAR: &str = "user_avatar";

impl ApiClient {
    /// `POST /file/upload`: sends `bytes` as the multipart `file` field,
    /// tagged with the `biz` category, and returns the stored file's URL.
    pub async fn upload_file(&self, bytes: Vec<u8>, file_name: &str, biz: &str) -> Result<String> {
        log::debug!("Uploading {file_name} ({} bytes) as {biz}", bytes.len());
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()))
            .text("biz", biz.to_string());
        self.call(self.request(Method::POST, "/file/upload").multipart(form))
            .await
    }
}
