//! User account endpoints.

use portal_acl::User;
use portal_core::Result;
use portal_session::Credentials;
use reqwest::Method;

use crate::client::ApiClient;
use crate::models::{RegisterRequest, UpdateUserRequest};

impl ApiClient {
    /// `POST /user/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        self.call(self.request(Method::POST, "/user/login").json(credentials))
            .await
    }

    /// `POST /user/register`, returning the new user id.
    pub async fn register(&self, request: &RegisterRequest) -> Result<u64> {
        self.call(self.request(Method::POST, "/user/register").json(request))
            .await
    }

    /// `GET /user/get/login`: the user behind the session cookie.
    pub async fn get_login_user(&self) -> Result<User> {
        self.call(self.request(Method::GET, "/user/get/login")).await
    }

    /// `POST /user/logout`
    pub async fn logout(&self) -> Result<()> {
        self.call_unit(self.request(Method::POST, "/user/logout"))
            .await
    }

    /// `POST /user/regenerate`: issues a fresh access/secret key pair and
    /// returns the new access key.
    pub async fn regenerate_key(&self) -> Result<String> {
        self.call(self.request(Method::POST, "/user/regenerate"))
            .await
    }

    /// `POST /user/update/my`
    pub async fn update_my_user(&self, request: &UpdateUserRequest) -> Result<bool> {
        self.call(self.request(Method::POST, "/user/update/my").json(request))
            .await
    }
}
