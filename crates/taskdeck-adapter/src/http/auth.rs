/*
[INPUT]:  Credentials and session tokens
[OUTPUT]: Token and account responses from the auth endpoints
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When auth endpoints or their bodies change
*/

use reqwest::Method;

use crate::http::{Result, TaskApiClient};
use crate::types::{AckMessage, LoginRequest, RegisterRequest, RegisteredUser, TokenResponse};

impl TaskApiClient {
    /// Exchange credentials for an access token
    ///
    /// POST /login
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenResponse> {
        let builder = self.request(Method::POST, "/login")?.json(req);
        self.send_json(builder).await
    }

    /// Create a new account
    ///
    /// POST /register
    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisteredUser> {
        let builder = self.request(Method::POST, "/register")?.json(req);
        self.send_json(builder).await
    }

    /// Invalidate the current session server-side
    ///
    /// POST /logout
    /// Requires: Authorization bearer token. Callers treat failure as
    /// non-fatal; the local session is torn down either way.
    pub async fn logout(&self, token: &str) -> Result<AckMessage> {
        let builder = self.authorized_request(Method::POST, "/logout", token)?;
        self.send_json(builder).await
    }
}
