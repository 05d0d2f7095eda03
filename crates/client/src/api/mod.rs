//! HTTP clients for the Money Map backend.
//!
//! Every endpoint answers with the `{status, data}` envelope; a call is a
//! business success only when the HTTP status is 200 *and* the envelope
//! status is `"success"`. Anything else surfaces as a tagged [`ApiError`]
//! so callers handle both branches uniformly instead of shape-sniffing
//! the returned value.

use reqwest::{StatusCode, Url, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use thiserror::Error;

use api_types::{
    Envelope,
    money_map::{MoneyMap, MoneyMapNew, MoneyMapUpdate},
    user::{Credentials, UserUpdate, UserView},
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-200 HTTP status; the body is not parsed.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// HTTP 200 but the envelope status was not `"success"`.
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ApiError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::BaseUrl(err.to_string()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::Status(response.status()));
        }

        let envelope = response.json::<Envelope<T>>().await?;
        if !envelope.is_success() {
            return Err(ApiError::Rejected(envelope.status));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Rejected("missing response data".to_string()))
    }

    /// `POST /account/login`, the only unauthenticated endpoint.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserView, ApiError> {
        let endpoint = self.endpoint("account/login")?;
        self.execute(self.http.post(endpoint).json(credentials)).await
    }

    /// `GET /account`
    pub async fn account(&self, token: &str) -> Result<UserView, ApiError> {
        let endpoint = self.endpoint("account")?;
        self.execute(
            self.http
                .get(endpoint)
                .bearer_auth(token)
                .header(CONTENT_TYPE, "application/json"),
        )
        .await
    }

    /// `PATCH /account`
    pub async fn update_account(
        &self,
        token: &str,
        update: &UserUpdate,
    ) -> Result<UserView, ApiError> {
        let endpoint = self.endpoint("account")?;
        self.execute(self.http.patch(endpoint).bearer_auth(token).json(update))
            .await
    }

    /// `GET /money_maps`
    ///
    /// Also backs the per-map account listing: the server has no narrower
    /// endpoint, so account fetches reuse this call and the caller picks
    /// the map it cares about out of the normalized slice.
    pub async fn money_maps(&self, token: &str) -> Result<Vec<MoneyMap>, ApiError> {
        let endpoint = self.endpoint("money_maps")?;
        self.execute(
            self.http
                .get(endpoint)
                .bearer_auth(token)
                .header(CONTENT_TYPE, "application/json"),
        )
        .await
    }

    /// `POST /money_maps`
    pub async fn create_money_map(
        &self,
        token: &str,
        money_map: &MoneyMapNew,
    ) -> Result<MoneyMap, ApiError> {
        let endpoint = self.endpoint("money_maps")?;
        self.execute(self.http.post(endpoint).bearer_auth(token).json(money_map))
            .await
    }

    /// `PATCH /money_maps`
    pub async fn update_money_map(
        &self,
        token: &str,
        money_map: &MoneyMapUpdate,
    ) -> Result<MoneyMap, ApiError> {
        let endpoint = self.endpoint("money_maps")?;
        self.execute(self.http.patch(endpoint).bearer_auth(token).json(money_map))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }

    #[test]
    fn envelope_success_requires_status_and_data() {
        let body = r#"{"status":"success","data":{"id":"1","email":"a@b.com","first_name":"A","last_name":"B","token":"T"}}"#;
        let envelope: Envelope<UserView> = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data.unwrap().id, "1");

        let body = r#"{"status":"failure","data":null}"#;
        let envelope: Envelope<UserView> = serde_json::from_str(body).unwrap();
        assert!(!envelope.is_success());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on a reserved port; the connect must fail
        // before any HTTP status exists.
        let api = ApiClient::new("http://127.0.0.1:9/").unwrap();
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        match api.login(&credentials).await {
            Err(ApiError::Transport(_)) => {}
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
