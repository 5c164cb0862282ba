//! HTTP implementation of `BudgetApi` on reqwest (fetch-backed on wasm).

use async_trait::async_trait;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{BudgetApi, DocumentKind};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Budget, BudgetPayload, LoginRequest, LoginResponse, MeResponse, User};

/// API client bound to a base URL and, optionally, a bearer token
#[derive(Debug, Clone)]
pub struct HttpBudgetApi {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl HttpBudgetApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            token: None,
        }
    }

    /// Same client, carrying `token` as the bearer credential
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("[api] {} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create/update: any 2xx is a save, the body is only read back if it is a budget
    async fn send_save(&self, builder: RequestBuilder) -> ApiResult<Option<Budget>> {
        let response = self.send(builder).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }
        match serde_json::from_slice::<Budget>(&body) {
            Ok(budget) => Ok(Some(budget)),
            Err(e) => {
                debug!("[api] Saved, response body is not a budget: {}", e);
                Ok(None)
            }
        }
    }
}

/// Unreserved characters stay as they are in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// `/budget/{id}` with the id escaped as a single path segment
fn budget_path(id: &str) -> String {
    format!("/budget/{}", segment(id))
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        warn!("[api] {} answered 401", response.url());
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status: status.as_u16(), message });
    }
    Ok(response)
}

#[async_trait(?Send)]
impl BudgetApi for HttpBudgetApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest { username, password };
        let response: LoginResponse = self
            .send_json(self.request(Method::POST, "/login").json(&body))
            .await?;
        Ok(response.token)
    }

    async fn me(&self) -> ApiResult<User> {
        let response: MeResponse = self.send_json(self.request(Method::GET, "/me")).await?;
        Ok(response.user)
    }

    async fn list_budgets(&self) -> ApiResult<Vec<Budget>> {
        self.send_json(self.request(Method::GET, "/budget")).await
    }

    async fn get_budget(&self, id: &str) -> ApiResult<Budget> {
        self.send_json(self.request(Method::GET, &budget_path(id))).await
    }

    async fn create_budget(&self, payload: &BudgetPayload) -> ApiResult<Option<Budget>> {
        self.send_save(self.request(Method::POST, "/budget").json(payload)).await
    }

    async fn update_budget(&self, id: &str, payload: &BudgetPayload) -> ApiResult<Option<Budget>> {
        self.send_save(self.request(Method::PUT, &budget_path(id)).json(payload))
            .await
    }

    async fn document(&self, kind: DocumentKind, budget_id: &str) -> ApiResult<Vec<u8>> {
        let response = self.send(self.request(Method::GET, &kind.path(&segment(budget_id)))).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
