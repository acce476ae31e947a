use crate::{
    ListPage, ListParams, RecordStore, StoreError, StoreResult, UpdateParams, map_sort_field,
};

use crm_config::ServiceConfig;
use crm_core::{Lead, LeadDraft, LeadId};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Record store backed by the CRM custom service REST API
pub struct HttpRecordStore {
    pub base_url: String,
    pub resource: String,
    auth_token: Option<String>,
    client: ReqwestClient,
}

impl HttpRecordStore {
    /// Create a new store client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://localhost:3001/api")
    /// * `resource` - Resource path segment (e.g., "leads")
    /// * `auth_token` - Optional bearer token sent on every request
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: &str,
        resource: &str,
        auth_token: Option<&str>,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource: resource.trim_matches('/').to_string(),
            auth_token: auth_token.map(String::from),
            client,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> StoreResult<Self> {
        Self::new(
            &config.base_url,
            &config.resource,
            config.auth_token.as_deref(),
            config.timeout(),
        )
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    fn record_url(&self, id: &LeadId) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    /// Build a request with JSON content type and optional bearer token
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(ref token) = self.auth_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and map non-success responses to API errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> StoreResult<T> {
        let body = self.execute_raw(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn execute_raw(&self, req: reqwest::RequestBuilder) -> StoreResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::api(
                status.as_u16(),
                error_message(&body, status),
            ));
        }

        Ok(body)
    }
}

/// The service reports failures as `{"error": "..."}`; some deployments nest
/// a `{"code", "message"}` object instead.
fn error_message(body: &str, status: StatusCode) -> String {
    let fallback = || {
        status
            .canonical_reason()
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
    };

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match json.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(error)) => error
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(fallback),
        _ => fallback(),
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list(&self, params: &ListParams) -> StoreResult<ListPage> {
        let filter = serde_json::to_string(&params.filter)?;
        let url = Url::parse_with_params(
            &self.collection_url(),
            &[
                ("page", params.pagination.page.to_string()),
                ("perPage", params.pagination.per_page.to_string()),
                ("sortField", map_sort_field(&params.sort.field).to_string()),
                ("sortOrder", params.sort.order.as_query().to_string()),
                ("filter", filter),
            ],
        )
        .map_err(|e| StoreError::invalid_request(format!("invalid service URL: {e}")))?;

        debug!("GET {}", url);
        let req = self.request(Method::GET, url.as_str());
        self.execute(req).await
    }

    async fn get(&self, id: &LeadId) -> StoreResult<Lead> {
        let req = self.request(Method::GET, &self.record_url(id));
        self.execute(req).await
    }

    async fn create(&self, draft: &LeadDraft) -> StoreResult<Lead> {
        let req = self
            .request(Method::POST, &self.collection_url())
            .json(draft);
        self.execute(req).await
    }

    async fn update(&self, params: &UpdateParams) -> StoreResult<Lead> {
        debug!("PUT {} {:?}", self.record_url(&params.id), params.data);
        let req = self
            .request(Method::PUT, &self.record_url(&params.id))
            .json(&params.data);
        self.execute(req).await
    }

    async fn delete(&self, id: &LeadId) -> StoreResult<()> {
        let req = self.request(Method::DELETE, &self.record_url(id));
        self.execute_raw(req).await.map(|_| ())
    }
}
