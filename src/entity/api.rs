use crate::entity::types::{AppConfig, BalanceSheetItemType, EntityId, EntityPage, PageRequest};
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Balance Sheet Item Type not found")]
    NotFound,
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

const RESOURCE_SEGMENTS: [&str; 2] = ["api", "balance-sheet-item-types"];
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Problem document returned by the backend for failed requests.
#[derive(Deserialize, Debug)]
struct Problem {
    title: Option<String>,
    detail: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
    app_name: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url,
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
            app_name: config.app_name.clone(),
        })
    }

    fn resource_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(RESOURCE_SEGMENTS);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get_entity(&self, id: &str) -> Result<BalanceSheetItemType> {
        let url = self.resource_url(Some(id));
        debug!("GET {}", url);

        let response = check_status(self.request(Method::GET, url).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_entities(&self, page: &PageRequest) -> Result<EntityPage> {
        let url = self.resource_url(None);
        debug!("GET {} page={} size={}", url, page.page, page.size);

        let response = check_status(
            self.request(Method::GET, url)
                .query(&page.query_pairs())
                .send()
                .await?,
        )
        .await?;

        let total = total_count(response.headers());
        let body = response.text().await?;
        let items: Vec<BalanceSheetItemType> = serde_json::from_str(&body)?;
        let total_items = total.unwrap_or(items.len() as u64);

        Ok(EntityPage { items, total_items })
    }

    /// Deletes the entity and returns the backend's deletion alert text, if any.
    pub async fn delete_entity(&self, id: EntityId) -> Result<Option<String>> {
        let url = self.resource_url(Some(&id.to_string()));
        debug!("DELETE {}", url);

        let response = check_status(self.request(Method::DELETE, url).send().await?).await?;
        Ok(deletion_alert(response.headers(), &self.app_name))
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    debug!("Response status {}", status);

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = problem_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn problem_message(body: &str) -> Option<String> {
    let problem: Problem = serde_json::from_str(body).ok()?;
    match (problem.title, problem.detail) {
        (Some(title), Some(detail)) if title != detail => Some(format!("{}: {}", title, detail)),
        (Some(title), _) => Some(title),
        (None, detail) => detail,
    }
}

fn total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Reads the `X-<app>-alert` / `X-<app>-params` pair the backend attaches to deletions.
/// Untranslated alerts are sentences; translation keys fall back to a generated message.
fn deletion_alert(headers: &HeaderMap, app_name: &str) -> Option<String> {
    let prefix = format!("x-{}", app_name.to_ascii_lowercase());
    let header = |suffix: &str| {
        headers
            .get(format!("{}-{}", prefix, suffix))
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let alert = header("alert")?;
    if alert.contains(' ') {
        return Some(alert);
    }

    match header("params") {
        Some(params) => Some(format!("Balance Sheet Item Type {} deleted", params)),
        None => Some(alert),
    }
}
