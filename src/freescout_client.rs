//! HTTP client for the FreeScout API.
//!
//! This module provides the `FreeScoutClient` struct, the adapter between
//! the host platform's four CRUD operations and FreeScout's REST endpoints.
//!
//! Two layers live here:
//!
//! - the transport ([`FreeScoutClient::request`]): one outbound HTTP call
//!   per invocation, with the API-key header injected, success classified
//!   by status code, and the body decoded as JSON or plain text;
//! - the operations (`create`/`read`/`update`/`delete`): URL, method,
//!   header, and body construction per verb, plus the pagination loop for
//!   conversation lists.
//!
//! There is no retry, no backoff, and no timeout at this layer; a failed
//! call surfaces immediately and a hung call hangs the operation.
//!
//! # Security
//!
//! The API key is never logged. Response bodies are sanitized before they
//! appear in log output.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{redirect, Client, Method};
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::FreeScoutError;
use crate::models::{ConversationPage, ReadResponse, ResponseBody};
use crate::queries::{CreateQuery, DeleteQuery, ReadQuery, UpdateQuery};

/// Header carrying the API key on every outbound request.
const API_KEY_HEADER: &str = "X-FreeScout-API-Key";

/// Path of the conversations endpoint, resolved against the base URL.
const CONVERSATIONS_PATH: &str = "/api/conversations";

/// Content-Type sent on read requests, matching the platform's wire format.
const READ_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP client for the FreeScout API.
///
/// Holds the immutable connection configuration for one datasource
/// instance. Cloning is cheap; concurrent callers may share a clone freely
/// since no operation touches mutable state.
///
/// # Example
///
/// ```ignore
/// let config = Config::new("https://support.example.com", "key")?;
/// let client = FreeScoutClient::new(&config)?;
///
/// let conversations = client.read(ReadQuery::new()).await?;
/// ```
#[derive(Clone)]
pub struct FreeScoutClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL of the FreeScout instance.
    base_url: String,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,

    /// The API key pre-validated as a header value.
    api_key_header: HeaderValue,
}

impl FreeScoutClient {
    /// Creates a new FreeScout client from configuration.
    ///
    /// Redirects are disabled so 3xx statuses reach the success classifier
    /// instead of being followed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `FreeScoutError::HttpClient` if the HTTP client fails to
    /// initialize, or `FreeScoutError::Config` if the API key contains
    /// characters not valid in an HTTP header.
    pub fn new(config: &Config) -> Result<Self, FreeScoutError> {
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(FreeScoutError::HttpClient)?;

        let api_key_header = HeaderValue::from_str(&config.api_key).map_err(|_| {
            FreeScoutError::invalid_config("API key contains characters not valid in an HTTP header")
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            api_key_header,
        })
    }

    /// Sanitizes a message for logging, stripping the configured API key.
    #[must_use]
    pub fn sanitize(&self, message: &str) -> String {
        FreeScoutError::sanitize_message(message, &self.api_key)
    }

    /// Performs one HTTP call and decodes the response.
    ///
    /// The API-key header is merged in after the caller's headers, so it
    /// wins any collision. Status `<= 300` is success; the body is parsed
    /// as JSON when the `content-type` contains `"json"` and degrades to
    /// raw text on parse failure or any other content type. Status `> 300`
    /// fails with the raw body text as the error message.
    ///
    /// Exactly one outbound call per invocation; no retry.
    async fn request(
        &self,
        url: Url,
        method: Method,
        mut headers: HeaderMap,
        body: Option<String>,
    ) -> Result<ResponseBody, FreeScoutError> {
        headers.insert(API_KEY_HEADER, self.api_key_header.clone());

        tracing::debug!(method = %method, path = %url.path(), "FreeScout API request");

        let mut req = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(FreeScoutError::Http)?;
        let status = response.status();

        if status.as_u16() > 300 {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                status = %status,
                body = %self.sanitize(&body),
                "FreeScout API request failed"
            );
            return Err(FreeScoutError::api(status, body));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let text = response.text().await.map_err(FreeScoutError::Http)?;

        tracing::trace!(body = %text, "FreeScout API response");

        if content_type.contains("json") {
            // A malformed body despite a JSON content type degrades to text.
            match serde_json::from_str(&text) {
                Ok(value) => Ok(ResponseBody::Json(value)),
                Err(_) => Ok(ResponseBody::Text(text)),
            }
        } else {
            Ok(ResponseBody::Text(text))
        }
    }

    /// Creates a resource.
    ///
    /// Issues `POST` to the base resource URL with a JSON-serialized body.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged from [`Self::request`].
    pub async fn create(&self, query: CreateQuery) -> Result<ResponseBody, FreeScoutError> {
        let url = Url::parse(&self.base_url)?;
        self.request(url, Method::POST, json_headers(), Some(serde_json::to_string(&query.json)?))
            .await
    }

    /// Updates a resource.
    ///
    /// Identical to [`Self::create`] but issues `PUT`. The target resource
    /// identity must already be encoded in the base URL or the payload;
    /// that is a property of the FreeScout API contract, not validated here.
    pub async fn update(&self, query: UpdateQuery) -> Result<ResponseBody, FreeScoutError> {
        let url = Url::parse(&self.base_url)?;
        self.request(url, Method::PUT, json_headers(), Some(serde_json::to_string(&query.json)?))
            .await
    }

    /// Deletes a resource.
    ///
    /// Issues `DELETE` to `<base>/<id>` and returns the decoded (typically
    /// empty or text) response.
    pub async fn delete(&self, query: DeleteQuery) -> Result<ResponseBody, FreeScoutError> {
        let url = Url::parse(&format!("{}/{}", self.base_url, query.id))?;
        self.request(url, Method::DELETE, HeaderMap::new(), None).await
    }

    /// Reads one conversation or pages through the conversation list.
    ///
    /// With `query.id` set, fetches `<base>/api/conversations/<id>` and
    /// lifts the response's `_embedded.threads` to a top-level `threads`
    /// field. Without it, fetches `<base>/api/conversations?page=<n>`
    /// starting at page 1 and accumulates `_embedded.conversations` across
    /// pages until the server-reported `page.totalPages` is exhausted or
    /// `query.page_limit` pages have been fetched.
    ///
    /// `query.params`, when supplied, replaces the entire query string,
    /// including any `mailboxId` derived from `query.mailbox_id`.
    ///
    /// Pages are fetched strictly one after another, never concurrently.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged. A response missing the
    /// envelope fields the operation reads (`_embedded`, `page.totalPages`)
    /// fails with an envelope or deserialization error.
    pub async fn read(&self, query: ReadQuery) -> Result<ReadResponse, FreeScoutError> {
        let url = self.conversations_url(&query)?;

        if query.id.is_some() {
            let body = self.request(url, Method::GET, read_headers(), None).await?;
            return Ok(ReadResponse::Conversation(lift_threads(body)?));
        }

        let mut conversations: Vec<Value> = Vec::new();
        let mut total_pages = 1u32;
        let mut current_page = 1u32;

        while current_page <= total_pages {
            let page_url = with_page(&url, current_page);
            let body = self
                .request(page_url, Method::GET, read_headers(), None)
                .await?;

            let page: ConversationPage = match body {
                ResponseBody::Json(value) => serde_json::from_value(value)?,
                ResponseBody::Text(_) => {
                    return Err(FreeScoutError::envelope("_embedded.conversations"))
                }
            };

            conversations.extend(page.embedded.conversations);
            // Server-declared; taken as current even if it moves between pages.
            total_pages = page.page.total_pages;

            tracing::debug!(
                page = current_page,
                total_pages = total_pages,
                accumulated = conversations.len(),
                "fetched conversation list page"
            );

            if query.page_limit > 0 && current_page >= query.page_limit {
                break;
            }

            current_page += 1;
        }

        Ok(ReadResponse::Conversations(conversations))
    }

    /// Builds the conversations endpoint URL for a read query.
    ///
    /// The path is resolved absolutely against the base URL, extended with
    /// `/<id>` for single reads. `mailbox_id` becomes the `mailboxId` query
    /// parameter; a raw `params` string then replaces the whole query.
    fn conversations_url(&self, query: &ReadQuery) -> Result<Url, FreeScoutError> {
        let mut url = Url::parse(&self.base_url)?.join(CONVERSATIONS_PATH)?;

        if let Some(id) = &query.id {
            let path = format!("{}/{}", url.path(), id);
            url.set_path(&path);
        }

        if let Some(mailbox_id) = &query.mailbox_id {
            url.query_pairs_mut().append_pair("mailboxId", mailbox_id);
        }

        if let Some(params) = &query.params {
            url.set_query(Some(params));
        }

        Ok(url)
    }
}

/// Headers for create/update requests.
fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Headers for read requests.
fn read_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(READ_CONTENT_TYPE));
    headers
}

/// Returns `url` with its `page` query parameter set to `page`,
/// replacing any existing `page` value rather than appending a duplicate.
fn with_page(url: &Url, page: u32) -> Url {
    let mut out = url.clone();
    {
        let mut pairs = out.query_pairs_mut();
        pairs.clear();
        for (key, value) in url.query_pairs().filter(|(key, _)| key != "page") {
            pairs.append_pair(&key, &value);
        }
        pairs.append_pair("page", &page.to_string());
    }
    out
}

/// Lifts `_embedded.threads` to a top-level `threads` field on a single
/// conversation response.
///
/// Fails if the response is not a JSON object carrying `_embedded`. An
/// `_embedded` block without `threads` leaves the conversation unchanged.
fn lift_threads(body: ResponseBody) -> Result<Value, FreeScoutError> {
    let mut conversation = body
        .into_json()
        .ok_or(FreeScoutError::envelope("_embedded"))?;

    let threads = conversation
        .get("_embedded")
        .ok_or(FreeScoutError::envelope("_embedded"))?
        .get("threads")
        .cloned();

    if let Some(threads) = threads {
        conversation
            .as_object_mut()
            .ok_or(FreeScoutError::envelope("_embedded"))?
            .insert("threads".to_string(), threads);
    }

    Ok(conversation)
}
