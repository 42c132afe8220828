//! Typed client over an [`HttpTransport`].
//!
//! Thin on purpose: it resolves routes, serializes bodies, maps status codes
//! to [`ApiError`] and logs. It does no retries, no auth and no caching.
//! Mutations discard the response body; the views re-fetch afterwards.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoints::expand;
use super::{ApiError, ApiRequest, ApiResponse, HttpTransport, Method};
use crate::config::ClientConfig;
use crate::model::{
    DebtSummary, LowStockEntry, ProductCalc, ProductCounts, Record, RecordId, ResourceKind,
};

/// Which slice of a collection to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListScope {
    #[default]
    All,
    /// Products belonging to one category.
    Category(RecordId),
}

impl ListScope {
    pub fn category(&self) -> Option<&RecordId> {
        match self {
            ListScope::All => None,
            ListScope::Category(id) => Some(id),
        }
    }
}

/// A saved draft, routed to POST or PUT by its identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R> {
    Create(R),
    Update(R),
}

impl<R: Record> Submission<R> {
    /// Sentinel id → `Create`, anything else → `Update`.
    pub fn for_draft(draft: R) -> Self {
        if draft.id().is_unsaved() {
            Submission::Create(draft)
        } else {
            Submission::Update(draft)
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Submission::Create(_) => Method::Post,
            Submission::Update(_) => Method::Put,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub async fn list<R: Record>(&self, scope: &ListScope) -> Result<Vec<R>, ApiError> {
        let routes = self.config.endpoints.routes(R::KIND);
        let path = match scope {
            ListScope::All => routes.list.clone(),
            ListScope::Category(id) => match &routes.scoped_list {
                Some(template) => expand(template, id),
                None => {
                    warn!("{} cannot be listed by category, listing all", R::KIND);
                    routes.list.clone()
                }
            },
        };
        self.get_json(&path).await
    }

    pub async fn create<R: Record>(&self, record: &R) -> Result<(), ApiError> {
        let path = self.config.endpoints.routes(R::KIND).create.clone();
        self.send_json(Method::Post, &path, record).await
    }

    pub async fn update<R: Record>(&self, record: &R) -> Result<(), ApiError> {
        let routes = self.config.endpoints.routes(R::KIND);
        let template = routes.update.as_deref().ok_or(ApiError::Unsupported {
            kind: R::KIND,
            operation: "update",
        })?;

        let path = if routes.update_targets_record() {
            if record.id().is_unsaved() {
                return Err(ApiError::MissingId { kind: R::KIND });
            }
            expand(template, record.id())
        } else {
            warn!("update route `{}` for {} carries no record id", template, R::KIND);
            template.to_string()
        };
        self.send_json(Method::Put, &path, record).await
    }

    pub async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), ApiError> {
        if id.is_unsaved() {
            return Err(ApiError::MissingId { kind });
        }
        let path = expand(&self.config.endpoints.routes(kind).delete, id);
        self.execute(Method::Delete, &path, None).await.map(|_| ())
    }

    pub async fn submit<R: Record>(&self, submission: &Submission<R>) -> Result<(), ApiError> {
        match submission {
            Submission::Create(record) => self.create(record).await,
            Submission::Update(record) => self.update(record).await,
        }
    }

    pub async fn debt_summary(&self) -> Result<DebtSummary, ApiError> {
        self.get_json(&self.config.endpoints.debt_summary).await
    }

    pub async fn product_counts(&self) -> Result<ProductCounts, ApiError> {
        self.get_json(&self.config.endpoints.product_counts).await
    }

    pub async fn product_calc(&self) -> Result<ProductCalc, ApiError> {
        self.get_json(&self.config.endpoints.product_calc).await
    }

    pub async fn low_stock(&self) -> Result<Vec<LowStockEntry>, ApiError> {
        self.get_json(&self.config.endpoints.low_stock).await
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let response = self.execute(Method::Get, path, None).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            let url = self.config.url(path);
            warn!("could not decode response from {}: {}", url, e);
            ApiError::Decode {
                url,
                reason: e.to_string(),
            }
        })
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(method, path, Some(body)).await.map(|_| ())
    }

    async fn execute(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(path);
        debug!("{} {}", method, url);

        let request = ApiRequest {
            method,
            url: url.clone(),
            body,
        };
        let response = self.transport.send(request).await.inspect_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
        })?;

        if response.is_success() {
            return Ok(response);
        }

        warn!("{} {} returned {}", method, url, response.status);
        match response.status {
            404 => Err(ApiError::NotFound { url }),
            status => Err(ApiError::Status { status, url }),
        }
    }
}
