//! Catalog loader
//!
//! Fetches the whole catalog once and publishes the resulting
//! [`CollectionState`]. Failures are folded into an errored state plus a
//! single alert; nothing is retried.

use super::types::{decode_catalog, CatalogItem, CollectionState};
use crate::alert::{Alert, AlertSink};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Where catalog items come from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every item in the catalog
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>>;

    /// Short description for logs
    fn describe(&self) -> String {
        "catalog".to_string()
    }
}

/// Catalog served as a JSON array over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: HttpClient,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Create a source for `endpoint` using an existing client
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Build the client and source from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(client, config.endpoint.clone()))
    }

    /// Endpoint this source reads
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>> {
        let body: Value = self.client.get_json(&self.endpoint).await?;
        Ok(decode_catalog(body))
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// How a load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items were published
    Loaded { count: usize },
    /// The fetch failed and an alert was raised
    Failed,
    /// The load was abandoned before it resolved
    Cancelled,
}

/// One-shot catalog loader
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    alerts: Arc<dyn AlertSink>,
}

impl CatalogLoader {
    /// Create a loader reading from `source` and reporting to `alerts`
    pub fn new(source: Arc<dyn CatalogSource>, alerts: Arc<dyn AlertSink>) -> Self {
        Self { source, alerts }
    }

    /// Fetch the catalog and return the resolved state
    pub async fn load(&self) -> CollectionState {
        let (publisher, state) = watch::channel(CollectionState::idle());
        self.load_until(&CancellationToken::new(), &publisher).await;
        let resolved = state.borrow().clone();
        resolved
    }

    /// Fetch the catalog, publishing each state change
    ///
    /// Publishes `Loading` first, then exactly one of `Ready` or `Errored`.
    /// Once `cancel` fires nothing more is published and no alert is raised.
    pub async fn load_until(
        &self,
        cancel: &CancellationToken,
        publisher: &watch::Sender<CollectionState>,
    ) -> LoadOutcome {
        if cancel.is_cancelled() {
            debug!("Catalog load cancelled before start");
            return LoadOutcome::Cancelled;
        }

        publisher.send_replace(CollectionState::loading());
        info!(source = %self.source.describe(), "Loading catalog");

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Catalog load cancelled while in flight");
                return LoadOutcome::Cancelled;
            }
            result = self.source.fetch_all() => result,
        };

        // The fetch can resolve in the same poll that cancellation lands
        if cancel.is_cancelled() {
            debug!("Catalog load cancelled as the fetch resolved");
            return LoadOutcome::Cancelled;
        }

        match result {
            Ok(items) => {
                let count = items.len();
                info!(count, "Catalog loaded");
                publisher.send_replace(CollectionState::ready(items));
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                error!(error = %e, fetch_failure = e.is_fetch_failure(), "Failed to fetch catalog");
                self.alerts.show(&Alert::fetch_failed());
                publisher.send_replace(CollectionState::errored());
                LoadOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}
