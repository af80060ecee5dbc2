//! HTTP order gateway.
//!
//! Posts the two populated order fields to the externally configured
//! form-handling endpoint as an HTML-form-style body. The response body is
//! not inspected and there is no retry; a network failure surfaces as a
//! gateway error, which the deferred dispatcher logs and drops.

use async_trait::async_trait;
use shopfront_core::error::{Result, ShopfrontError};
use shopfront_core::order::{OrderFields, OrderGateway};

/// Gateway posting order fields to a third-party form endpoint.
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpOrderGateway {
    /// Creates a gateway for the given endpoint. `None` means no endpoint
    /// is configured; submissions are logged and dropped.
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(&self, fields: &OrderFields) -> Result<()> {
        let Some(endpoint) = &self.endpoint else {
            tracing::warn!("no order endpoint configured; order not dispatched");
            return Ok(());
        };

        let form = [
            ("order-details", fields.details.as_str()),
            ("order-total", fields.total.as_str()),
        ];

        match self.client.post(endpoint).form(&form).send().await {
            Ok(response) => {
                tracing::info!(status = %response.status(), "order form dispatched");
                Ok(())
            }
            Err(e) => Err(ShopfrontError::gateway(format!(
                "order form dispatch failed: {}",
                e
            ))),
        }
    }
}
