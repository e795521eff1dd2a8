//! Webhook delivery
//!
//! The HTTP side of the contact form. The trait seam lets handler tests run
//! against in-memory doubles while the runner wires in [`WebhookClient`].

use url::Url;

use folio_core::prelude::*;
use folio_core::OutboundPayload;

/// What the webhook said about a payload it received.
///
/// Both variants mean the HTTP exchange completed; transport failures are
/// surfaced as [`Error::Transport`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 2xx response.
    Accepted,
    /// Non-2xx response. The body is not read.
    Rejected { status: u16 },
}

/// Delivers contact payloads to a webhook endpoint.
#[trait_variant::make(Webhook: Send)]
pub trait LocalWebhook {
    /// POST `payload` as JSON to `endpoint`.
    async fn deliver(&self, endpoint: &Url, payload: &OutboundPayload) -> Result<DeliveryOutcome>;
}

/// Production [`Webhook`] backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Webhook for WebhookClient {
    async fn deliver(&self, endpoint: &Url, payload: &OutboundPayload) -> Result<DeliveryOutcome> {
        let response = self
            .client
            .post(endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Webhook accepted submission");
            Ok(DeliveryOutcome::Accepted)
        } else {
            warn!(status = status.as_u16(), "Webhook rejected submission");
            Ok(DeliveryOutcome::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
