//! Third-party mail relay used by the contact form.
//!
//! Client-side (hydrate): the EmailJS REST endpoint via `gloo-net`.
//! Server-side (SSR): submission reports `RelayError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! The relay only answers success or failure. Failures surface as
//! `RelayError` and are turned into a `PageEvent` by [`submit_contact`], so
//! the controller never sees a transport type.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Serialize;

use super::types::ContactPayload;
use crate::controller::PageEvent;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_PUBLIC_KEY: &str = "zEbrs-JqVjMRNw6Uh";
pub const DEFAULT_SERVICE_ID: &str = "service_p72qbsq";
pub const DEFAULT_TEMPLATE_ID: &str = "template_ftmqnib";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The request never produced a response.
    #[error("relay request failed: {0}")]
    Network(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request body could not be encoded.
    #[error("relay request encode failed: {0}")]
    Encode(String),

    /// No browser to send from.
    #[error("relay not available on server")]
    Unavailable,
}

/// Relay identifiers. Overridable at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            public_key: DEFAULT_PUBLIC_KEY.to_owned(),
            service_id: DEFAULT_SERVICE_ID.to_owned(),
            template_id: DEFAULT_TEMPLATE_ID.to_owned(),
        }
    }
}

impl RelayConfig {
    /// Defaults with overrides from compile-time environment variables:
    ///
    /// - `PORTFOLIO_EMAILJS_PUBLIC_KEY`
    /// - `PORTFOLIO_EMAILJS_SERVICE_ID`
    /// - `PORTFOLIO_EMAILJS_TEMPLATE_ID`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
            option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        )
    }

    fn with_overrides(public_key: Option<&str>, service_id: Option<&str>, template_id: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            public_key: pick(public_key, DEFAULT_PUBLIC_KEY),
            service_id: pick(service_id, DEFAULT_SERVICE_ID),
            template_id: pick(template_id, DEFAULT_TEMPLATE_ID),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

fn send_request_body(config: &RelayConfig, payload: &ContactPayload) -> Result<serde_json::Value, RelayError> {
    let request = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: payload,
    };
    serde_json::to_value(&request).map_err(|e| RelayError::Encode(e.to_string()))
}

/// Something that can deliver a contact form payload.
#[allow(async_fn_in_trait)]
pub trait MailRelay {
    /// Deliver `payload`.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if delivery fails for any reason.
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// EmailJS REST relay.
#[derive(Debug, Clone, Default)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl MailRelay for EmailJsRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let body = send_request_body(&self.config, payload)?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint)
                .json(&body)
                .map_err(|e| RelayError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(RelayError::Rejected { status, body });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(RelayError::Unavailable)
        }
    }
}

/// Run one submission and translate the outcome into a controller event.
pub async fn submit_contact<R: MailRelay>(relay: &R, payload: ContactPayload) -> PageEvent {
    match relay.submit(&payload).await {
        Ok(()) => PageEvent::ContactSent,
        Err(e) => PageEvent::ContactFailed { error: e.to_string() },
    }
}
