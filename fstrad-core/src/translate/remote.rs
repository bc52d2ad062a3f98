//! src/translate/remote.rs
//! ============================================================================
//! # Remote lookup collaborator
//!
//! [`RemoteTranslator`] is the seam the resolver talks to. The production
//! implementation queries the public Google endpoint; tests substitute fakes.
//! Implementations are untrusted: they may fail, hang, or panic, and the
//! resolver contains all three.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{config::TranslatorConfig, error::TranslateError};

#[async_trait]
pub trait RemoteTranslator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslateError>;
}

/// Client for `translate.googleapis.com/translate_a/single?client=gtx`.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout + Duration::from_millis(250))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl RemoteTranslator for GoogleTranslator {
    #[instrument(level = "debug", skip(self))]
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_locale),
                ("tl", target_locale),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "translation response received");
        parse_gtx_response(&body)
    }
}

/// Extracts the translated text from a `client=gtx` response.
///
/// The body is a nested array whose first element lists sentence segments as
/// `[translated, original, ...]`; the translation is their concatenation.
pub fn parse_gtx_response(body: &str) -> Result<String, TranslateError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| TranslateError::Malformed(e.to_string()))?;

    let segments = root
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed("missing segment list".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    let translated = translated.trim();
    if translated.is_empty() {
        return Err(TranslateError::Empty);
    }
    Ok(translated.to_string())
}
