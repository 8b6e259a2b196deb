//! Grammar checking against a LanguageTool-compatible endpoint.
//!
//! Pure request/response delegation: the text goes out form-encoded, the
//! checker's JSON payload comes back verbatim. No caching and no retry; any
//! transport failure or non-success status surfaces as
//! [`NoteError::GrammarCheck`].

use crate::config::CoreConfig;
use crate::error::{NoteError, NoteResult};
use std::time::Duration;

const HTTP_TIMEOUT_SECS: u64 = 10;

/// Client for the remote grammar-check service.
///
/// The underlying `reqwest::Client` holds a connection pool, so build this
/// once at startup and clone the service into handlers.
#[derive(Clone, Debug)]
pub struct GrammarService {
    client: reqwest::Client,
    endpoint: String,
}

impl GrammarService {
    /// Builds the HTTP client with a fixed timeout.
    pub fn new(cfg: &CoreConfig) -> NoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| NoteError::GrammarCheck(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: cfg.grammar_api_url().to_string(),
        })
    }

    /// Sends `text` to the checker and relays its findings verbatim.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::GrammarCheck` on transport errors, non-success
    /// statuses and unparsable response bodies.
    pub async fn check(&self, text: &str) -> NoteResult<serde_json::Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", "en-US")])
            .send()
            .await
            .map_err(|e| NoteError::GrammarCheck(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(NoteError::GrammarCheck(format!(
                "checker returned status {}",
                response.status()
            )));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| NoteError::GrammarCheck(format!("invalid response body: {e}")))
    }
}
