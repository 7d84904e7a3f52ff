//! Hosted agent runtime client
//!
//! Opens one streaming discussion session: POSTs the panel options plus the
//! opening message, then decodes the SSE response line-by-line into
//! `SessionEvent`s forwarded over a channel.

use super::{RuntimeConfig, SessionEvent};
use crate::orchestrator::PanelOptions;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("{0} not found in environment or auth.json")]
    MissingApiKey(String),
    #[error("runtime request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("runtime error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("session cancelled")]
    Cancelled,
}

/// Client for the hosted agent runtime
#[derive(Clone)]
pub struct RuntimeClient {
    config: RuntimeConfig,
    http_client: reqwest::Client,
}

impl RuntimeClient {
    /// Create a new runtime client from config
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        // Close connections on drop so an abandoned session doesn't linger
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Get the API key from environment or auth.json
    fn api_key(&self) -> Result<String, RuntimeError> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        if let Ok(key) = std::env::var(&self.config.api_key_env) {
            return Ok(key);
        }

        if let Some(key) = Self::key_from_auth_json(&self.config.name) {
            return Ok(key);
        }

        Err(RuntimeError::MissingApiKey(self.config.api_key_env.clone()))
    }

    /// Try to read the API key from the data-dir auth.json
    fn key_from_auth_json(runtime_name: &str) -> Option<String> {
        let auth_path = dirs::data_dir()?.join("guru-panel").join("auth.json");

        let content = std::fs::read_to_string(&auth_path).ok()?;
        let auth: serde_json::Value = serde_json::from_str(&content).ok()?;

        auth.get(runtime_name.to_lowercase())?
            .get("key")?
            .as_str()
            .map(|s| s.to_string())
    }

    /// Run one streaming discussion session.
    ///
    /// Sends the topic as the initial message with the panel options attached,
    /// then forwards decoded events through the channel in arrival order.
    /// Supports cancellation via the token; cancellation is reported as
    /// `RuntimeError::Cancelled`, distinct from transport failure.
    pub async fn run_session(
        &self,
        options: &PanelOptions,
        topic: &str,
        tx: mpsc::UnboundedSender<SessionEvent>,
        cancellation: CancellationToken,
    ) -> Result<(), RuntimeError> {
        let api_key = self.api_key()?;
        let session_id = Uuid::new_v4();

        let body = serde_json::json!({
            "session_id": session_id,
            "options": options,
            "message": topic,
            "stream": true,
        });

        info!(
            session_id = %session_id,
            runtime = %self.config.name,
            agents = options.agents.len(),
            "starting discussion session"
        );

        let request_fut = self
            .http_client
            .post(format!("{}/agent/sessions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("Connection", "close")
            .json(&body)
            .send();

        // The request itself must be cancellable - session setup can take a
        // while before the first byte arrives
        let response = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                let _ = tx.send(SessionEvent::Done);
                return Err(RuntimeError::Cancelled);
            }
            result = request_fut => result?,
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RuntimeError::Api { status, body });
        }

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();

        loop {
            let result = tokio::select! {
                biased;
                _ = cancellation.cancelled() => {
                    // Drop the stream to close the connection and signal the
                    // runtime to stop the session
                    drop(stream);
                    let _ = tx.send(SessionEvent::Done);
                    return Err(RuntimeError::Cancelled);
                }
                item = stream.next() => item,
            };

            let Some(result) = result else {
                break;
            };

            let bytes = result?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            // Process complete SSE lines
            while let Some(pos) = buffer.find('\n') {
                let line = buffer[..pos].trim().to_string();
                buffer = buffer[pos + 1..].to_string();

                if line.is_empty() || line.starts_with(':') {
                    continue;
                }

                if let Some(data) = line.strip_prefix("data: ") {
                    if data == "[DONE]" {
                        break;
                    }

                    match SessionEvent::decode(data) {
                        Some(SessionEvent::Done) => break,
                        Some(event) => {
                            let _ = tx.send(event);
                        }
                        None => {
                            debug!("ignoring unrecognized stream payload: {}", data);
                        }
                    }
                }
            }
        }

        let _ = tx.send(SessionEvent::Done);
        info!(session_id = %session_id, "discussion session finished");
        Ok(())
    }
}
