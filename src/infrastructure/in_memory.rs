use crate::domain::ports::{MessageRelay, RelayResponse};
use crate::error::{ReminderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A message the in-memory relay accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination: String,
    pub text: String,
}

#[derive(Debug, Clone)]
enum Scripted {
    Status(u16, String),
    TransportFailure(String),
}

/// A relay that keeps every message in memory instead of sending it.
///
/// Answers 200 by default. Individual destinations can be scripted to
/// answer another status or to fail at the transport level. Used for
/// dry runs and tests; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRelay {
    sent: Arc<RwLock<Vec<SentMessage>>>,
    scripted: Arc<RwLock<HashMap<String, Scripted>>>,
}

impl InMemoryRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the relay answer `status` for `destination`.
    pub async fn respond_with(&self, destination: &str, status: u16, body: &str) {
        self.scripted.write().await.insert(
            destination.to_string(),
            Scripted::Status(status, body.to_string()),
        );
    }

    /// Makes requests to `destination` fail before any HTTP answer.
    pub async fn fail_transport(&self, destination: &str, detail: &str) {
        self.scripted.write().await.insert(
            destination.to_string(),
            Scripted::TransportFailure(detail.to_string()),
        );
    }

    /// Every request received, in order, including the failed ones.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MessageRelay for InMemoryRelay {
    async fn send(&self, destination: &str, text: &str) -> Result<RelayResponse> {
        self.sent.write().await.push(SentMessage {
            destination: destination.to_string(),
            text: text.to_string(),
        });

        match self.scripted.read().await.get(destination).cloned() {
            Some(Scripted::Status(status, body)) => Ok(RelayResponse { status, body }),
            Some(Scripted::TransportFailure(detail)) => Err(ReminderError::IoError(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, detail),
            )),
            None => Ok(RelayResponse {
                status: 200,
                body: r#"{"success":true}"#.to_string(),
            }),
        }
    }
}
