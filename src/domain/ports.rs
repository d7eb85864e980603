use crate::error::Result;
use async_trait::async_trait;

/// Raw answer from the messaging relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to hand one text message to one destination.
///
/// `Err` means the request did not complete; any HTTP answer, successful
/// or not, is `Ok`.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send(&self, destination: &str, text: &str) -> Result<RelayResponse>;
}

pub type MessageRelayBox = Box<dyn MessageRelay>;
