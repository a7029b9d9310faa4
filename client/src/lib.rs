//! # SoftNav Client Adapter
//!
//! Client-side helper for the code-request flow: fires the issuance
//! request without waiting for it, then polls the delivery status endpoint
//! on a fixed schedule. The caller awaits a real future with a bounded
//! budget and receives a distinguishable terminal state; exhausting the
//! budget yields [`DeliveryStatus::Unconfirmed`], never a fabricated
//! success.

mod poller;
mod probe;

pub use poller::{CodeRequestClient, DeliveryStatus, PollingConfig};
pub use probe::{HttpProbe, StatusProbe};

use thiserror::Error;

/// Errors raised by the client adapter
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Status probe failed: {0}")]
    Probe(String),
}
