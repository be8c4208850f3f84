#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust client for a Matrix-Webhook bridge
//!
//! Posts chat messages to a single webhook endpoint and classifies the HTTP
//! outcome (status code and body) into a fixed set of error kinds.
//! The translation layer is pure; [`WebhookClient`] wires it to a real
//! transport

mod client;
mod config;
pub mod error;
pub mod request;
pub mod response;

pub use client::{WebhookClient, send_message, send_raw};
pub use config::ConnectionConfig;
pub use error::{Result, WebhookError};
pub use request::{MessagePayload, OutboundRequest, build_request, join_url};
pub use response::{TransportOutcome, interpret};
