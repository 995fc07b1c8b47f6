//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Upstream adapters (OpenAI assistant and completion APIs, TheCatAPI)
//! - In-memory mock upstreams for tests and offline runs
//! - The axum HTTP API exposing the relay endpoints

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
