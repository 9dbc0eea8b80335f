//! HTTP client layer — `MidgardHttp` with optional retry policies.

pub mod client;
pub mod retry;

pub use client::MidgardHttp;
pub use retry::{RetryConfig, RetryPolicy};
