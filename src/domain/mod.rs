//! Domain modules organized as vertical slices, one per Midgard source.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types consumed by the dashboard
//! - `wire.rs` — Raw serde structs matching Midgard responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with the HTTP call for that source

pub mod action;
pub mod history;
pub mod network;
pub mod pool;
pub mod stats;
