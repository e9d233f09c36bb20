//! Shared API types for the risk-management dashboard.
//!
//! This crate provides the JSON types exchanged between the REST backend and
//! the web client. All types are WASM-compatible.
//!
//! # Architecture
//!
//! - `risk_common` - wire DTOs (config, status, logs, trades)
//! - `risk_gauge` - gauge geometry the client renders those numbers with
//!
//! Both `web_server` and `web_app` depend on this crate directly.
//!
//! Every numeric field of [`RiskStatus`] and [`RiskConfig`] carries a serde
//! default: a missing or malformed-absent field decodes to zero at the point
//! of use, never an error, so a partial backend payload cannot break a
//! render pass.

mod config;
mod logs;
mod status;
mod trades;

pub use config::*;
pub use logs::*;
pub use status::*;
pub use trades::*;
