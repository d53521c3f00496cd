//! Shared model and request logic for the QRAP dashboard.
//!
//! Everything here is plain Rust so it can be tested off the browser; the
//! `qrap-dashboard` crate only supplies a fetch-backed [`api::Transport`]
//! and the views.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod hndl;
pub mod load;
pub mod stats;

pub use api::{ApiRequest, Method, QrapClient, Transport};
pub use config::DashboardConfig;
pub use error::{ApiError, ApiResult};
