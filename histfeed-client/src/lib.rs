//! Histfeed Client — configuration and request construction for the hosted
//! historical market-data service.
//!
//! Builds on `histfeed-core`: every request parameter is validated before a
//! request object exists, so an invalid parameter short-circuits with zero
//! network side effects. This crate only *constructs* requests — sending
//! them, polling jobs, and transferring files belong to whatever transport
//! the caller runs.

pub mod batch;
pub mod client;
pub mod config;

pub use batch::{SubmitJobBuilder, SubmitJobParams};
pub use client::{ClientError, HistoricalBuilder, HistoricalClient, API_KEY_ENV, DEFAULT_GATEWAY};
pub use config::{ApiConfig, ConfigError};
