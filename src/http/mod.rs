//! HTTP client module
//!
//! A thin wrapper over reqwest that issues exactly one request per call.
//!
//! # Features
//!
//! - **Timeouts**: one per client, reported as a typed error
//! - **Default headers**: applied to every request
//! - **Status classification**: non-2xx responses become typed errors

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
