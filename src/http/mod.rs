//! HTTP transport: the retrying request loop underneath both API clients.
//!
//! The transport deals only in raw outcomes: a status code and an
//! optional JSON body. Turning a non-2xx status into an error is the
//! response layer's job, so that error bodies can be decoded like any
//! other payload.

mod client;

pub use client::{BackoffType, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
