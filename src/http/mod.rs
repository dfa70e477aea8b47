//! HTTP client module
//!
//! Issues single authenticated GET requests against the service.
//!
//! # Features
//!
//! - **Fixed headers**: versioned `Accept`, JSON `Content-Type`, `Authorization: Token ..`
//! - **Split timeouts**: separate connect and read timeouts, overridable per request
//! - **Rate Limiting**: optional token bucket rate limiter using governor
//!
//! Non-success statuses are returned as errors; nothing is retried.

mod client;
mod rate_limit;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, Timeouts, ACCEPT,
    CONTENT_TYPE,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
