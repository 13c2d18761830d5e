//! HTTP client layer — `SwapHttp`, a single price feed endpoint.

pub mod client;

pub use client::SwapHttp;
