//! # Currency Swap
//!
//! The computational core of a token "currency swap" form: fetch a price list,
//! keep the latest price per token, and keep the two amount fields of the form
//! consistent while the user edits either one. Runs on native and WASM targets;
//! rendering is left to the host UI.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, price normalization, exchange math, swap form
//!    state (always available, WASM-safe)
//! 2. **HTTP** — `SwapHttp`, one GET against the price feed
//! 3. **High-Level Client** — `SwapClient` with the prices sub-client, a
//!    last-snapshot cache and the fetch lifecycle for a `SwapState`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use currency_swap::prelude::*;
//!
//! let client = SwapClient::builder().build()?;
//! let mut form = SwapState::new();
//! client.load_into(&mut form).await;
//!
//! form.apply(Action::EditAmount(Side::From, "5".into()));
//! println!("{} -> {}", form.from().amount, form.to().amount);
//! println!("{}", form.rate_line());
//! ```
//!
//! ## Features
//!
//! - `http` (default): `SwapHttp` and `SwapClient`, without a TLS backend.
//! - `native`: `http` plus rustls. Native builds need it to reach the default
//!   https feed; WASM builds use the browser's TLS.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client for the price feed.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `SwapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Side, TokenSymbol};

    // Domain types — prices
    pub use crate::domain::price::wire::PriceRecordResponse;
    pub use crate::domain::price::{
        normalize, PriceBook, PriceRecord, PriceTable, RecordValidationError, TokenSet,
    };

    // Domain types — exchange math
    pub use crate::domain::exchange::{convert, rate, usd_value, UNAVAILABLE, USD_UNAVAILABLE};

    // Domain types — tokens
    pub use crate::domain::token::{icon_url, placeholder_icon, Token};

    // Domain types — swap form
    pub use crate::domain::swap::{
        reduce, Action, Signal, SwapReceipt, SwapSide, SwapState, TokenListing,
    };

    // Errors
    pub use crate::error::{HttpError, SwapError};

    // Network
    pub use crate::network::DEFAULT_PRICES_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{PricesClient, SwapClient, SwapClientBuilder};
}
