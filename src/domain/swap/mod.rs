//! Swap form domain — the two editable sides, user actions, and signals.
//!
//! The host owns a [`SwapState`] and feeds it [`Action`]s; every action maps to
//! exactly one transition. Transitions that need to tell the host something
//! (a mock swap went through, the price fetch failed) return a [`Signal`].

pub mod state;

use crate::domain::price::PriceBook;
use crate::shared::{Side, TokenSymbol};
use serde::{Deserialize, Serialize};

pub use state::{reduce, SwapState};

/// User-visible message for a failed price fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch prices. Please try again later.";

/// User-visible message for a (mock) executed swap.
pub const SWAP_EXECUTED_MESSAGE: &str = "Swap executed! (This is a mock implementation)";

// ─── SwapSide ────────────────────────────────────────────────────────────────

/// One editable field: a token and the amount typed (or derived) for it.
///
/// `amount` is kept as text so the field shows exactly what the user typed;
/// an empty string means an empty field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapSide {
    pub symbol: TokenSymbol,
    pub amount: String,
}

impl SwapSide {
    pub fn new(symbol: impl Into<TokenSymbol>, amount: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            amount: amount.into(),
        }
    }

    /// A side with a token but no amount.
    pub fn empty(symbol: impl Into<TokenSymbol>) -> Self {
        Self::new(symbol, String::new())
    }

    pub fn has_amount(&self) -> bool {
        !self.amount.is_empty()
    }
}

// ─── Action ──────────────────────────────────────────────────────────────────

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The price fetch began.
    FetchStarted,
    /// The price fetch succeeded; the book replaces any previous one.
    PricesLoaded(PriceBook),
    /// The price fetch failed; carries the underlying cause for logging.
    PricesFailed(String),
    /// The user typed into one side.
    EditAmount(Side, String),
    /// The user opened the token selector for one side.
    OpenSelector(Side),
    /// The user dismissed the token selector.
    CloseSelector,
    /// The user picked a token in the open selector.
    SelectToken(TokenSymbol),
    /// The user flipped the two sides.
    SwapSides,
    /// The user pressed the swap button.
    ExecuteSwap,
}

// ─── Signal ──────────────────────────────────────────────────────────────────

/// Outcome of a transition that the host should surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    SwapExecuted(SwapReceipt),
    FetchFailed { message: String, cause: String },
}

/// What a mock swap "executed". Nothing is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapReceipt {
    pub from: SwapSide,
    pub to: SwapSide,
    pub message: String,
}

// ─── TokenListing ────────────────────────────────────────────────────────────

/// One row of the token selector list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenListing {
    pub symbol: TokenSymbol,
    pub name: String,
    pub icon_url: String,
    /// `"$1645.93"`, or `"—"` when the price is unknown.
    pub price: String,
}
