//! Token presentation data — display names, icon URLs, placeholder icons.

use crate::network::TOKEN_ICON_BASE_URL;
use crate::shared::TokenSymbol;
use serde::{Deserialize, Serialize};

/// Icon size used by the side selectors, in pixels.
pub const SELECTOR_ICON_SIZE: u32 = 24;

/// Icon size used by the token list, in pixels.
pub const LIST_ICON_SIZE: u32 = 32;

/// A selectable token.
///
/// The price feed carries no display names, so `name` is the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: TokenSymbol,
    pub name: String,
}

impl Token {
    pub fn icon_url(&self) -> String {
        icon_url(&self.symbol)
    }
}

impl From<TokenSymbol> for Token {
    fn from(symbol: TokenSymbol) -> Self {
        Self {
            name: symbol.as_str().to_string(),
            symbol,
        }
    }
}

/// Icon location for a token symbol.
pub fn icon_url(symbol: &TokenSymbol) -> String {
    format!(
        "{}/{}.svg",
        TOKEN_ICON_BASE_URL,
        urlencoding::encode(symbol.as_str())
    )
}

/// Grey-square SVG data URI shown when a token icon fails to load.
pub fn placeholder_icon(size: u32) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='{s}' height='{s}'%3E%3Crect width='{s}' height='{s}' fill='%23ccc'/%3E%3C/svg%3E",
        s = size
    )
}
