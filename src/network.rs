//! Network URL constants.

/// Default price feed: a JSON array of `{currency, price, date}` records.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Base URL of the token icon set; icons live at `{base}/{symbol}.svg`.
pub const TOKEN_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";
