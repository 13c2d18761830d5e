//! Swap form state container — app-owned, SDK-provided transitions.

use super::{
    Action, Signal, SwapReceipt, SwapSide, TokenListing, FETCH_FAILED_MESSAGE,
    SWAP_EXECUTED_MESSAGE,
};
use crate::domain::exchange;
use crate::domain::price::{PriceBook, PriceTable};
use crate::domain::token::{self, Token};
use crate::shared::{Side, TokenSymbol};
use serde::Serialize;

/// Whole state of one swap form session.
///
/// The app owns instances of this type (e.g. inside a UI signal or store) and
/// mutates it only through [`SwapState::apply`] or the named transitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapState {
    prices: Option<PriceBook>,
    from: SwapSide,
    to: SwapSide,
    loading: bool,
    error: Option<String>,
    selector_open: bool,
    active_side: Option<Side>,
}

impl Default for SwapState {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapState {
    /// Fresh state waiting for prices. Both sides get the first two fetched tokens.
    pub fn new() -> Self {
        Self {
            prices: None,
            from: SwapSide::default(),
            to: SwapSide::default(),
            loading: true,
            error: None,
            selector_open: false,
            active_side: None,
        }
    }

    /// Fresh state with preset tokens that a later price load keeps.
    pub fn with_symbols(from: impl Into<TokenSymbol>, to: impl Into<TokenSymbol>) -> Self {
        Self {
            from: SwapSide::empty(from),
            to: SwapSide::empty(to),
            ..Self::new()
        }
    }

    /// Apply one action. Returns a signal when the host has something to show.
    pub fn apply(&mut self, action: Action) -> Option<Signal> {
        match action {
            Action::FetchStarted => {
                self.fetch_started();
                None
            }
            Action::PricesLoaded(book) => {
                self.load_prices(book);
                None
            }
            Action::PricesFailed(cause) => Some(self.fail_prices(cause)),
            Action::EditAmount(side, value) => {
                self.edit_amount(side, value);
                None
            }
            Action::OpenSelector(side) => {
                self.open_selector(side);
                None
            }
            Action::CloseSelector => {
                self.close_selector();
                None
            }
            Action::SelectToken(symbol) => {
                let side = self.active_side.unwrap_or(Side::To);
                self.select_token(side, symbol);
                None
            }
            Action::SwapSides => {
                self.swap_sides();
                None
            }
            Action::ExecuteSwap => self.execute_swap(),
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────

    pub fn fetch_started(&mut self) {
        self.loading = true;
    }

    /// Replace the price book wholesale and fill in unassigned sides.
    ///
    /// A successful load also clears the error left by an earlier failed fetch.
    pub fn load_prices(&mut self, book: PriceBook) {
        if self.from.symbol.is_empty() {
            self.from.symbol = book.tokens.get(0).cloned().unwrap_or_default();
        }
        if self.to.symbol.is_empty() {
            self.to.symbol = book.tokens.get(1).cloned().unwrap_or_default();
        }
        self.prices = Some(book);
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Any previously loaded book is kept untouched.
    pub fn fail_prices(&mut self, cause: impl Into<String>) -> Signal {
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.loading = false;
        Signal::FetchFailed {
            message: FETCH_FAILED_MESSAGE.to_string(),
            cause: cause.into(),
        }
    }

    /// Set the typed side and, when both prices are known, derive the other one.
    pub fn edit_amount(&mut self, side: Side, value: impl Into<String>) {
        let value = value.into();
        let derived = self.prices.as_ref().and_then(|book| {
            let (edited, other) = match side {
                Side::From => (&self.from.symbol, &self.to.symbol),
                Side::To => (&self.to.symbol, &self.from.symbol),
            };
            book.table
                .pair(edited, other)
                .map(|_| exchange::convert(&book.table, &value, edited, other))
        });

        self.side_mut(side).amount = value;
        if let Some(amount) = derived {
            self.side_mut(side.opposite()).amount = amount;
        }
    }

    /// Change one side's token. Amounts are left as they are.
    pub fn select_token(&mut self, side: Side, symbol: impl Into<TokenSymbol>) {
        self.side_mut(side).symbol = symbol.into();
        self.selector_open = false;
    }

    pub fn open_selector(&mut self, side: Side) {
        self.active_side = Some(side);
        self.selector_open = true;
    }

    pub fn close_selector(&mut self) {
        self.selector_open = false;
    }

    /// Exchange the two sides whole; nothing is recomputed.
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Mock execution: signals success when the swap button is enabled.
    pub fn execute_swap(&mut self) -> Option<Signal> {
        if !self.can_execute() {
            return None;
        }
        tracing::debug!(
            from = %self.from.symbol,
            to = %self.to.symbol,
            amount = %self.from.amount,
            "Mock swap executed"
        );
        Some(Signal::SwapExecuted(SwapReceipt {
            from: self.from.clone(),
            to: self.to.clone(),
            message: SWAP_EXECUTED_MESSAGE.to_string(),
        }))
    }

    fn side_mut(&mut self, side: Side) -> &mut SwapSide {
        match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn side(&self, side: Side) -> &SwapSide {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }

    pub fn from(&self) -> &SwapSide {
        &self.from
    }

    pub fn to(&self) -> &SwapSide {
        &self.to
    }

    pub fn prices(&self) -> Option<&PriceBook> {
        self.prices.as_ref()
    }

    pub fn table(&self) -> Option<&PriceTable> {
        self.prices.as_ref().map(|book| &book.table)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_selector_open(&self) -> bool {
        self.selector_open
    }

    pub fn active_side(&self) -> Option<Side> {
        self.active_side
    }

    // ── Derived views ────────────────────────────────────────────────────

    /// Units of the destination token per source token, 6 decimals.
    pub fn exchange_rate(&self) -> String {
        match self.table() {
            Some(table) => exchange::rate(table, &self.from.symbol, &self.to.symbol),
            None => exchange::UNAVAILABLE.to_string(),
        }
    }

    /// E.g. `"1 ETH = 200.000000 SWTH"`.
    pub fn rate_line(&self) -> String {
        format!(
            "1 {} = {} {}",
            self.from.symbol,
            self.exchange_rate(),
            self.to.symbol
        )
    }

    /// USD value of one side's amount, 2 decimals.
    pub fn usd_value(&self, side: Side) -> String {
        let current = self.side(side);
        match self.table() {
            Some(table) => exchange::usd_value(table, &current.amount, &current.symbol),
            None => exchange::USD_UNAVAILABLE.to_string(),
        }
    }

    pub fn from_usd(&self) -> String {
        self.usd_value(Side::From)
    }

    pub fn to_usd(&self) -> String {
        self.usd_value(Side::To)
    }

    /// The swap button is enabled once a source amount is typed and prices are in.
    pub fn can_execute(&self) -> bool {
        self.from.has_amount() && !self.loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Loading..."
        } else {
            "Swap"
        }
    }

    /// Selectable tokens in feed order.
    pub fn tokens(&self) -> Vec<Token> {
        self.prices
            .iter()
            .flat_map(|book| book.tokens.iter().cloned())
            .map(Token::from)
            .collect()
    }

    /// Rows for the token selector.
    pub fn token_list(&self) -> Vec<TokenListing> {
        let Some(book) = self.prices.as_ref() else {
            return Vec::new();
        };
        book.tokens
            .iter()
            .map(|symbol| TokenListing {
                symbol: symbol.clone(),
                name: symbol.as_str().to_string(),
                icon_url: token::icon_url(symbol),
                price: exchange::price_display(&book.table, symbol),
            })
            .collect()
    }
}

/// Pure form of [`SwapState::apply`]: returns the next state instead of mutating.
pub fn reduce(state: &SwapState, action: Action) -> (SwapState, Option<Signal>) {
    let mut next = state.clone();
    let signal = next.apply(action);
    (next, signal)
}
