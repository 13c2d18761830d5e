//! End-to-end form flows: feed JSON → price book → user actions → derived amounts.

use currency_swap::domain::exchange;
use currency_swap::prelude::*;
use rust_decimal::Decimal;

const FEED: &str = r#"[
    {"currency":"ETH","price":100,"date":"2023-08-01T00:00:00.000Z"},
    {"currency":"ETH","price":200,"date":"2023-08-02T00:00:00.000Z"},
    {"currency":"SWTH","price":1,"date":"2023-08-01T00:00:00.000Z"}
]"#;

fn sym(s: &str) -> TokenSymbol {
    TokenSymbol::from(s)
}

fn loaded_form() -> SwapState {
    let mut form = SwapState::new();
    form.apply(Action::PricesLoaded(PriceBook::from_json(FEED).unwrap()));
    form
}

#[test]
fn feed_normalizes_to_latest_prices() {
    let book = PriceBook::from_json(FEED).unwrap();
    assert_eq!(book.table.len(), 2);
    assert_eq!(book.price(&sym("ETH")), Some(Decimal::from(200)));
    assert_eq!(book.price(&sym("SWTH")), Some(Decimal::ONE));
    assert_eq!(book.tokens.as_slice(), &[sym("ETH"), sym("SWTH")]);
}

#[test]
fn rate_and_convert_over_loaded_table() {
    let book = PriceBook::from_json(FEED).unwrap();
    assert_eq!(rate(&book.table, &sym("ETH"), &sym("SWTH")), "200.000000");
    assert_eq!(convert(&book.table, "10", &sym("SWTH"), &sym("ETH")), "0.050000");
    assert_eq!(rate(&book.table, &sym("ETH"), &sym("BTC")), UNAVAILABLE);
    assert_eq!(convert(&book.table, "10", &sym("BTC"), &sym("ETH")), UNAVAILABLE);
}

#[test]
fn edit_swap_edit_stays_consistent_with_direct_computation() {
    let mut form = loaded_form();

    form.apply(Action::EditAmount(Side::From, "5".into()));
    assert_eq!(form.to().amount, "1000.000000");

    form.apply(Action::SwapSides);
    assert_eq!(form.from(), &SwapSide::new("SWTH", "1000.000000"));
    assert_eq!(form.to(), &SwapSide::new("ETH", "5"));

    form.apply(Action::EditAmount(Side::From, "10".into()));
    let table = form.table().unwrap();
    let expected = convert(table, "10", &form.from().symbol, &form.to().symbol);
    assert_eq!(form.to().amount, expected);
    assert_eq!(form.to().amount, "0.050000");
    assert_eq!(form.rate_line(), "1 SWTH = 0.005000 ETH");
}

#[test]
fn destination_edit_then_swap_then_destination_edit() {
    let mut form = loaded_form();

    form.apply(Action::EditAmount(Side::To, "50".into()));
    assert_eq!(form.from().amount, "0.250000");

    form.apply(Action::SwapSides);
    form.apply(Action::EditAmount(Side::To, "3".into()));
    let table = form.table().unwrap();
    let expected = convert(table, "3", &form.to().symbol, &form.from().symbol);
    assert_eq!(form.from().amount, expected);
    assert_eq!(form.from().amount, "600.000000");
}

#[test]
fn swap_sides_twice_is_identity() {
    let mut form = loaded_form();
    form.apply(Action::EditAmount(Side::From, "5".into()));
    let before = form.clone();

    form.apply(Action::SwapSides);
    form.apply(Action::SwapSides);

    assert_eq!(form, before);
}

#[test]
fn reducer_drives_a_whole_session() {
    let actions = vec![
        Action::FetchStarted,
        Action::PricesLoaded(PriceBook::from_json(FEED).unwrap()),
        Action::OpenSelector(Side::From),
        Action::SelectToken(sym("SWTH")),
        Action::OpenSelector(Side::To),
        Action::SelectToken(sym("ETH")),
        Action::EditAmount(Side::From, "400".into()),
        Action::ExecuteSwap,
    ];

    let mut state = SwapState::new();
    let mut signals = Vec::new();
    for action in actions {
        let (next, signal) = reduce(&state, action);
        state = next;
        signals.extend(signal);
    }

    assert_eq!(state.to().amount, "2.000000");
    assert_eq!(state.from_usd(), "400.00");
    assert_eq!(signals.len(), 1);
    match &signals[0] {
        Signal::SwapExecuted(receipt) => {
            assert_eq!(receipt.from, SwapSide::new("SWTH", "400"));
            assert_eq!(receipt.to, SwapSide::new("ETH", "2.000000"));
        }
        other => panic!("unexpected signal: {other:?}"),
    }
}

#[test]
fn token_list_rows_for_selector() {
    let form = loaded_form();
    let rows = form.token_list();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "ETH");
    assert_eq!(rows[0].price, "$200.00");
    assert_eq!(rows[1].icon_url, icon_url(&sym("SWTH")));
    assert!(placeholder_icon(32).contains("fill='%23ccc'"));
    assert_eq!(exchange::price_display(form.table().unwrap(), &sym("BTC")), "—");
}

#[test]
fn state_serializes_for_host_rendering() {
    let mut form = loaded_form();
    form.apply(Action::EditAmount(Side::From, "1".into()));
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["from"]["symbol"], "ETH");
    assert_eq!(json["to"]["amount"], "200.000000");
    assert_eq!(json["loading"], false);
}
