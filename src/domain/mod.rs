//! Domain modules organized as vertical slices.
//!
//! Sub-modules contain, where they apply:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching the price feed
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod exchange;
pub mod price;
pub mod swap;
pub mod token;
