//! Formatting utilities for human-readable display.

pub mod decimal;
