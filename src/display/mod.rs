//! Display helpers for estimate results.
//!
//! The engine never rounds or formats; these helpers do so at the edge, for
//! the HTTP responses and plain-text result cards.

mod currency;
mod result_card;

pub use currency::format_currency;
pub use result_card::{CardLine, FormattedResult, ResultCard};
