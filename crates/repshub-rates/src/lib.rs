//! ARS/USD dollar quotes from the `DolarSi` public API.

pub mod client;
pub mod error;
pub mod types;

pub use client::RatesClient;
pub use error::RatesError;
pub use types::{parse_locale_decimal, Casa, CasaEntry, DollarQuotes};
