mod currency;
mod date;
mod errors;

pub use currency::{format_currency, format_currency_text};
pub use date::parse_display_date;
pub use errors::FormatError;
