use crate::formatter::errors::FormatError;

const STORED_SEPARATOR: char = '-';
const DISPLAY_SEPARATOR: char = '/';

/// Reorders a stored `YYYY-MM-DD` date into the `DD/MM/YYYY` display form.
///
/// Only the segments are moved around; no calendar validation happens, so
/// `"2024-02-31"` happily becomes `"31/02/2024"`.
pub fn parse_display_date(raw_date: &str) -> Result<String, FormatError> {
    let raw_date = raw_date.trim();
    let segments: Vec<&str> = raw_date.split(STORED_SEPARATOR).collect();

    let [year, month, day] = segments.as_slice() else {
        return Err(FormatError::InvalidDate(raw_date.to_string()));
    };

    if year.is_empty() || month.is_empty() || day.is_empty() {
        return Err(FormatError::InvalidDate(raw_date.to_string()));
    }

    Ok(format!("{day}{DISPLAY_SEPARATOR}{month}{DISPLAY_SEPARATOR}{year}"))
}
