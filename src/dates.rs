//! Localised formatting of server timestamps for transaction rows.

use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// Russian month names in the genitive case, indexed by month number - 1.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const SERVER_TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format a server timestamp like `2019-03-10 03:20:41` as
/// `10 марта 2019 г. в 03:20`.
///
/// The day is not zero-padded, the hour and minute are, and the clock is
/// 24-hour.
///
/// # Errors
/// Returns [Error::InvalidDateFormat] if `timestamp` does not match the
/// `YYYY-MM-DD HH:MM:SS` layout.
pub fn format_date(timestamp: &str) -> Result<String, Error> {
    let parsed = PrimitiveDateTime::parse(timestamp, SERVER_TIMESTAMP_FORMAT)
        .map_err(|error| Error::InvalidDateFormat(error.to_string(), timestamp.to_owned()))?;
    let month = MONTHS_GENITIVE[u8::from(parsed.month()) as usize - 1];

    Ok(format!(
        "{} {} {} г. в {:02}:{:02}",
        parsed.day(),
        month,
        parsed.year(),
        parsed.hour(),
        parsed.minute()
    ))
}

/// Like [format_date], but falls back to the raw timestamp when it cannot
/// be parsed, so a malformed server value never blocks rendering.
pub(crate) fn format_date_or_raw(timestamp: &str) -> String {
    format_date(timestamp).unwrap_or_else(|_| timestamp.to_owned())
}
