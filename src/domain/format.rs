//! Display formatting for provider values.
//!
//! Amounts follow the en-US USD currency style and dates the en-US short date
//! style (`M/D/YYYY`), both matching what the admin UI has always shown.

use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;

/// Formats an amount in minor units (cents) as en-US USD, e.g. `1050` -> `$10.50`.
pub fn format_currency(amount_minor: i64) -> String {
    let major = Decimal::new(amount_minor, 2);
    let digits = major.abs().round_dp(2).to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if major.is_sign_negative() && !major.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{fraction:0<2}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an epoch-seconds timestamp as a short date in the local timezone.
pub fn format_date(created_epoch_seconds: i64) -> String {
    format_date_in(created_epoch_seconds, &Local)
}

/// Formats an epoch-seconds timestamp as a short date in the given timezone.
///
/// Timestamps outside the representable range fall back to the raw value.
pub fn format_date_in<Tz: TimeZone>(created_epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match created_epoch_seconds
        .checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
    {
        Some(utc) => utc.with_timezone(tz).format("%-m/%-d/%Y").to_string(),
        None => created_epoch_seconds.to_string(),
    }
}
