//! Currency and date rendering.
//!
//! Amounts and dates on a transaction are rendered as display strings using
//! an explicit [`FormatConfig`].
//!
//! | Locale  | Amount         | Date                     |
//! |---------|----------------|--------------------------|
//! | `pt-BR` | `R$ 1.234,56`  | `10 de novembro de 2020` |
//! | `en-US` | `$1,234.56`    | `November 10, 2020`      |
//!
//! The space after the symbol in `pt-BR` is a non-breaking space (U+00A0).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{FormatConfig, Locale};

/// Formats an amount as currency.
///
/// The amount is rounded to two decimal places, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::format_currency;
/// use rental_engine::config::{Currency, FormatConfig, Locale};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(2444, 1); // 244.4
/// assert_eq!(format_currency(amount, &FormatConfig::default()), "R$\u{a0}244,40");
///
/// let us = FormatConfig::new(Locale::EnUs, Currency::Usd);
/// assert_eq!(format_currency(amount, &us), "$244.40");
/// ```
pub fn format_currency(amount: Decimal, format: &FormatConfig) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let locale = format.locale;
    let number = format!(
        "{}{}{}",
        group_thousands(integer, locale.group_separator()),
        locale.decimal_separator(),
        fraction
    );

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = format.currency.symbol();

    match locale {
        Locale::PtBr => format!("{sign}{symbol}\u{a0}{number}"),
        Locale::EnUs => format!("{sign}{symbol}{number}"),
    }
}

/// Formats a date in the locale's long form.
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::format_date;
/// use rental_engine::config::FormatConfig;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2020, 11, 10).unwrap();
/// assert_eq!(format_date(date, &FormatConfig::default()), "10 de novembro de 2020");
/// ```
pub fn format_date(date: NaiveDate, format: &FormatConfig) -> String {
    let (pattern, locale) = match format.locale {
        Locale::PtBr => ("%-d de %B de %Y", chrono::Locale::pt_BR),
        Locale::EnUs => ("%B %-d, %Y", chrono::Locale::en_US),
    };

    date.and_time(NaiveTime::default())
        .and_utc()
        .format_localized(pattern, locale)
        .to_string()
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
