//! Typed readings of the API's text fields
//!
//! Records keep every value exactly as the API sent it. These helpers back
//! the optional accessors on the records; each returns `None` for an empty
//! or malformed value instead of guessing.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Parse an RFC 2822 timestamp, e.g. `Tue, 10 Aug 2010 08:02:17 +0000`
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc2822(value).ok()
}

/// Parse a price or usage amount, e.g. `-0.03000`
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value).ok()
}

/// Parse a count, size or duration in whole units
pub fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Parse a `true` / `false` flag, case-insensitively
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Deserialize an integer that arrives as text, reading empty text as zero
///
/// `<Code/>` and `end=""` both mean 0 on the wire.
pub(crate) fn number_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default + TryFrom<i64>,
    <T as FromStr>::Err: fmt::Display,
{
    struct NumberOrZeroVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for NumberOrZeroVisitor<T>
    where
        T: FromStr + Default + TryFrom<i64>,
        <T as FromStr>::Err: fmt::Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a string containing an integer, or empty text")
        }

        fn visit_i64<E>(self, value: i64) -> Result<T, E>
        where
            E: de::Error,
        {
            T::try_from(value).map_err(|_| E::custom(format!("integer {value} out of range")))
        }

        fn visit_u64<E>(self, value: u64) -> Result<T, E>
        where
            E: de::Error,
        {
            i64::try_from(value)
                .ok()
                .and_then(|value| T::try_from(value).ok())
                .ok_or_else(|| E::custom(format!("integer {value} out of range")))
        }

        fn visit_str<E>(self, value: &str) -> Result<T, E>
        where
            E: de::Error,
        {
            let value = value.trim();
            if value.is_empty() {
                return Ok(T::default());
            }
            value.parse::<T>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_str(NumberOrZeroVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rust_decimal_macros::dec;
    use serde::de::value::{Error as ValueError, StrDeserializer, U64Deserializer};

    #[test]
    fn test_parse_date() {
        let date = parse_date("Tue, 10 Aug 2010 08:02:17 +0000").unwrap();
        assert_eq!(date.year(), 2010);
        assert_eq!(date.month(), 8);
        assert_eq!(date.hour(), 8);

        assert!(parse_date("").is_none());
        assert!(parse_date("2010-08-10").is_none());
    }

    #[test]
    fn test_parse_decimal_keeps_scale() {
        assert_eq!(parse_decimal("-0.03000"), Some(dec!(-0.03000)));
        assert_eq!(parse_decimal("-0.03000").unwrap().scale(), 5);
        assert!(parse_decimal("").is_none());
        assert!(parse_decimal("free").is_none());
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("15"), Some(15));
        assert_eq!(parse_u32(" 7 "), Some(7));
        assert!(parse_u32("-1").is_none());
        assert!(parse_u32("").is_none());
    }

    fn from_text<T>(text: &str) -> Result<T, ValueError>
    where
        T: FromStr + Default + TryFrom<i64>,
        <T as FromStr>::Err: fmt::Display,
    {
        number_or_zero(StrDeserializer::<ValueError>::new(text))
    }

    #[test]
    fn test_number_or_zero() {
        assert_eq!(from_text::<i32>("20404").unwrap(), 20404);
        assert_eq!(from_text::<i32>("").unwrap(), 0);
        assert_eq!(from_text::<u32>("  ").unwrap(), 0);
        assert_eq!(from_text::<u32>(" 3 ").unwrap(), 3);
        assert!(from_text::<u32>("-1").is_err());
        assert!(from_text::<i32>("abc").is_err());

        let n: u32 = number_or_zero(U64Deserializer::<ValueError>::new(7)).unwrap();
        assert_eq!(n, 7);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert!(parse_flag("yes").is_none());
    }
}
