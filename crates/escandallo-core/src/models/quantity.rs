// ABOUTME: Parse-tolerant decimal input for quantities, yields and prices
// ABOUTME: Accepts numbers or free text with comma separators and normalizes to f64 at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Kitchen staff type quantities as `"0,5"`, `"1.5"`, `" 12 € "` or leave
//! them empty. Everything is normalized here so the costing code only ever
//! sees a plain `f64`.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Parse a free-text decimal the way the kitchen forms do
///
/// Whitespace and the euro sign are removed, the first comma becomes the
/// decimal point and the longest numeric prefix is read (`"12abc"` is 12).
/// Empty, unparsable or non-finite input yields 0. The sign is kept.
#[must_use]
pub fn parse_decimal(text: &str) -> f64 {
    let sanitized: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€')
        .collect();
    let normalized = sanitized.replacen(',', ".", 1);

    numeric_prefix(&normalized)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of `text` that reads as a decimal number
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text.get(..end)
}

/// Non-negative decimal quantity normalized from loose input
///
/// Deserializes from a JSON number, a string (comma or dot decimal
/// separator) or `null`. Negative, non-finite and unparsable values become 0,
/// and so do arrays and objects.
/// Always serializes as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    /// Zero quantity
    pub const ZERO: Self = Self(0.0);

    /// Build a quantity from a number, clamping invalid values to zero
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Build a quantity from free text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(parse_decimal(text))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the quantity is strictly positive
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a decimal string or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Quantity, E> {
        Ok(Quantity::new(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Quantity, E> {
        Ok(Quantity::new(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Quantity, E> {
        Ok(Quantity::new(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Quantity, E> {
        Ok(Quantity::parse(value))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Quantity, E> {
        Ok(Quantity::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Quantity, E> {
        Ok(Quantity::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Quantity, E> {
        Ok(Quantity::ZERO)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Quantity, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Quantity::ZERO)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Quantity, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Quantity::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Quantity, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

/// Serde adapter for optional prices
///
/// `null`, missing and empty strings are "no price"; numbers and decimal
/// strings are parsed tolerantly. Negative or non-finite prices count as
/// unknown so they never reduce a recipe's cost.
pub mod price {
    use super::parse_decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional, parse-tolerant price
    ///
    /// # Errors
    ///
    /// Never fails on content; only propagates errors from the underlying deserializer.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let parsed = match raw {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) if !text.trim().is_empty() => Some(parse_decimal(&text)),
            _ => None,
        };
        Ok(parsed.filter(|value| value.is_finite() && *value >= 0.0))
    }
}
