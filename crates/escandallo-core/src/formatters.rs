// ABOUTME: Presentation helpers for currency amounts and ingredient quantities
// ABOUTME: Rounding lives here so the costing engine can return raw floating-point values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Currency renders with fixed decimals (`4.00`), quantities render with at
//! most N decimals and no trailing zeros (`250`, `0.125`, `1.5`).

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Fixed-decimal amount without symbol
#[must_use]
pub fn format_currency(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    format!("{value:.precision$}")
}

/// Fixed-decimal amount followed by the currency symbol
#[must_use]
pub fn format_price(value: f64, decimals: u32, symbol: &str) -> String {
    format!("{} {symbol}", format_currency(value, decimals))
}

/// Quantity rounded to `decimals` places, integers without a decimal point
#[must_use]
pub fn format_quantity(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    if rounded.abs() < f64::EPSILON {
        return "0".to_owned();
    }
    format!("{rounded}")
}
