// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default labels, precisions and unit vocabulary for the costing engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Constants module
//!
//! Constants are grouped by the part of the kitchen workflow that uses them.

/// Measurement unit spellings recognised by the conversion table
pub mod units;

/// Labels used when data is missing or has to be synthesised
pub mod labels {
    /// Name given to the single elaboration created when migrating legacy recipes
    pub const DEFAULT_ELABORATION_NAME: &str = "Elaboración Principal";
    /// Name given to recipes restored without one
    pub const UNNAMED_RECIPE: &str = "Sin Nombre";
    /// Category used for production-order lines whose product is unknown
    pub const FALLBACK_ORDER_CATEGORY: &str = "Varios / Otros";
    /// Category assigned to new recipes
    pub const DEFAULT_RECIPE_CATEGORY: &str = "General";
    /// Yield unit assigned to new recipes
    pub const DEFAULT_YIELD_UNIT: &str = "raciones";
    /// Service style assigned when a restored recipe has none
    pub const DEFAULT_SERVICE_TYPE: &str = "Emplatado";
}

/// Presentation precisions
pub mod precision {
    /// Decimal places for currency amounts
    pub const CURRENCY_DECIMALS: u32 = 2;
    /// Decimal places for scaled ingredient quantities
    pub const QUANTITY_DECIMALS: u32 = 3;
    /// Currency symbol appended to amounts
    pub const CURRENCY_SYMBOL: &str = "€";
}

/// Backup document format
pub mod backup {
    /// Format version written by full backups
    pub const FORMAT_VERSION: u32 = 2;
}

/// Service identification used in logs
pub mod service_names {
    /// Command-line front end
    pub const ESCANDALLO_CLI: &str = "escandallo-cli";
}
