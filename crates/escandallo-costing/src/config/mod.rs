// ABOUTME: Costing engine configuration with defaults, env overrides and validation
// ABOUTME: Presentation precisions and fallback labels shared by the service layer and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Costing Configuration
//!
//! The computation itself has no tunables: the unit table and the zero
//! fallbacks are fixed. What can be configured is how results are presented
//! and which labels are used when data is missing.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use escandallo_core::constants::{labels, precision};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Upper bound for any configured number of decimals
const MAX_DECIMALS: u32 = 6;

/// Global configuration singleton
static COSTING_CONFIG: OnceLock<CostingConfig> = OnceLock::new();

/// Costing engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingConfig {
    /// Decimal places for currency amounts
    pub currency_decimals: u32,
    /// Decimal places for ingredient quantities
    pub quantity_decimals: u32,
    /// Symbol appended to amounts
    pub currency_symbol: String,
    /// Production-order category for ingredients without a product
    pub fallback_category: String,
    /// Elaboration name used when migrating legacy recipes
    pub default_elaboration_name: String,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            currency_decimals: precision::CURRENCY_DECIMALS,
            quantity_decimals: precision::QUANTITY_DECIMALS,
            currency_symbol: precision::CURRENCY_SYMBOL.to_owned(),
            fallback_category: labels::FALLBACK_ORDER_CATEGORY.to_owned(),
            default_elaboration_name: labels::DEFAULT_ELABORATION_NAME.to_owned(),
        }
    }
}

impl CostingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COSTING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load costing config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a precision exceeds the supported range or a label is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_decimals > MAX_DECIMALS {
            return Err(ConfigError::ValueOutOfRange(
                "currency_decimals must be <= 6",
            ));
        }
        if self.quantity_decimals > MAX_DECIMALS {
            return Err(ConfigError::ValueOutOfRange(
                "quantity_decimals must be <= 6",
            ));
        }
        if self.fallback_category.trim().is_empty() {
            return Err(ConfigError::MissingField("fallback_category"));
        }
        if self.default_elaboration_name.trim().is_empty() {
            return Err(ConfigError::MissingField("default_elaboration_name"));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "ESCANDALLO_CURRENCY_DECIMALS",
            &mut self.currency_decimals,
        )?;
        Self::apply_env_var(
            "ESCANDALLO_QUANTITY_DECIMALS",
            &mut self.quantity_decimals,
        )?;
        Self::apply_env_var("ESCANDALLO_CURRENCY_SYMBOL", &mut self.currency_symbol)?;
        Self::apply_env_var(
            "ESCANDALLO_FALLBACK_CATEGORY",
            &mut self.fallback_category,
        )?;
        Ok(self)
    }
}
