// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Audit command for escandallo-cli
// ABOUTME: Lists ingredients whose cost silently degrades to zero or to an assumed unit factor

use anyhow::Result;
use escandallo::services::KitchenService;
use tracing::info;

use crate::helpers::display;

/// Print data-quality findings for every recipe
pub fn run(kitchen: &KitchenService, json: bool) -> Result<()> {
    let audits = kitchen.audit();
    info!(
        recipes = kitchen.recipes().len(),
        with_findings = audits.len(),
        "Audit complete"
    );
    if json {
        return display::print_json(&audits);
    }
    display::display_audit(&audits);
    Ok(())
}
