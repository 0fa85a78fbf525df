//! Command handlers. Each returns the text to print.

use anyhow::{Context, Result, bail};
use bizcode_common::api::schema::{ErrorCodeEntry, export_catalog};
use bizcode_common::errors::{BizError, ErrorDefinition};
use bizcode_common::registry::Registry;
use std::path::Path;
use tracing::info;

pub fn check(registry: &Registry) -> String {
    format!(
        "OK: {} business errors, all codes unique",
        registry.len()
    )
}

/// Resolves a selector as a business code if numeric, otherwise as a name.
pub fn resolve(registry: &Registry, selector: &str) -> Option<BizError> {
    let selector = selector.trim();
    match selector.parse::<u32>() {
        Ok(code) => registry.by_code(code),
        Err(_) => BizError::from_name(selector),
    }
}

pub fn show(registry: &Registry, selector: &str, json: bool) -> Result<String> {
    let Some(error) = resolve(registry, selector) else {
        bail!("No business error matches '{selector}'");
    };

    if json {
        let entry = ErrorCodeEntry::from(error);
        return serde_json::to_string_pretty(&entry).context("Failed to serialize entry");
    }
    Ok(format_row(&registry.lookup(error)))
}

pub fn list(registry: &Registry, verbose_only: bool) -> String {
    let mut out = format!("{:<6} {:<6} {:<8} NAME", "CODE", "HTTP", "LOG");
    for def in registry
        .definitions()
        .iter()
        .filter(|def| !verbose_only || def.is_verbose())
    {
        out.push('\n');
        out.push_str(&format_row(def));
    }
    out
}

pub fn export(output_dir: &Path) -> Result<String> {
    let summary = export_catalog(output_dir)
        .with_context(|| format!("Failed to export catalog to {}", output_dir.display()))?;
    info!(
        files = summary.files_generated,
        "Exported catalog to {}", summary.output_dir
    );
    Ok(summary.files.join("\n"))
}

fn format_row(def: &ErrorDefinition) -> String {
    format!(
        "{:<6} {:<6} {:<8} {}",
        def.biz_code, def.http_status, def.log_type, def.name
    )
}
