//! Machine-readable exports of the business error catalog.
//!
//! # Generated Files
//!
//! - `error-codes.json` - code ranges per area, then every variant with
//!   status, code and log type
//! - `error-response.schema.json` - JSON Schema of the error response body

use crate::api::ErrorResponse;
use crate::errors::{BizError, ErrorLogType};
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format version of `error-codes.json`.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0";

/// Generate JSON Schema for the error response body.
#[must_use]
pub fn generate_error_response_schema() -> RootSchema {
    schema_for!(ErrorResponse)
}

/// Machine-readable error code entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCodeEntry {
    /// Symbolic identifier.
    pub name: String,
    /// HTTP status sent to clients.
    pub http_status: u16,
    /// Unique business code.
    pub biz_code: u32,
    /// Logging verbosity.
    pub log_type: ErrorLogType,
}

impl From<BizError> for ErrorCodeEntry {
    fn from(error: BizError) -> Self {
        let def = error.definition();
        Self {
            name: def.name.to_string(),
            http_status: def.http_status,
            biz_code: def.biz_code,
            log_type: def.log_type,
        }
    }
}

/// Block of business codes owned by one feature area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRangeEntry {
    /// First code of the block.
    pub start: u32,
    /// Last code of the block, inclusive.
    pub end: u32,
    pub area: String,
    pub description: String,
}

/// Code ranges by area, mirroring the table in [`crate::errors::catalog`].
const CODE_RANGES: &[(u32, u32, &str, &str)] = &[
    (5000, 5099, "General", "Cross-cutting and infrastructure errors"),
    (5100, 5149, "Organization", "Organization membership and limits"),
    (5150, 5199, "Group", "User groups"),
    (5200, 5299, "Invitation", "Invitation links and codes"),
    (5300, 5399, "Application", "Applications and history snapshots"),
    (5500, 5599, "Data Source", "Data source configuration and connections"),
    (5600, 5699, "Login", "Sign-in, sessions and auth providers"),
    (5700, 5799, "Asset", "Uploaded assets"),
    (5800, 5899, "Plugin", "Data source plugin execution"),
    (5900, 5999, "Business", "Release state"),
    (6000, 6099, "Template", "Application templates"),
    (6100, 6199, "Query", "Query execution and library queries"),
    (6200, 6250, "User", "User status"),
    (6251, 6300, "License", "Edition and deployment licensing"),
    (6301, 6350, "Folder", "Folders"),
    (6351, 6400, "Material", "Materials"),
];

/// Returns the documented code ranges in ascending order.
#[must_use]
pub fn code_ranges() -> Vec<CodeRangeEntry> {
    CODE_RANGES
        .iter()
        .map(|&(start, end, area, description)| CodeRangeEntry {
            start,
            end,
            area: area.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Complete error catalog for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCatalogDocument {
    /// Schema version for catalog format.
    pub schema_version: String,
    /// Code blocks per feature area. Informational, never enforced.
    pub ranges: Vec<CodeRangeEntry>,
    /// Number of entries in `errors`.
    pub total: usize,
    /// All variants in declaration order.
    pub errors: Vec<ErrorCodeEntry>,
}

/// Generate the complete error catalog as a structured object.
#[must_use]
pub fn generate_error_catalog() -> ErrorCatalogDocument {
    let errors: Vec<ErrorCodeEntry> = BizError::all()
        .iter()
        .copied()
        .map(ErrorCodeEntry::from)
        .collect();

    ErrorCatalogDocument {
        schema_version: CATALOG_SCHEMA_VERSION.to_string(),
        ranges: code_ranges(),
        total: errors.len(),
        errors,
    }
}

/// Summary of an [`export_catalog`] run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Number of files written.
    pub files_generated: usize,
    /// Paths of the written files.
    pub files: Vec<String>,
    /// Output directory.
    pub output_dir: String,
}

/// Writes the catalog and the response schema into `output_dir`.
///
/// # Errors
///
/// Returns error if directory creation or file writing fails.
pub fn export_catalog(output_dir: &Path) -> std::io::Result<ExportSummary> {
    use std::fs;

    fs::create_dir_all(output_dir)?;

    let mut files = Vec::new();

    let catalog_path = output_dir.join("error-codes.json");
    fs::write(
        &catalog_path,
        serde_json::to_string_pretty(&generate_error_catalog())?,
    )?;
    files.push(catalog_path.display().to_string());

    let schema_path = output_dir.join("error-response.schema.json");
    fs::write(
        &schema_path,
        serde_json::to_string_pretty(&generate_error_response_schema())?,
    )?;
    files.push(schema_path.display().to_string());

    Ok(ExportSummary {
        files_generated: files.len(),
        files,
        output_dir: output_dir.display().to_string(),
    })
}
