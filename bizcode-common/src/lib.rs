//! Shared library for bizcode.
//!
//! Holds the business error catalog, its startup validation, the error
//! carrier handed to the web layer, and logging/configuration helpers.

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod registry;

pub use api::{BizFault, ErrorResponse};
pub use errors::{BizError, ErrorDefinition, ErrorLogType};
pub use registry::{Registry, RegistryError};
