//! Business error catalog.
//!
//! Every failure the application reports to a client is one [`BizError`]
//! variant. A variant fixes the HTTP status, the numeric business code and
//! whether occurrences are logged verbosely.
//!
//! Business codes are unique across the whole catalog; [`crate::registry`]
//! checks this once at startup.

pub mod catalog;

pub use catalog::{BizError, ErrorDefinition, ErrorLogType};
