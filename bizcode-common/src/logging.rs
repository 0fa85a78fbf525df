//! Logging setup and verbosity-aware reporting of business errors.
//!
//! Variants marked [`ErrorLogType::Verbose`](crate::errors::ErrorLogType)
//! are logged at `error` level with every field. All others get one terse
//! `warn` line carrying just the code and message.

use crate::api::BizFault;
use crate::config::EnvParser;
use tracing::{error, warn};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target used for business error events.
pub const FAULT_TARGET: &str = "bizcode::fault";

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive, e.g. "info" or "bizcode=debug".
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LogSettings {
    /// Reads `BIZCODE_LOG_LEVEL` and `BIZCODE_LOG_JSON`.
    ///
    /// Invalid values fall back to defaults and stay recorded in `parser`.
    pub fn from_env(parser: &mut EnvParser) -> Self {
        let defaults = Self::default();
        Self {
            level: parser.get_log_level("LOG_LEVEL", &defaults.level).value,
            json: parser.get_bool("LOG_JSON", defaults.json).value,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LogSettings) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(settings.json.then(|| fmt::layer().json()))
        .with((!settings.json).then(fmt::layer))
        .with(filter)
        .try_init()
}

/// Logs one occurrence of a business error at the detail its variant asks for.
pub fn report(fault: &BizFault) {
    let biz = fault.error();
    if biz.is_verbose() {
        error!(
            target: FAULT_TARGET,
            variant = biz.name(),
            http_status = biz.http_status(),
            biz_code = biz.biz_code(),
            context = ?fault.context(),
            "{}",
            fault.message()
        );
    } else {
        warn!(
            target: FAULT_TARGET,
            biz_code = biz.biz_code(),
            "{}",
            fault.message()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BizError;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(fault: &BizFault) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, || report(fault));
        out.text()
    }

    #[test]
    fn test_verbose_fault_logs_full_detail() {
        let fault = BizFault::new(BizError::DatasourceCloseFailed, "pool did not drain")
            .with_context("datasource_id", "ds-9");
        let line = capture(&fault);

        assert!(line.contains("ERROR"));
        assert!(line.contains("pool did not drain"));
        assert!(line.contains("DATASOURCE_CLOSE_FAILED"));
        assert!(line.contains("http_status=500"));
        assert!(line.contains("biz_code=5509"));
        assert!(line.contains("ds-9"));
    }

    #[test]
    fn test_simple_fault_logs_terse_line() {
        let fault = BizFault::new(BizError::InvalidPassword, "wrong password")
            .with_context("user", "u-1");
        let line = capture(&fault);

        assert!(line.contains("WARN"));
        assert!(line.contains("wrong password"));
        assert!(line.contains("biz_code=5608"));
        assert!(!line.contains("INVALID_PASSWORD"));
        assert!(!line.contains("u-1"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_default_settings() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, "info");
        assert!(!settings.json);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_settings_from_env() {
        let _guard = crate::config::env_test_lock();
        // SAFETY: env mutation is serialized by env_test_lock
        unsafe {
            std::env::set_var("BIZCODE_LOG_LEVEL", "Trace");
            std::env::set_var("BIZCODE_LOG_JSON", "yes");
        }

        let mut parser = EnvParser::new();
        let settings = LogSettings::from_env(&mut parser);
        assert_eq!(settings.level, "trace");
        assert!(settings.json);
        assert!(!parser.has_errors());

        // SAFETY: env mutation is serialized by env_test_lock
        unsafe {
            std::env::remove_var("BIZCODE_LOG_LEVEL");
            std::env::remove_var("BIZCODE_LOG_JSON");
        }
    }
}
