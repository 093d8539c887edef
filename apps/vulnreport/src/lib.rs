//! Vulnreport core library.
//!
//! Leveled reporting for a scanning CLI: every message is either written to
//! the results stream, written to the diagnostics stream, or dropped,
//! depending on its level and the configured threshold. Error-level messages
//! also mark the run as failed for exit-code purposes.
//!
//! High-level modules:
//! - `models`: Verbosity levels and CycloneDX format variants.
//! - `reporter`: The `Reporter` trait and its implementations.
//! - `config`: Discovery and effective settings resolution.
//! - `error`: Error type for parsing and configuration.
//!
//! ```
//! use vulnreport::{report_error, report_info, CycloneDxReporter, CycloneDxVersion, Reporter, VerbosityLevel};
//!
//! let mut results = Vec::new();
//! let mut diagnostics = Vec::new();
//! let failed = {
//!     let mut r = CycloneDxReporter::new(
//!         &mut results,
//!         &mut diagnostics,
//!         CycloneDxVersion::V1_5,
//!         VerbosityLevel::Warn,
//!     );
//!     report_info!(r, "scanning {} lockfiles\n", 2);
//!     report_error!(r, "lockfile unreadable\n");
//!     r.has_errored()
//! };
//! assert!(failed);
//! assert_eq!(results, b"lockfile unreadable\n");
//! assert!(diagnostics.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reporter;

pub use error::{Error, Result};
pub use models::{CycloneDxVersion, VerbosityLevel};
pub use reporter::{CycloneDxReporter, Reporter, VoidReporter};
