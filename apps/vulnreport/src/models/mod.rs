//! Shared value types: verbosity levels and report format variants.

pub mod level;
pub mod sbom;

pub use level::VerbosityLevel;
pub use sbom::CycloneDxVersion;
