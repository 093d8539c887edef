//! CycloneDX schema versions a reporter can be configured for.
//!
//! The version is carried by the reporter for the document writer. It has no
//! influence on which messages are printed or where.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
/// Target CycloneDX document schema.
pub enum CycloneDxVersion {
    #[default]
    #[serde(rename = "1.4")]
    #[value(name = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    #[value(name = "1.5")]
    V1_5,
}

impl CycloneDxVersion {
    pub const ALL: [CycloneDxVersion; 2] = [CycloneDxVersion::V1_4, CycloneDxVersion::V1_5];

    /// Value of the document's `specVersion` field.
    pub fn spec_version(self) -> &'static str {
        match self {
            CycloneDxVersion::V1_4 => "1.4",
            CycloneDxVersion::V1_5 => "1.5",
        }
    }
}

impl fmt::Display for CycloneDxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec_version())
    }
}

impl FromStr for CycloneDxVersion {
    type Err = Error;

    /// Accepts `1.5`, `v1.5`, `1-5`, `cyclonedx-1-5` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let rest = lowered.strip_prefix("cyclonedx").unwrap_or(&lowered);
        let rest = rest.trim_start_matches(['-', '_']);
        let rest = rest.strip_prefix('v').unwrap_or(rest);
        let normalized = rest.replace(['-', '_'], ".");
        match normalized.as_str() {
            "1.4" => Ok(CycloneDxVersion::V1_4),
            "1.5" => Ok(CycloneDxVersion::V1_5),
            _ => Err(Error::InvalidFormat {
                given: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|v| v.spec_version())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
