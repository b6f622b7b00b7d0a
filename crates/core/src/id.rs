//! Strongly-typed identifiers used across the pipeline.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Identifier of a stock-keeping unit (e.g. `PROD_001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuId(String);

/// Identifier of a physical storage slot (e.g. `LOC_07` or `A01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier without validation.
            ///
            /// Blank identifiers are caught later by table validation; use
            /// `parse` to reject them up front.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = AnalysisError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(AnalysisError::schema(format!("{} cannot be blank", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_string_newtype!(SkuId, "SkuId");
impl_string_newtype!(LocationId, "LocationId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_blank() {
        let id: SkuId = "  PROD_001 ".parse().unwrap();
        assert_eq!(id.as_str(), "PROD_001");

        let err = "   ".parse::<LocationId>().unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("LocationId")));
    }

    #[test]
    fn serializes_transparently() {
        let loc = LocationId::new("LOC_01");
        assert_eq!(serde_json::to_string(&loc).unwrap(), "\"LOC_01\"");
    }
}
