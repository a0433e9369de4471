use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of delivered events, with no bounce, at which a domain is
/// considered catch-all.
pub const CATCH_ALL_THRESHOLD: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainStatus {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "catch-all")]
    CatchAll,
    #[serde(rename = "not-catch-all")]
    NotCatchAll,
}

impl DomainStatus {
    /// Derives the status from the counts.
    ///
    /// Any bounce disqualifies the domain permanently. Below the threshold,
    /// with no bounce, there is not enough evidence either way.
    pub fn classify(delivered: u64, bounced: u64) -> Self {
        if bounced > 0 {
            DomainStatus::NotCatchAll
        } else if delivered >= CATCH_ALL_THRESHOLD {
            DomainStatus::CatchAll
        } else {
            DomainStatus::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Unknown => "unknown",
            DomainStatus::CatchAll => "catch-all",
            DomainStatus::NotCatchAll => "not-catch-all",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(DomainStatus::Unknown),
            "catch-all" => Ok(DomainStatus::CatchAll),
            // Older records were written with a space.
            "not-catch-all" | "not catch-all" => Ok(DomainStatus::NotCatchAll),
            other => Err(format!("Unknown domain status: {}", other)),
        }
    }
}
