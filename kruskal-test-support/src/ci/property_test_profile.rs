//! Property-test run profile read from the environment.
//!
//! Every proptest suite in the workspace loads the same profile so CI can
//! raise case counts or enable forking without touching the suites.

use std::{env, num::ParseIntError};

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const KRUSKAL_PBT_FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Reasons an override is ignored in favour of the default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count did not parse as an unsigned integer.
    #[error("case count is not an unsigned integer: {0}")]
    InvalidCases(#[from] ParseIntError),
    /// A case count of zero would skip the property entirely.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{0}`")]
    InvalidFlag(String),
}

/// Case count and fork setting applied to a proptest suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to the given defaults when a variable
    /// is unset or malformed. Malformed values are reported with a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(KRUSKAL_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>()? {
        0 => Err(ProfileOverrideError::ZeroCases),
        cases => Ok(cases),
    }
}

fn parse_flag(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidFlag(raw.to_owned())),
    }
}
