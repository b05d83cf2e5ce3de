//! Runtime configuration, read from the environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable consulted once, when the active backend is resolved.
pub const BACKEND_ENV_VAR: &str = "MAXHEAP_BACKEND";

/// Which backend the process would like to use.
///
/// This is a preference, not a demand: `Optimized` still resolves to the portable backend if the
/// native kernel is not available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendPreference {
    #[default]
    Auto,
    Optimized,
    Portable,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown backend preference `{0}`, expected one of `auto`, `optimized` or `portable`")]
pub struct ParsePreferenceError(String);

impl FromStr for BackendPreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "optimized" => Ok(Self::Optimized),
            "portable" => Ok(Self::Portable),
            _ => Err(ParsePreferenceError(s.to_owned())),
        }
    }
}

impl BackendPreference {
    /// Reads the preference from [`BACKEND_ENV_VAR`].
    ///
    /// Unset means `Auto`. An unrecognized value prints a warning and also means `Auto`.
    pub fn from_env() -> Self {
        match env::var(BACKEND_ENV_VAR) {
            Ok(val) => val.parse().unwrap_or_else(|err| {
                eprintln!("maxheap: {err}, using `auto`");
                Self::Auto
            }),
            Err(_) => Self::Auto,
        }
    }
}
