//! Forced failure scenarios driven by the `error_scenario` query parameter.
//!
//! A directive is parsed into an [`Interception`] before any post is read or
//! written. Recognized values:
//!
//! - `500` — server fault
//! - `503` — service unavailable
//! - `404` — not found, whether or not the post exists
//! - `validation` — validation failure, whatever the payload
//! - `timeout` — stall the request for the configured duration
//!
//! Anything else, including an empty value, is ignored. When the parameter
//! is repeated, the last value wins.

use std::fmt;
use std::time::Duration;

/// How long a `timeout` directive holds the request.
pub const DEFAULT_STALL: Duration = Duration::from_secs(30);

/// Name of the query parameter carrying the directive.
pub const ERROR_SCENARIO_PARAM: &str = "error_scenario";

/// The optional directive taken from a request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioQuery {
    pub error_scenario: Option<String>,
}

/// An error outcome forced by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedFailure {
    ServerFault,
    ServiceUnavailable,
    NotFound,
    Validation,
}

/// What to do with a request before normal handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    /// No directive, or one we don't recognize.
    Proceed,
    /// Answer with this failure; the repository is never consulted.
    Fail(ForcedFailure),
    /// Sleep for the stall duration, then continue normally.
    Stall,
}

impl Interception {
    pub fn from_directive(directive: Option<&str>) -> Self {
        match directive {
            Some("500") => Interception::Fail(ForcedFailure::ServerFault),
            Some("503") => Interception::Fail(ForcedFailure::ServiceUnavailable),
            Some("404") => Interception::Fail(ForcedFailure::NotFound),
            Some("validation") => Interception::Fail(ForcedFailure::Validation),
            Some("timeout") => Interception::Stall,
            _ => Interception::Proceed,
        }
    }
}

impl ScenarioQuery {
    /// Pick the directive out of decoded query pairs; unrelated parameters
    /// are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let error_scenario = pairs
            .into_iter()
            .filter(|(name, _)| name == ERROR_SCENARIO_PARAM)
            .map(|(_, value)| value)
            .last();
        Self { error_scenario }
    }

    pub fn interception(&self) -> Interception {
        Interception::from_directive(self.error_scenario.as_deref())
    }
}

impl fmt::Display for ForcedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ForcedFailure::ServerFault => "Internal server error scenario triggered",
            ForcedFailure::ServiceUnavailable => "Service temporarily unavailable",
            ForcedFailure::NotFound => "Resource not found (forced scenario)",
            ForcedFailure::Validation => "Validation error scenario triggered",
        };
        f.write_str(message)
    }
}
