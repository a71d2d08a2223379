//! Configuration system for the scheduling model.
//!
//! This module defines the machine parameters a run is evaluated against. It provides:
//! 1. **Bounds:** An explicit `Bounded(n) | Unbounded` resource limit; zero is unrepresentable.
//! 2. **Issue models:** The windowed (fetch-then-dispatch) and direct (two-phase) schedulers.
//! 3. **Structures:** The root `Config`, deserializable from JSON with per-field defaults.
//!
//! Configuration is supplied from a JSON file (`--config`) or built from CLI arguments;
//! `Config::default()` is the fully unconstrained machine.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// A resource limit: at most `n` occupants, or no limit at all.
///
/// Deserializes from a positive integer, `"unbounded"`/`"inf"`, or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BoundRepr")]
pub enum Bound {
    /// At most this many occupants at once.
    Bounded(NonZeroUsize),
    /// No limit.
    #[default]
    Unbounded,
}

impl Bound {
    /// Creates a finite bound, rejecting zero.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of occupants.
    /// * `resource` - Name used in the error message.
    pub fn bounded(n: usize, resource: &'static str) -> Result<Self, ConfigError> {
        NonZeroUsize::new(n)
            .map(Self::Bounded)
            .ok_or(ConfigError::ZeroBound { resource })
    }

    /// Returns true if one more occupant fits alongside `occupied` existing ones.
    #[inline]
    pub fn admits(self, occupied: usize) -> bool {
        match self {
            Self::Bounded(n) => occupied < n.get(),
            Self::Unbounded => true,
        }
    }

    /// Returns true if `count` has reached the limit. Never true when unbounded.
    #[inline]
    pub fn is_reached(self, count: usize) -> bool {
        !self.admits(count)
    }

    /// Returns true for `Bound::Unbounded`.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Parses a bound given on the command line for the named resource.
    ///
    /// Accepts a positive integer or one of `unbounded`, `inf`, `-1`.
    pub fn parse_for(s: &str, resource: &'static str) -> Result<Self, ConfigError> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "unbounded" | "inf" | "-1" => Ok(Self::Unbounded),
            _ => {
                let n = s
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidBound(s.to_string()))?;
                Self::bounded(n, resource)
            }
        }
    }
}

impl FromStr for Bound {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for(s, "resource bound")
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Wire form of a `Bound` in JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoundRepr {
    Count(u64),
    Keyword(String),
    Null(()),
}

impl TryFrom<BoundRepr> for Bound {
    type Error = ConfigError;

    fn try_from(repr: BoundRepr) -> Result<Self, Self::Error> {
        match repr {
            BoundRepr::Count(n) => {
                let n = usize::try_from(n).map_err(|_| ConfigError::InvalidBound(n.to_string()))?;
                Self::bounded(n, "resource bound")
            }
            BoundRepr::Keyword(s) => s.parse(),
            BoundRepr::Null(()) => Ok(Self::Unbounded),
        }
    }
}

/// Scheduler issue model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueModel {
    /// Four-state model: instructions are fetched into a window bounded by the fetch width,
    /// then dispatched to execution units once their producers have completed.
    #[default]
    Windowed,
    /// Two-phase model: ready instructions start executing directly; the fetch width only
    /// caps how many may start per cycle.
    Direct,
}

impl fmt::Display for IssueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windowed => write!(f, "windowed"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Root machine configuration.
///
/// # Examples
///
/// ```
/// use ilpsim_core::config::{Bound, Config, IssueModel};
///
/// let config = Config::from_json(r#"{ "fetch_width": 2, "model": "direct" }"#).unwrap();
/// assert_eq!(config.fetch_width.to_string(), "2");
/// assert_eq!(config.execution_units, Bound::Unbounded);
/// assert_eq!(config.model, IssueModel::Direct);
/// assert!(!config.is_unconstrained());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum instructions fetched but not yet dispatched.
    #[serde(default)]
    pub fetch_width: Bound,

    /// Maximum instructions executing at once.
    #[serde(default)]
    pub execution_units: Bound,

    /// Issue model used when at least one bound is finite.
    #[serde(default)]
    pub model: IssueModel,
}

impl Config {
    /// Creates a windowed-model configuration from the two bounds.
    pub fn new(fetch_width: Bound, execution_units: Bound) -> Self {
        Self {
            fetch_width,
            execution_units,
            model: IssueModel::default(),
        }
    }

    /// Decodes a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns true when neither resource is limited, in which case the run reduces to
    /// critical-path evaluation.
    pub fn is_unconstrained(&self) -> bool {
        self.fetch_width.is_unbounded() && self.execution_units.is_unbounded()
    }
}
