//! Configuration of the default strategy.
//!
//! [`ContextConfig`] is the input for installing a process-wide default.
//! It can be built by hand, taken from [`Default`], or read from the
//! environment with [`ContextConfig::from_env`].

use std::env::{self, VarError};
use std::error::Error;
use std::fmt;

use errprop_core::{ExtremeDivision, PropagationStrategy, StrategyKind};
use tracing::info;

use crate::default::set_default_strategy;

/// Environment variable naming the default strategy kind.
pub const STRATEGY_ENV: &str = "ERRPROP_STRATEGY";

/// Environment variable naming the `Extreme` division policy.
pub const EXTREME_DIVISION_ENV: &str = "ERRPROP_EXTREME_DIVISION";

// ── ConfigError ────────────────────────────────────────────────────

/// Errors from parsing a [`ContextConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The strategy name is not recognised.
    UnknownStrategy {
        /// The rejected input.
        value: String,
    },
    /// The division policy name is not recognised.
    UnknownDivisionPolicy {
        /// The rejected input.
        value: String,
    },
    /// An environment variable is set but not valid unicode.
    NotUnicode {
        /// The variable name.
        variable: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy { value } => write!(
                f,
                "unknown propagation strategy '{value}' (expected statistical, worst-case or extreme)"
            ),
            Self::UnknownDivisionPolicy { value } => write!(
                f,
                "unknown extreme division policy '{value}' (expected upper-bound or unsupported)"
            ),
            Self::NotUnicode { variable } => write!(f, "{variable} is not valid unicode"),
        }
    }
}

impl Error for ConfigError {}

// ── Parsing ────────────────────────────────────────────────────────

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase().replace('_', "-")
}

/// Parse a strategy name.
///
/// Accepts the canonical names (`statistical`, `worst-case`, `extreme`)
/// case-insensitively, with `_` for `-`, plus the aliases `rss`,
/// `linear` and `worstcase`.
pub fn parse_strategy_kind(input: &str) -> Result<StrategyKind, ConfigError> {
    match normalize(input).as_str() {
        "statistical" | "rss" => Ok(StrategyKind::Statistical),
        "worst-case" | "worstcase" | "linear" => Ok(StrategyKind::WorstCase),
        "extreme" => Ok(StrategyKind::Extreme),
        _ => Err(ConfigError::UnknownStrategy {
            value: input.to_string(),
        }),
    }
}

/// Parse an `Extreme` division policy name (`upper-bound` or
/// `unsupported`).
pub fn parse_extreme_division(input: &str) -> Result<ExtremeDivision, ConfigError> {
    match normalize(input).as_str() {
        "upper-bound" => Ok(ExtremeDivision::UpperBound),
        "unsupported" => Ok(ExtremeDivision::Unsupported),
        _ => Err(ConfigError::UnknownDivisionPolicy {
            value: input.to_string(),
        }),
    }
}

// ── ContextConfig ──────────────────────────────────────────────────

/// Default-strategy configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextConfig {
    /// Strategy kind installed as the default. Default: `Statistical`.
    pub strategy: StrategyKind,
    /// Division policy used when `strategy` is `Extreme`.
    /// Default: `UpperBound`.
    pub extreme_division: ExtremeDivision,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Statistical,
            extreme_division: ExtremeDivision::UpperBound,
        }
    }
}

impl ContextConfig {
    /// Read [`STRATEGY_ENV`] and [`EXTREME_DIVISION_ENV`]; unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(v) => Ok(Some(v)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(name),
        })
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// `lookup` returns `Ok(None)` for unset variables and `Err(name)` for
    /// variables that are set but unreadable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, &'static str>,
    {
        let read = |name: &'static str| {
            lookup(name).map_err(|variable| ConfigError::NotUnicode { variable })
        };
        let mut config = Self::default();
        if let Some(value) = read(STRATEGY_ENV)? {
            config.strategy = parse_strategy_kind(&value)?;
        }
        if let Some(value) = read(EXTREME_DIVISION_ENV)? {
            config.extreme_division = parse_extreme_division(&value)?;
        }
        Ok(config)
    }

    /// The strategy this configuration describes.
    pub fn strategy(&self) -> PropagationStrategy {
        match self.strategy {
            StrategyKind::Extreme => PropagationStrategy::Extreme {
                division: self.extreme_division,
            },
            kind => PropagationStrategy::for_kind(kind),
        }
    }

    /// Install [`strategy()`](Self::strategy) as the process-wide default,
    /// returning the previous default.
    pub fn apply(&self) -> PropagationStrategy {
        let strategy = self.strategy();
        info!(%strategy, "installing default propagation strategy");
        set_default_strategy(strategy)
    }
}
