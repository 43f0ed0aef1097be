//! Recurrence rules attached to repeating events.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Calendar unit a series repeats on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrencePattern {
    type Err = ScheduleError;

    /// Stored pattern text outside the four known units is a configuration
    /// error on the stored event, surfaced here at the decode boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(ScheduleError::UnknownPattern(other.to_string())),
        }
    }
}

/// When a series stops producing occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPolicy {
    /// The series repeats forever.
    #[default]
    Never,
    /// The series stops after `count` occurrences, counting the original
    /// window as occurrence 1.
    AfterCount { count: u32 },
    /// The series stops once an occurrence would start after `date`.
    OnDate { date: DateTime<Utc> },
}

/// How a recurring event repeats: every `interval` units of `pattern`,
/// until `end` says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub pattern: RecurrencePattern,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub end: EndPolicy,
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceRule {
    /// Rule repeating every single unit of `pattern`, forever.
    #[must_use]
    pub const fn new(pattern: RecurrencePattern) -> Self {
        Self {
            pattern,
            interval: 1,
            end: EndPolicy::Never,
        }
    }

    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub const fn with_end(mut self, end: EndPolicy) -> Self {
        self.end = end;
        self
    }

    /// ## Summary
    /// Checks the rule's numeric invariants.
    ///
    /// A zero interval or a zero occurrence count would make resolution loop
    /// forever or mean nothing; both are rejected rather than defaulted.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidInterval` or
    /// `ScheduleError::InvalidCount`.
    pub const fn validate(&self) -> ScheduleResult<()> {
        if self.interval == 0 {
            return Err(ScheduleError::InvalidInterval(self.interval));
        }
        if let EndPolicy::AfterCount { count: 0 } = self.end {
            return Err(ScheduleError::InvalidCount(0));
        }
        Ok(())
    }
}
