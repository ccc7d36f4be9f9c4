use super::resolution::{FallbackReason, Resolution};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Window name that is recognised but applies no cutoff.
pub const UNBOUNDED_WINDOW: &str = "all";

/// A named trailing interval, e.g. `week` = 7 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowRule {
    pub name: String,
    pub seconds: i64,
}

impl TimeWindowRule {
    pub fn new(name: impl Into<String>, seconds: i64) -> Self {
        Self {
            name: name.into(),
            seconds,
        }
    }
}

pub fn default_time_windows() -> Vec<TimeWindowRule> {
    const HOUR: i64 = 60 * 60;
    const DAY: i64 = 24 * HOUR;
    vec![
        TimeWindowRule::new("hour", HOUR),
        TimeWindowRule::new("day", DAY),
        TimeWindowRule::new("week", 7 * DAY),
        TimeWindowRule::new("month", 30 * DAY),
        TimeWindowRule::new("year", 365 * DAY),
    ]
}

/// Resolved window: records created before `cutoff` are excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub name: String,
    pub cutoff: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TimeWindowResolver {
    windows: HashMap<String, TimeDelta>,
}

impl TimeWindowResolver {
    /// Rules whose duration does not fit a `TimeDelta` are skipped.
    pub fn new(rules: &[TimeWindowRule]) -> Self {
        let windows = rules
            .iter()
            .filter_map(|rule| {
                TimeDelta::try_seconds(rule.seconds)
                    .map(|delta| (rule.name.trim().to_lowercase(), delta))
            })
            .collect();
        Self { windows }
    }

    pub fn resolve(
        &self,
        name: Option<&str>,
        requires_window: bool,
    ) -> Resolution<Option<TimeWindow>> {
        self.resolve_at(name, requires_window, Utc::now())
    }

    pub fn resolve_at(
        &self,
        name: Option<&str>,
        requires_window: bool,
        now: DateTime<Utc>,
    ) -> Resolution<Option<TimeWindow>> {
        let name = name
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty());

        if !requires_window {
            return match name {
                Some(_) => Resolution::Defaulted(None, FallbackReason::NotApplicable),
                None => Resolution::Resolved(None),
            };
        }

        let Some(name) = name else {
            return Resolution::Defaulted(None, FallbackReason::Missing);
        };
        if name == UNBOUNDED_WINDOW {
            return Resolution::Resolved(None);
        }

        match self
            .windows
            .get(&name)
            .and_then(|delta| now.checked_sub_signed(*delta))
        {
            Some(cutoff) => Resolution::Resolved(Some(TimeWindow { name, cutoff })),
            None => Resolution::Defaulted(None, FallbackReason::Unrecognized),
        }
    }
}

impl Default for TimeWindowResolver {
    fn default() -> Self {
        Self::new(&default_time_windows())
    }
}
