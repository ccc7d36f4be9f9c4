use super::resolution::{FallbackReason, Resolution};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 25;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Page size policy. Raw limits arrive as query-string text and are
/// normalised into `[min, max]`; this never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitPolicy {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self {
            default: DEFAULT_LIMIT,
            min: MIN_LIMIT,
            max: MAX_LIMIT,
        }
    }
}

impl LimitPolicy {
    pub fn clamp(&self, raw: Option<&str>) -> Resolution<u32> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Resolution::Defaulted(self.bounded_default(), FallbackReason::Missing);
        };

        match raw.parse::<i64>() {
            Ok(value) => self.clamp_value(value),
            Err(_) if is_integer_literal(raw) => {
                // Too many digits for i64: saturate by sign.
                if raw.starts_with('-') {
                    Resolution::Defaulted(self.bounds().0, FallbackReason::OutOfRange)
                } else {
                    Resolution::Defaulted(self.bounds().1, FallbackReason::OutOfRange)
                }
            }
            Err(_) => Resolution::Defaulted(self.bounded_default(), FallbackReason::NotNumeric),
        }
    }

    pub fn clamp_value(&self, value: i64) -> Resolution<u32> {
        let (min, max) = self.bounds();
        if value < i64::from(min) {
            Resolution::Defaulted(min, FallbackReason::OutOfRange)
        } else if value > i64::from(max) {
            Resolution::Defaulted(max, FallbackReason::OutOfRange)
        } else {
            // Bounded by `max`, which is a u32.
            Resolution::Resolved(value as u32)
        }
    }

    /// Configured bounds, narrowed to `[MIN_LIMIT, MAX_LIMIT]`.
    fn bounds(&self) -> (u32, u32) {
        let min = self.min.clamp(MIN_LIMIT, MAX_LIMIT);
        let max = self.max.clamp(min, MAX_LIMIT);
        (min, max)
    }

    fn bounded_default(&self) -> u32 {
        let (min, max) = self.bounds();
        self.default.clamp(min, max)
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
