use crate::domain::listing::limit::{MAX_LIMIT, MIN_LIMIT};
use crate::domain::listing::time_window::default_time_windows;
use crate::domain::listing::{LimitPolicy, SortCatalog, TimeWindowRule};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:data/linkboard.db".to_string(),
            max_connections: 5,
            connection_timeout: 30,
        }
    }
}

/// Everything the listing engine is parameterised by. Immutable once the
/// engine has been built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub limits: LimitPolicy,
    #[serde(default = "default_time_windows")]
    pub time_windows: Vec<TimeWindowRule>,
    #[serde(default)]
    pub sorts: SortCatalog,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            limits: LimitPolicy::default(),
            time_windows: default_time_windows(),
            sorts: SortCatalog::default(),
        }
    }
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let limits = &self.limits;
        if limits.min < MIN_LIMIT {
            return Err(AppError::Configuration(format!(
                "minimum page size must be at least {MIN_LIMIT}"
            )));
        }
        if limits.max > MAX_LIMIT {
            return Err(AppError::Configuration(format!(
                "maximum page size {} exceeds {MAX_LIMIT}",
                limits.max
            )));
        }
        if limits.min > limits.max || !(limits.min..=limits.max).contains(&limits.default) {
            return Err(AppError::Configuration(format!(
                "page size bounds are inconsistent: min={} default={} max={}",
                limits.min, limits.default, limits.max
            )));
        }
        for window in &self.time_windows {
            if window.name.trim().is_empty() || window.seconds <= 0 {
                return Err(AppError::Configuration(format!(
                    "invalid time window '{}' ({}s)",
                    window.name, window.seconds
                )));
            }
        }
        self.sorts.validate()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults. Values that do
    /// not parse keep the default; page size overrides that leave the limits
    /// inconsistent are discarded.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = lookup("LINKBOARD_DATABASE_URL") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.database.url = v.to_string();
            }
        }
        if let Some(value) = lookup("LINKBOARD_DB_MAX_CONNECTIONS").and_then(|v| parse_u32(&v)) {
            cfg.database.max_connections = value.max(1);
        }
        if let Some(value) = lookup("LINKBOARD_DEFAULT_PAGE_SIZE").and_then(|v| parse_u32(&v)) {
            cfg.listing.limits.default = value;
        }
        if let Some(value) = lookup("LINKBOARD_MAX_PAGE_SIZE").and_then(|v| parse_u32(&v)) {
            cfg.listing.limits.max = value;
        }
        if let Err(err) = cfg.listing.validate() {
            tracing::warn!(error = %err, "ignoring page size overrides");
            cfg.listing.limits = LimitPolicy::default();
        }

        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.listing.validate()?;
        Ok(cfg)
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}
