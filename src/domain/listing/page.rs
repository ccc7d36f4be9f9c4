use super::record::Listable;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw, query-string shaped page parameters. Nothing here is validated;
/// every field degrades to a default when it cannot be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default, alias = "sort")]
    pub sort_name: Option<String>,
    #[serde(default, alias = "t")]
    pub time_window_name: Option<String>,
    #[serde(default, alias = "before")]
    pub before_token: Option<String>,
    #[serde(default, alias = "after")]
    pub after_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub limit: Option<String>,
}

/// Accepts `"10"`, `10` or `null`; anything else is kept as text and left
/// for the limit clamp to reject.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, name: impl Into<String>) -> Self {
        self.sort_name = Some(name.into());
        self
    }

    pub fn window(mut self, name: impl Into<String>) -> Self {
        self.time_window_name = Some(name.into());
        self
    }

    pub fn before(mut self, token: impl Into<String>) -> Self {
        self.before_token = Some(token.into());
        self
    }

    pub fn after(mut self, token: impl Into<String>) -> Self {
        self.after_token = Some(token.into());
        self
    }

    pub fn limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }
}

/// One page of a listing. Tokens are the ids of the first and last item
/// returned, or empty strings when the page is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<R> {
    pub before_token: String,
    pub after_token: String,
    pub items: Vec<R>,
}

impl<R> PageResult<R> {
    pub fn empty() -> Self {
        Self {
            before_token: String::new(),
            after_token: String::new(),
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(R) -> U) -> PageResult<U> {
        PageResult {
            before_token: self.before_token,
            after_token: self.after_token,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<R: Listable> PageResult<R> {
    /// Drops tombstoned records, then derives the tokens from what is left.
    pub fn from_records(records: Vec<R>) -> Self {
        let items: Vec<R> = records.into_iter().filter(|item| item.is_live()).collect();
        let before_token = items
            .first()
            .map(|item| item.id().to_string())
            .unwrap_or_default();
        let after_token = items
            .last()
            .map(|item| item.id().to_string())
            .unwrap_or_default();
        Self {
            before_token,
            after_token,
            items,
        }
    }
}
