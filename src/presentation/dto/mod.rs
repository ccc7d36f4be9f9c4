pub mod listing_dto;

use crate::domain::listing::PageResult;
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const CONTAINER_NOT_FOUND_REASON: &str = "container not found";

/// Envelope every listing call answers with: `{statusCode: 200, data}` or
/// `{statusCode: 404, reason}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T> {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PageResult<T>>,
}

impl<T> ListingResponse<T> {
    pub fn ok(data: PageResult<T>) -> Self {
        Self {
            status_code: STATUS_OK,
            reason: None,
            data: Some(data),
        }
    }

    pub fn container_not_found() -> Self {
        Self {
            status_code: STATUS_NOT_FOUND,
            reason: Some(CONTAINER_NOT_FOUND_REASON.to_string()),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
