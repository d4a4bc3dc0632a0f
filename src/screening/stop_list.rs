use std::fmt;

use serde::{Deserialize, Serialize};

use crate::accounts::AccountInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopListStatus {
    Clear,
    Flagged,
    AskSecurity,
}

impl StopListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopListStatus::Clear => "CLEAR",
            StopListStatus::Flagged => "FLAGGED",
            StopListStatus::AskSecurity => "ASK_SECURITY",
        }
    }
}

impl fmt::Display for StopListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking one account holder against the stop list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopListInfo {
    pub status: StopListStatus,
    pub comment: Option<String>,
}

impl StopListInfo {
    pub fn new(status: StopListStatus) -> Self {
        Self { status, comment: None }
    }

    pub fn with_comment(status: StopListStatus, comment: impl Into<String>) -> Self {
        Self {
            status,
            comment: Some(comment.into()),
        }
    }

    pub fn clear() -> Self {
        Self::new(StopListStatus::Clear)
    }

    /// Only `Clear` lets a transfer run without a human looking at it.
    pub fn is_clear(&self) -> bool {
        self.status == StopListStatus::Clear
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalStopListRequest {
    pub firstname: String,
    pub lastname: String,
    pub middlename: String,
    pub document_number: String,
    pub document_series: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JuridicalStopListRequest {
    pub inn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopListRequest {
    Physical(PhysicalStopListRequest),
    Juridical(JuridicalStopListRequest),
}

impl StopListRequest {
    /// Builds the request shape matching the account kind.
    /// A new account kind has to get its own arm here.
    pub fn for_account(account: &AccountInfo) -> Self {
        match account {
            AccountInfo::Physical(info) => StopListRequest::Physical(PhysicalStopListRequest {
                firstname: info.firstname.clone(),
                lastname: info.lastname.clone(),
                middlename: info.middlename.clone(),
                document_number: info.document_number.clone(),
                document_series: info.document_series.clone(),
            }),
            AccountInfo::Juridical(info) => StopListRequest::Juridical(JuridicalStopListRequest {
                inn: info.inn.clone(),
            }),
        }
    }
}
