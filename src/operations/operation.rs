use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::TransferRequest;
use crate::screening::StopListInfo;

/// Audit record of one transfer attempt.
///
/// Written before the clearance decision, so a suspended transfer stays
/// visible for manual review even if the process dies right after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub id: Uuid,
    pub create_date: DateTime<Utc>,
    pub src_account: String,
    pub dst_account: String,
    pub src_stoplist_info: StopListInfo,
    pub dst_stoplist_info: StopListInfo,
}

impl Operation {
    pub fn new(
        request: &TransferRequest,
        src_stoplist_info: StopListInfo,
        dst_stoplist_info: StopListInfo,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            create_date: Utc::now(),
            src_account: request.src_account().account_number().to_string(),
            dst_account: request.dst_account().account_number().to_string(),
            src_stoplist_info,
            dst_stoplist_info,
        }
    }

    /// True when both holders passed screening.
    pub fn is_cleared(&self) -> bool {
        self.src_stoplist_info.is_clear() && self.dst_stoplist_info.is_clear()
    }
}
