//! Transfer error types

use thiserror::Error;
use uuid::Uuid;

use crate::screening::StopListStatus;
use crate::services::{AuditError, ExecutionError};

pub const LOW_BALANCE_ERROR_MESSAGE: &str =
    "Can not transfer money, because of low balance in the source account";

/// Why a transfer did not go through.
///
/// `InsufficientBalance` and `ManualInterventionRequired` are ordinary
/// business outcomes; the other two are infrastructure faults.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("{}", LOW_BALANCE_ERROR_MESSAGE)]
    InsufficientBalance,

    #[error(
        "Transfer suspended, manual intervention required for operation {operation_id} (src: {src_status}, dst: {dst_status})"
    )]
    ManualInterventionRequired {
        operation_id: Uuid,
        src_status: StopListStatus,
        dst_status: StopListStatus,
    },

    #[error("Failed to save operation: {0}")]
    AuditPersistenceFailure(#[source] AuditError),

    #[error("Failed to execute transfer: {0}")]
    ExecutionFailure(#[source] ExecutionError),
}

impl TransferError {
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            TransferError::ManualInterventionRequired { .. } => "MANUAL_INTERVENTION_REQUIRED",
            TransferError::AuditPersistenceFailure(_) => "AUDIT_PERSISTENCE_FAILURE",
            TransferError::ExecutionFailure(_) => "EXECUTION_FAILURE",
        }
    }

    /// Expected outcomes of the flow, as opposed to system failures.
    pub fn is_business_outcome(&self) -> bool {
        matches!(
            self,
            TransferError::InsufficientBalance | TransferError::ManualInterventionRequired { .. }
        )
    }

    /// Id of the operation left open for review, if any.
    pub fn pending_operation(&self) -> Option<Uuid> {
        match self {
            TransferError::ManualInterventionRequired { operation_id, .. } => Some(*operation_id),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::InsufficientBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(
            TransferError::AuditPersistenceFailure(AuditError::Storage("disk".into())).code(),
            "AUDIT_PERSISTENCE_FAILURE"
        );
        assert_eq!(
            TransferError::ExecutionFailure(ExecutionError::Unavailable("cdc".into())).code(),
            "EXECUTION_FAILURE"
        );
    }

    #[test]
    fn test_business_outcomes_are_told_apart_from_faults() {
        let suspended = TransferError::ManualInterventionRequired {
            operation_id: Uuid::new_v4(),
            src_status: StopListStatus::Clear,
            dst_status: StopListStatus::Flagged,
        };
        assert!(suspended.is_business_outcome());
        assert!(TransferError::InsufficientBalance.is_business_outcome());
        assert!(!TransferError::AuditPersistenceFailure(AuditError::Storage("x".into()))
            .is_business_outcome());
        assert!(!TransferError::ExecutionFailure(ExecutionError::Rejected("x".into()))
            .is_business_outcome());
    }

    #[test]
    fn test_storage_cause_is_kept() {
        let err = TransferError::AuditPersistenceFailure(AuditError::Storage("disk full".into()));
        assert_eq!(err.to_string(), "Failed to save operation: Storage error: disk full");
        assert!(err.source().is_some());
        assert_eq!(err.pending_operation(), None);
    }

    #[test]
    fn test_low_balance_message() {
        assert_eq!(
            TransferError::InsufficientBalance.to_string(),
            LOW_BALANCE_ERROR_MESSAGE
        );
    }
}
