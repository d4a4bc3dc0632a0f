//! Collaborators the transfer flow depends on.
//!
//! The orchestrator only sees these traits. `BackOffice` in the engine
//! module implements all of them in memory; real deployments plug in the
//! ledger, stop list registry and operation table.

use thiserror::Error;
use uuid::Uuid;

use crate::accounts::{AccountInfo, TransferRequest};
use crate::operations::Operation;
use crate::screening::{JuridicalStopListRequest, PhysicalStopListRequest, StopListInfo};

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Operation not found: {0}")]
    NotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Change propagation consumer unavailable: {0}")]
    Unavailable(String),

    #[error("Ledger rejected transfer: {0}")]
    Rejected(String),
}

/// Answers whether the source account can fund a transfer.
pub trait BalanceVerifier {
    fn verify_balance(&self, account: &AccountInfo) -> bool;
}

pub trait ComplianceScreener {
    fn physical_stop_list_info(&self, request: &PhysicalStopListRequest) -> StopListInfo;

    fn juridical_stop_list_info(&self, request: &JuridicalStopListRequest) -> StopListInfo;
}

/// Durable store of transfer attempts awaiting manual review.
pub trait AuditRecorder {
    fn save_operation(&self, operation: &Operation) -> Result<(), AuditError>;

    /// Drops an operation that no longer needs a human.
    fn remove_operation(&self, id: &Uuid) -> Result<(), AuditError>;
}

/// Moves the funds once a transfer is cleared.
pub trait TransferExecutor {
    fn execute(&self, request: &TransferRequest) -> Result<(), ExecutionError>;
}

impl<T: BalanceVerifier + ?Sized> BalanceVerifier for &T {
    fn verify_balance(&self, account: &AccountInfo) -> bool {
        (**self).verify_balance(account)
    }
}

impl<T: ComplianceScreener + ?Sized> ComplianceScreener for &T {
    fn physical_stop_list_info(&self, request: &PhysicalStopListRequest) -> StopListInfo {
        (**self).physical_stop_list_info(request)
    }

    fn juridical_stop_list_info(&self, request: &JuridicalStopListRequest) -> StopListInfo {
        (**self).juridical_stop_list_info(request)
    }
}

impl<T: AuditRecorder + ?Sized> AuditRecorder for &T {
    fn save_operation(&self, operation: &Operation) -> Result<(), AuditError> {
        (**self).save_operation(operation)
    }

    fn remove_operation(&self, id: &Uuid) -> Result<(), AuditError> {
        (**self).remove_operation(id)
    }
}

impl<T: TransferExecutor + ?Sized> TransferExecutor for &T {
    fn execute(&self, request: &TransferRequest) -> Result<(), ExecutionError> {
        (**self).execute(request)
    }
}
