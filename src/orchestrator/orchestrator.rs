use log::{debug, info, warn};
use uuid::Uuid;

use crate::accounts::{AccountInfo, TransferRequest};
use crate::operations::Operation;
use crate::orchestrator::error::TransferError;
use crate::screening::{StopListInfo, StopListRequest};
use crate::services::{AuditRecorder, BalanceVerifier, ComplianceScreener, TransferExecutor};

/// Entry point shared by every caller.
///
/// Holds only the collaborators. Each `transfer` call builds its own
/// `TransferOrchestrator`, so one service can serve concurrent callers.
pub struct MoneyTransferService<B, S, A, E> {
    account_service: B,
    stop_list_service: S,
    operation_dao: A,
    executor: E,
}

impl<B, S, A, E> MoneyTransferService<B, S, A, E>
where
    B: BalanceVerifier,
    S: ComplianceScreener,
    A: AuditRecorder,
    E: TransferExecutor,
{
    pub fn new(account_service: B, stop_list_service: S, operation_dao: A, executor: E) -> Self {
        Self {
            account_service,
            stop_list_service,
            operation_dao,
            executor,
        }
    }

    pub fn transfer(&self, request: TransferRequest) -> Result<(), TransferError> {
        TransferOrchestrator::new(
            request,
            &self.account_service,
            &self.stop_list_service,
            &self.operation_dao,
            &self.executor,
        )
        .transfer()
    }
}

/// Runs a single transfer request; consumed by `transfer`.
pub struct TransferOrchestrator<'a, B: ?Sized, S: ?Sized, A: ?Sized, E: ?Sized> {
    request: TransferRequest,
    account_service: &'a B,
    stop_list_service: &'a S,
    operation_dao: &'a A,
    executor: &'a E,
}

impl<'a, B, S, A, E> TransferOrchestrator<'a, B, S, A, E>
where
    B: BalanceVerifier + ?Sized,
    S: ComplianceScreener + ?Sized,
    A: AuditRecorder + ?Sized,
    E: TransferExecutor + ?Sized,
{
    pub fn new(
        request: TransferRequest,
        account_service: &'a B,
        stop_list_service: &'a S,
        operation_dao: &'a A,
        executor: &'a E,
    ) -> Self {
        Self {
            request,
            account_service,
            stop_list_service,
            operation_dao,
            executor,
        }
    }

    pub fn transfer(self) -> Result<(), TransferError> {
        self.verify_src_balance()?;

        let operation = Operation::new(
            &self.request,
            self.stop_list_info(self.request.src_account()),
            self.stop_list_info(self.request.dst_account()),
        );
        self.save_operation(&operation)?;

        // Decided from the saved record, never from a second lookup.
        if !operation.is_cleared() {
            warn!(
                "transfer {} -> {} suspended: src={}, dst={}, operation={}",
                operation.src_account,
                operation.dst_account,
                operation.src_stoplist_info.status,
                operation.dst_stoplist_info.status,
                operation.id
            );
            return Err(TransferError::ManualInterventionRequired {
                operation_id: operation.id,
                src_status: operation.src_stoplist_info.status,
                dst_status: operation.dst_stoplist_info.status,
            });
        }

        self.transfer_do()?;
        self.remove_successful_operation(&operation.id);

        info!(
            "transfer {} -> {} executed",
            operation.src_account, operation.dst_account
        );
        Ok(())
    }

    fn verify_src_balance(&self) -> Result<(), TransferError> {
        let src = self.request.src_account();
        if !self.account_service.verify_balance(src) {
            debug!("low balance on {}", src.account_number());
            return Err(TransferError::InsufficientBalance);
        }
        Ok(())
    }

    fn stop_list_info(&self, account: &AccountInfo) -> StopListInfo {
        let info = match StopListRequest::for_account(account) {
            StopListRequest::Physical(request) => {
                self.stop_list_service.physical_stop_list_info(&request)
            }
            StopListRequest::Juridical(request) => {
                self.stop_list_service.juridical_stop_list_info(&request)
            }
        };
        debug!("stop list status for {}: {}", account.account_number(), info.status);
        info
    }

    fn save_operation(&self, operation: &Operation) -> Result<(), TransferError> {
        self.operation_dao
            .save_operation(operation)
            .map_err(TransferError::AuditPersistenceFailure)
    }

    fn transfer_do(&self) -> Result<(), TransferError> {
        self.executor
            .execute(&self.request)
            .map_err(TransferError::ExecutionFailure)
    }

    /// Funds have already moved at this point, so a failure here is logged
    /// and the stale operation is left for the review queue.
    fn remove_successful_operation(&self, id: &Uuid) {
        if let Err(e) = self.operation_dao.remove_operation(id) {
            warn!("executed operation {} could not be removed: {}", id, e);
        }
    }
}
