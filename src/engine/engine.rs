use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, info};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::accounts::{AccountInfo, TransferRequest};
use crate::operations::Operation;
use crate::screening::{JuridicalStopListRequest, PhysicalStopListRequest, StopListInfo};
use crate::services::{
    AuditError, AuditRecorder, BalanceVerifier, ComplianceScreener, ExecutionError,
    TransferExecutor,
};

/// In-memory back office: ledger balances, stop list registry, pending
/// operation table and the outbox of cleared transfers.
#[derive(Debug)]
pub struct BackOffice {
    pub balances: HashMap<String, Decimal>,
    pub minimum_balance: Decimal,
    /// Keyed by (document series, document number).
    physical_stop_list: HashMap<(String, String), StopListInfo>,
    juridical_stop_list: HashMap<String, StopListInfo>,
    operations: Mutex<HashMap<Uuid, Operation>>,
    outbox: Mutex<Vec<TransferRequest>>,
}

impl BackOffice {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            minimum_balance: Decimal::ZERO,
            physical_stop_list: HashMap::new(),
            juridical_stop_list: HashMap::new(),
            operations: Mutex::new(HashMap::new()),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn with_minimum_balance(mut self, minimum_balance: Decimal) -> Self {
        self.minimum_balance = minimum_balance;
        self
    }

    pub fn set_balance(&mut self, account_number: &str, balance: Decimal) {
        self.balances.insert(account_number.to_string(), balance);
    }

    /// Puts the holder of `account` on the stop list.
    pub fn add_stop_list_entry(&mut self, account: &AccountInfo, info: StopListInfo) {
        match account {
            AccountInfo::Physical(p) => {
                self.physical_stop_list.insert(
                    (p.document_series.clone(), p.document_number.clone()),
                    info,
                );
            }
            AccountInfo::Juridical(j) => {
                self.juridical_stop_list.insert(j.inn.clone(), info);
            }
        }
    }

    /// Operations waiting for manual review, oldest first.
    pub fn pending_operations(&self) -> Vec<Operation> {
        let mut pending: Vec<Operation> = self
            .operations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        pending.sort_by_key(|op| op.create_date);
        pending
    }

    pub fn executed_transfers(&self) -> Vec<TransferRequest> {
        self.outbox
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for BackOffice {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceVerifier for BackOffice {
    fn verify_balance(&self, account: &AccountInfo) -> bool {
        match self.balances.get(account.account_number()) {
            Some(balance) => *balance > self.minimum_balance,
            None => {
                debug!("unknown account {}", account.account_number());
                false
            }
        }
    }
}

// Anyone not on the list is clear.
impl ComplianceScreener for BackOffice {
    fn physical_stop_list_info(&self, request: &PhysicalStopListRequest) -> StopListInfo {
        self.physical_stop_list
            .get(&(request.document_series.clone(), request.document_number.clone()))
            .cloned()
            .unwrap_or_else(StopListInfo::clear)
    }

    fn juridical_stop_list_info(&self, request: &JuridicalStopListRequest) -> StopListInfo {
        self.juridical_stop_list
            .get(&request.inn)
            .cloned()
            .unwrap_or_else(StopListInfo::clear)
    }
}

impl AuditRecorder for BackOffice {
    fn save_operation(&self, operation: &Operation) -> Result<(), AuditError> {
        let mut operations = self
            .operations
            .lock()
            .map_err(|e| AuditError::Storage(e.to_string()))?;
        operations.insert(operation.id, operation.clone());
        Ok(())
    }

    fn remove_operation(&self, id: &Uuid) -> Result<(), AuditError> {
        let mut operations = self
            .operations
            .lock()
            .map_err(|e| AuditError::Storage(e.to_string()))?;
        operations
            .remove(id)
            .map(|_| ())
            .ok_or(AuditError::NotFound(*id))
    }
}

impl TransferExecutor for BackOffice {
    fn execute(&self, request: &TransferRequest) -> Result<(), ExecutionError> {
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|e| ExecutionError::Unavailable(e.to_string()))?;
        outbox.push(request.clone());
        info!(
            "queued {} -> {} for the change propagation consumer",
            request.src_account().account_number(),
            request.dst_account().account_number()
        );
        Ok(())
    }
}
