pub mod ports;

pub use ports::{
    AuditError, AuditRecorder, BalanceVerifier, ComplianceScreener, ExecutionError,
    TransferExecutor,
};
