pub mod accounts;
pub mod engine;
pub mod operations;
pub mod orchestrator;
pub mod records;
pub mod screening;
pub mod services;

pub use accounts::{AccountInfo, JuridicalAccountInfo, PhysicalAccountInfo, TransferRequest};
pub use engine::BackOffice;
pub use operations::Operation;
pub use orchestrator::{run, MoneyTransferService, TransferError, TransferOrchestrator};
pub use screening::{StopListInfo, StopListStatus};
