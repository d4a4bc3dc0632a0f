pub mod batch;
pub mod error;
pub mod orchestrator;

pub use batch::{process, run};
pub use error::TransferError;
pub use orchestrator::{MoneyTransferService, TransferOrchestrator};
