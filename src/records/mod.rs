pub mod record;

pub use record::{AccountKind, AccountRecord, RecordError, TransferOutcomeRecord, TransferRecord};
