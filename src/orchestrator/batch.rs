use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{Read, Write};

use csv::{ReaderBuilder, Writer};
use log::info;
use rust_decimal::Decimal;

use crate::accounts::{AccountInfo, TransferRequest};
use crate::engine::BackOffice;
use crate::orchestrator::orchestrator::MoneyTransferService;
use crate::records::{AccountRecord, RecordError, TransferOutcomeRecord, TransferRecord};
use crate::screening::StopListInfo;

pub fn run(
    accounts_path: &str,
    transfers_path: &str,
    minimum_balance: Decimal,
) -> Result<(), Box<dyn Error>> {
    let accounts = File::open(accounts_path)?;
    let transfers = File::open(transfers_path)?;

    let office = process(accounts, transfers, std::io::stdout(), minimum_balance)?;

    info!(
        "{} transfers executed, {} operations waiting for manual review",
        office.executed_transfers().len(),
        office.pending_operations().len()
    );
    Ok(())
}

/// Loads the accounts into a fresh back office, runs every transfer through
/// it and writes one outcome row per transfer to `writer`.
pub fn process<A: Read, T: Read, W: Write>(
    accounts: A,
    transfers: T,
    writer: W,
    minimum_balance: Decimal,
) -> Result<BackOffice, Box<dyn Error>> {
    let mut office = BackOffice::new().with_minimum_balance(minimum_balance);
    let mut directory: HashMap<String, AccountInfo> = HashMap::new();

    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(accounts);
    for result in rdr.deserialize() {
        let record: AccountRecord = result?;
        let info = AccountInfo::try_from(&record)?;

        office.set_balance(&record.account, record.balance);
        let screening = StopListInfo::new(record.status);
        if !screening.is_clear() {
            office.add_stop_list_entry(&info, screening);
        }
        directory.insert(record.account, info);
    }
    info!("loaded {} accounts", directory.len());

    let lookup = |number: &str| {
        directory
            .get(number)
            .cloned()
            .ok_or_else(|| RecordError::UnknownAccount(number.to_string()))
    };

    let service = MoneyTransferService::new(&office, &office, &office, &office);
    let mut wtr = Writer::from_writer(writer);

    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(transfers);
    for result in rdr.deserialize() {
        let record: TransferRecord = result?;
        let request = TransferRequest::new(lookup(&record.src)?, lookup(&record.dst)?);

        let outcome = match service.transfer(request) {
            Ok(()) => TransferOutcomeRecord {
                src: record.src,
                dst: record.dst,
                result: "EXECUTED",
                operation: None,
            },
            Err(e) => TransferOutcomeRecord {
                src: record.src,
                dst: record.dst,
                result: e.code(),
                operation: e.pending_operation(),
            },
        };
        wtr.serialize(outcome)?;
    }
    wtr.flush()?;

    Ok(office)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::StopListStatus;

    const ACCOUNTS: &str = "\
account,kind,firstname,lastname,middlename,document_number,document_series,inn,balance,status
A1,physical,Ivan,Petrov,Sergeevich,123456,4510,,500.00,clear
A2,physical,Olga,Sidorova,,654321,4511,,0,clear
B1,juridical,,,,,,7707083893,10000,clear
B2,juridical,,,,,,7736207543,10000,flagged
";

    fn output(bytes: Vec<u8>) -> Vec<Vec<String>> {
        ReaderBuilder::new()
            .from_reader(bytes.as_slice())
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_outcome_per_transfer() {
        let transfers = "src,dst\nA1,B1\nA1,B2\nA2,B1\n";
        let mut out = Vec::new();

        let office = process(ACCOUNTS.as_bytes(), transfers.as_bytes(), &mut out, Decimal::ZERO)
            .unwrap();

        let rows = output(out);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["A1", "B1", "EXECUTED", ""]);
        assert_eq!(rows[1][2], "MANUAL_INTERVENTION_REQUIRED");
        assert_eq!(rows[2], vec!["A2", "B1", "INSUFFICIENT_BALANCE", ""]);

        let pending = office.pending_operations();
        assert_eq!(pending.len(), 1);
        assert_eq!(rows[1][3], pending[0].id.to_string());
        assert_eq!(pending[0].dst_stoplist_info.status, StopListStatus::Flagged);
        assert_eq!(office.executed_transfers().len(), 1);
    }

    #[test]
    fn test_minimum_balance_applies() {
        let transfers = "src,dst\nA1,B1\n";
        let mut out = Vec::new();

        process(
            ACCOUNTS.as_bytes(),
            transfers.as_bytes(),
            &mut out,
            Decimal::new(1000, 0),
        )
        .unwrap();

        assert_eq!(output(out)[0][2], "INSUFFICIENT_BALANCE");
    }

    #[test]
    fn test_unknown_account_is_an_error() {
        let transfers = "src,dst\nA1,Z9\n";
        let err = process(ACCOUNTS.as_bytes(), transfers.as_bytes(), Vec::new(), Decimal::ZERO)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown account: Z9");
    }
}
