use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::{AccountInfo, JuridicalAccountInfo, PhysicalAccountInfo};
use crate::screening::StopListStatus;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Account {account}: missing {field}")]
    MissingField {
        account: String,
        field: &'static str,
    },

    #[error("Unknown account: {0}")]
    UnknownAccount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Physical,
    Juridical,
}

/// One row of the accounts file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub account: String,
    pub kind: AccountKind,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub middlename: Option<String>,
    pub document_number: Option<String>,
    pub document_series: Option<String>,
    pub inn: Option<String>,
    pub balance: Decimal,
    pub status: StopListStatus,
}

impl AccountRecord {
    fn required(&self, value: &Option<String>, field: &'static str) -> Result<String, RecordError> {
        match value {
            Some(v) if !v.is_empty() => Ok(v.clone()),
            _ => Err(RecordError::MissingField {
                account: self.account.clone(),
                field,
            }),
        }
    }
}

impl TryFrom<&AccountRecord> for AccountInfo {
    type Error = RecordError;

    fn try_from(record: &AccountRecord) -> Result<Self, Self::Error> {
        match record.kind {
            AccountKind::Physical => Ok(AccountInfo::Physical(PhysicalAccountInfo {
                account_number: record.account.clone(),
                firstname: record.required(&record.firstname, "firstname")?,
                lastname: record.required(&record.lastname, "lastname")?,
                // Not everyone has a patronymic.
                middlename: record.middlename.clone().unwrap_or_default(),
                document_number: record.required(&record.document_number, "document_number")?,
                document_series: record.required(&record.document_series, "document_series")?,
            })),
            AccountKind::Juridical => Ok(AccountInfo::Juridical(JuridicalAccountInfo {
                account_number: record.account.clone(),
                inn: record.required(&record.inn, "inn")?,
            })),
        }
    }
}

/// One row of the transfers file.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRecord {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcomeRecord {
    pub src: String,
    pub dst: String,
    pub result: &'static str,
    pub operation: Option<Uuid>,
}


#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;

    fn parse(data: &str) -> Vec<AccountRecord> {
        ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes())
            .deserialize()
            .map(|r| r.unwrap())
            .collect()
    }

    const HEADER: &str =
        "account,kind,firstname,lastname,middlename,document_number,document_series,inn,balance,status\n";

    #[test]
    fn test_physical_row() {
        let records = parse(&format!(
            "{HEADER}A1, physical, Ivan, Petrov, , 123456, 4510, , 250.75, clear\n"
        ));
        let info = AccountInfo::try_from(&records[0]).unwrap();
        match info {
            AccountInfo::Physical(p) => {
                assert_eq!(p.account_number, "A1");
                assert_eq!(p.middlename, "");
                assert_eq!(p.document_series, "4510");
            }
            other => panic!("expected physical account, got {:?}", other),
        }
        assert_eq!(records[0].balance, Decimal::new(25075, 2));
    }

    #[test]
    fn test_juridical_row() {
        let records = parse(&format!(
            "{HEADER}B2,juridical,,,,,,7707083893,1000,ask_security\n"
        ));
        assert_eq!(records[0].status, StopListStatus::AskSecurity);
        assert!(matches!(
            AccountInfo::try_from(&records[0]).unwrap(),
            AccountInfo::Juridical(j) if j.inn == "7707083893"
        ));
    }

    #[test]
    fn test_missing_identity_fields() {
        let records = parse(&format!(
            "{HEADER}B2,juridical,,,,,,,1000,clear\nA1,physical,Ivan,Petrov,,,4510,,10,clear\n"
        ));
        assert!(matches!(
            AccountInfo::try_from(&records[0]),
            Err(RecordError::MissingField { field: "inn", .. })
        ));
        assert!(matches!(
            AccountInfo::try_from(&records[1]),
            Err(RecordError::MissingField { field: "document_number", .. })
        ));
    }
}
