/// Account held by a natural person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalAccountInfo {
    pub account_number: String,
    pub firstname: String,
    pub lastname: String,
    pub middlename: String,
    pub document_number: String,
    pub document_series: String,
}

/// Account held by a legal entity, identified by its taxpayer number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JuridicalAccountInfo {
    pub account_number: String,
    pub inn: String,
}

/// Either side of a transfer.
///
/// The variant decides which stop list request is built for the holder;
/// nothing else in the transfer flow depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountInfo {
    Physical(PhysicalAccountInfo),
    Juridical(JuridicalAccountInfo),
}

impl AccountInfo {
    pub fn account_number(&self) -> &str {
        match self {
            AccountInfo::Physical(info) => &info.account_number,
            AccountInfo::Juridical(info) => &info.account_number,
        }
    }
}

impl From<PhysicalAccountInfo> for AccountInfo {
    fn from(info: PhysicalAccountInfo) -> Self {
        AccountInfo::Physical(info)
    }
}

impl From<JuridicalAccountInfo> for AccountInfo {
    fn from(info: JuridicalAccountInfo) -> Self {
        AccountInfo::Juridical(info)
    }
}

/// A single transfer from `src_account` to `dst_account`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    src_account: AccountInfo,
    dst_account: AccountInfo,
}

impl TransferRequest {
    pub fn new(src_account: impl Into<AccountInfo>, dst_account: impl Into<AccountInfo>) -> Self {
        Self {
            src_account: src_account.into(),
            dst_account: dst_account.into(),
        }
    }

    pub fn src_account(&self) -> &AccountInfo {
        &self.src_account
    }

    pub fn dst_account(&self) -> &AccountInfo {
        &self.dst_account
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn physical() -> PhysicalAccountInfo {
        PhysicalAccountInfo {
            account_number: "40817810000000000001".to_string(),
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            middlename: "Sergeevich".to_string(),
            document_number: "123456".to_string(),
            document_series: "4510".to_string(),
        }
    }

    fn juridical() -> JuridicalAccountInfo {
        JuridicalAccountInfo {
            account_number: "40702810000000000002".to_string(),
            inn: "7707083893".to_string(),
        }
    }

    #[test]
    fn test_account_number_for_both_kinds() {
        let src: AccountInfo = physical().into();
        let dst: AccountInfo = juridical().into();
        assert_eq!(src.account_number(), "40817810000000000001");
        assert_eq!(dst.account_number(), "40702810000000000002");
    }

    #[test]
    fn test_request_keeps_sides_in_order() {
        let request = TransferRequest::new(physical(), juridical());
        assert!(matches!(request.src_account(), AccountInfo::Physical(_)));
        assert!(matches!(request.dst_account(), AccountInfo::Juridical(_)));
    }
}
