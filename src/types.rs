use crate::ofx::PostingDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One account's statement response extracted from an OFX document.
///
/// Only produced with an account id; responses without one are skipped
/// during extraction. Transactions keep document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account_id: String,
    pub transactions: Vec<Transaction>,
}

/// One financial transaction pulled out of a statement's transaction list.
///
/// Every field is extracted independently: `amount` is `None` when no amount
/// pattern matched (absent is not zero), while the text fields collapse to
/// empty strings when their tag is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: PostingDate,
    /// Amount rescaled to exactly two fractional digits
    pub amount: Option<Decimal>,
    pub fitid: String,
    pub trn_type: String,
    pub checknum: String,
    pub name: String,
    pub memo: String,
}
