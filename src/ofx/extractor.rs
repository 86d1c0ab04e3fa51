use log::warn;
use regex::Regex;
use rust_decimal::Decimal;

use super::amount::parse_amount;
use super::date::PostingDate;
use crate::types::{Statement, Transaction};

/// Scan-and-extract engine for OFX statement downloads.
///
/// Works directly on the tag-delimited text: statement responses are located
/// with non-greedy region scans and every transaction field is searched for
/// independently, so partial or malformed documents degrade to whatever can
/// be found instead of failing. The only block-level requirement is an
/// `ACCTID`; a response without one is skipped.
pub struct OfxExtractor {
    decimal_separator: char,
    stmt_rs: Regex,
    acct_id: Regex,
    tran_list: Regex,
    stmt_trn: Regex,
    dt_posted: Regex,
    trn_amt: Regex,
    fitid: Regex,
    trn_type: Regex,
    checknum: Regex,
    name: Regex,
    memo: Regex,
}

impl OfxExtractor {
    pub fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            stmt_rs: Regex::new(r"(?s)<STMTTRNRS>(.*?)</STMTTRNRS>").unwrap(),
            acct_id: Regex::new(r"<ACCTID>\s*([^\s<]+)").unwrap(),
            tran_list: Regex::new(r"(?s)<BANKTRANLIST>(.*?)</BANKTRANLIST>").unwrap(),
            stmt_trn: Regex::new(r"(?s)<STMTTRN>(.*?)</STMTTRN>").unwrap(),
            dt_posted: Regex::new(r"<DTPOSTED>\s*(\d{4})(\d{2})(\d{2})").unwrap(),
            trn_amt: leaf_value("TRNAMT"),
            fitid: leaf_value("FITID"),
            trn_type: leaf_value("TRNTYPE"),
            checknum: leaf_value("CHECKNUM"),
            name: leaf_value("NAME"),
            memo: leaf_value("MEMO"),
        }
    }

    /// Heuristic check that a file looks like an OFX/QFX statement download,
    /// by extension or by content markers. Advisory only; extraction never
    /// depends on it.
    pub fn is_supported(filename: Option<&str>, content: &str) -> bool {
        if let Some(name) = filename {
            let name = name.to_lowercase();
            if name.ends_with(".ofx") || name.ends_with(".qfx") {
                return true;
            }
        }

        let trimmed = content.trim();
        trimmed.contains("<OFX>")
            || trimmed.contains("OFXHEADER:")
            || trimmed.contains("DATA:OFXSGML")
    }

    /// Extract every statement response found in `document`, in document
    /// order. Empty input yields an empty vector; this never fails.
    pub fn extract(&self, document: &str) -> Vec<Statement> {
        let mut statements = Vec::new();

        for response in self.stmt_rs.captures_iter(document) {
            let region = &response[1];
            let Some(account) = self.acct_id.captures(region) else {
                warn!("statement response without an ACCTID, skipping block");
                continue;
            };

            let mut transactions = Vec::new();
            for list in self.tran_list.captures_iter(region) {
                for block in self.stmt_trn.captures_iter(&list[1]) {
                    transactions.push(self.transaction(&block[1]));
                }
            }

            statements.push(Statement {
                account_id: account[1].to_string(),
                transactions,
            });
        }

        statements
    }

    fn transaction(&self, block: &str) -> Transaction {
        Transaction {
            date: self.posting_date(block),
            amount: self.amount(block),
            fitid: self.leaf_text(&self.fitid, block),
            trn_type: self.leaf_text(&self.trn_type, block),
            checknum: self.leaf_text(&self.checknum, block),
            name: self.leaf_text(&self.name, block),
            memo: self.leaf_text(&self.memo, block),
        }
    }

    fn posting_date(&self, block: &str) -> PostingDate {
        match self.dt_posted.captures(block) {
            Some(caps) => PostingDate::from_parts(&caps[1], &caps[2], &caps[3]),
            None => PostingDate::default(),
        }
    }

    fn amount(&self, block: &str) -> Option<Decimal> {
        let caps = self.trn_amt.captures(block)?;
        parse_amount(&caps[1], self.decimal_separator)
    }

    fn leaf_text(&self, pattern: &Regex, block: &str) -> String {
        pattern
            .captures(block)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    }
}

impl Default for OfxExtractor {
    fn default() -> Self {
        Self::new('.')
    }
}

// Leaf values in OFX are not required to carry closing tags; the value runs
// until the next tag or end of line.
fn leaf_value(tag: &str) -> Regex {
    Regex::new(&format!(r"<{tag}>([^\r\n<]*)")).unwrap()
}
