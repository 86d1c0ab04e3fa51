use ofx_statement_rs::{ExtractorBuilder, OfxExtractor};
use std::env;

const SAMPLE_OFX: &str = r#"OFXHEADER:100
DATA:OFXSGML
VERSION:102

<OFX>
<BANKMSGSRSV1>
<STMTTRNRS>
<TRNUID>1
<STMTRS>
<CURDEF>USD
<BANKACCTFROM>
<BANKID>021000021
<ACCTID>1234567890
<ACCTTYPE>CHECKING
</BANKACCTFROM>
<BANKTRANLIST>
<DTSTART>20090101
<DTEND>20090131
<STMTTRN>
<TRNTYPE>DEBIT
<DTPOSTED>20090115
<TRNAMT>-123.45
<FITID>900123
<NAME>Grocery Store
<MEMO>Weekly shopping
</STMTTRN>
<STMTTRN>
<TRNTYPE>CHECK
<DTPOSTED>20090120
<TRNAMT>-500.00
<FITID>900124
<CHECKNUM>2042
<NAME>Rent
</STMTTRN>
</BANKTRANLIST>
</STMTRS>
</STMTTRNRS>
</BANKMSGSRSV1>
</OFX>"#;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let statements = if let Some(path) = args.get(1) {
        println!("Extracting statements from: {}\n", path);

        if !OfxExtractor::is_supported(Some(path), "") {
            println!("note: {} does not carry an .ofx/.qfx extension", path);
        }

        ExtractorBuilder::new().filepath(path).extract()
    } else {
        println!("No file given, extracting from the built-in sample.");
        println!("Usage: cargo run --example extract_ofx [path/to/statement.ofx]\n");

        ExtractorBuilder::new().content(SAMPLE_OFX).extract()
    };

    println!("Found {} statement(s)\n", statements.len());

    for statement in &statements {
        println!("Account {}:", statement.account_id);
        for txn in &statement.transactions {
            println!(
                "  {} | {} | {} | {}",
                txn.date,
                txn.amount.map(|a| a.to_string()).unwrap_or_else(|| "n/a".to_string()),
                txn.trn_type,
                if txn.name.is_empty() { "-" } else { txn.name.as_str() },
            );
            if !txn.memo.is_empty() {
                println!("      memo: {}", txn.memo);
            }
        }
        println!();
    }
}
