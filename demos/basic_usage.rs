// ============================================================================
// Basic Usage Example
// ============================================================================

use ledger_decimal::prelude::*;

fn main() -> NumericResult<()> {
    #[cfg(feature = "logging")]
    ledger_decimal::utils::init_logging();

    println!("=== Ledger Decimal Example ===\n");

    // Validated ingestion
    let balance: LedgerDecimal = "1500.75".parse()?;
    let deposit = LedgerDecimal::from_u64(250)?;
    println!("Balance: {}", balance);
    println!("Deposit: {}", deposit);

    for input in ["-1", "4398046511104", "12.5.3"] {
        match input.parse::<LedgerDecimal>() {
            Ok(value) => println!("Accepted {:?}: {}", input, value),
            Err(err) => println!("Rejected {:?}: {}", input, err),
        }
    }

    // Arithmetic never mutates operands
    let updated = &balance + &deposit;
    println!("\nAfter deposit: {}", updated);

    let share = updated.checked_div(&LedgerDecimal::from_u64(3)?)?;
    println!("One third: {:.18}", share);
    println!("Remainder mod 7: {}", updated.checked_rem(&LedgerDecimal::from_u64(7)?)?);

    // Roots
    let two = LedgerDecimal::new(2.0);
    println!("\nsqrt(2) = {:.40}", two.sqrt()?);
    println!("cbrt(1750.75) = {:.20}", updated.root(3)?);

    // Fixed-point codec
    let bytes = encode(&updated)?;
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    println!("\nEncoded ({} bytes): {}", ENCODED_LEN, hex);
    println!("Decoded: {}", decode(&bytes));

    let overdraft = &balance - &LedgerDecimal::from_u64(2000)?;
    match encode(&overdraft) {
        Ok(_) => println!("Encoded overdraft?!"),
        Err(err) => println!("Overdraft {} not encodable: {}", overdraft, err),
    }

    Ok(())
}
