//! Portfolio Evaluation Example
//!
//! Demonstrates loading exchange rates from CSV, converting money between
//! currencies, and evaluating a multi-currency portfolio.
//!
//! Run with `RUST_LOG=debug` to see evaluation diagnostics.

use moneta::bank::Bank;
use moneta::currency::Currency;
use moneta::money::Money;
use moneta::portfolio::Portfolio;
use moneta::rates::ExchangeRateTable;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Portfolio Evaluation Example ===\n");

    // 1. Load exchange rates from CSV
    println!("1. Loading exchange rates from CSV...");

    let csv_data = "from,to,rate\n\
                    EUR,USD,1.2\n\
                    USD,KRW,1100\n\
                    GBP,USD,1.3";

    let table = ExchangeRateTable::from_csv(csv_data)?;
    println!("  ✓ Loaded {} rates", table.len());
    for (pair, rate) in table.iter() {
        println!("    {} = {}", pair, rate);
    }
    println!();

    // 2. Build the bank
    println!("2. Building bank...");
    let bank = Bank::from(table).add_exchange_rate(Currency::USD, Currency::CHF, 0.9);
    println!("  ✓ Bank holds {} rates\n", bank.rates().len());

    // 3. Convert money between currencies
    println!("3. Converting money...");

    let ten_euros = Money::new(10.0, Currency::EUR);
    let in_dollars = bank.convert(ten_euros, Currency::USD)?;
    println!("  ✓ {} converts to {}", ten_euros, in_dollars);

    let same = bank.convert(ten_euros, Currency::EUR)?;
    println!("  ✓ Same-currency conversion: {} stays {}", ten_euros, same);

    match bank.convert(ten_euros, Currency::KRW) {
        Ok(money) => println!("  ✓ {}", money),
        Err(e) => println!("  ✗ Error: {}", e),
    }
    println!();

    // 4. Money arithmetic
    println!("4. Money arithmetic...");

    let five_dollars = Money::new(5.0, Currency::USD);
    println!("  ✓ {} times 2 = {}", five_dollars, five_dollars.times(2.0));

    let wons = Money::new(4002.0, Currency::KRW);
    println!("  ✓ {} divided by 4 = {}", wons, wons.divide(4.0));
    println!();

    // 5. Evaluate a portfolio
    println!("5. Evaluating portfolio in USD...");

    let portfolio = Portfolio::new()
        .add(Money::new(5.0, Currency::USD))
        .add(Money::new(10.0, Currency::EUR))
        .add(Money::new(20.0, Currency::GBP));

    let total = portfolio.evaluate(&bank, Currency::USD)?;
    println!("  ✓ {} holdings total {}\n", portfolio.len(), total);

    // 6. Evaluation with missing rates fails as a whole
    println!("6. Evaluating the same portfolio in KRW...");

    match portfolio.evaluate(&bank, Currency::KRW) {
        Ok(total) => println!("  ✓ Total: {}", total),
        Err(e) => println!("  ✗ Error: {}", e),
    }
    println!();

    // 7. Serialize the portfolio
    println!("7. Portfolio as JSON:");
    println!("{}\n", serde_json::to_string_pretty(&portfolio)?);

    println!("=== Example Complete ===");

    Ok(())
}
