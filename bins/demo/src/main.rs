//! Coinpurse demo
//!
//! Builds sample purses and prints the result of each collection utility.
//!
//! Usage: cargo run --bin coinpurse

use std::io::{self, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinpurse_core::purse::{ValuableUtil, join_list, print_list, print_sum_by_currency};
use coinpurse_core::samples::make_international_coins;
use coinpurse_core::valuable::{BankNote, Cash, Coin};
use coinpurse_shared::AppConfig;
use coinpurse_shared::types::Currency;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the demo output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinpurse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()?;
    info!(
        filter_currency = %config.demo.filter_currency,
        seed = ?config.demo.seed,
        "Configuration loaded"
    );

    let mut rng = match config.demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut rng, &mut out)?;
    out.flush()?;

    info!("Demo complete");
    Ok(())
}

/// Runs every demonstration, writing to `out`.
fn run<W: Write>(config: &AppConfig, rng: &mut StdRng, out: &mut W) -> anyhow::Result<()> {
    let separator = config.demo.separator.as_str();
    let currency = config.demo.filter_currency.as_str();

    writeln!(out, "Filter coins by currency of {currency}")?;
    let coins = make_international_coins(rng)?;
    let size = coins.len();
    write!(out, " INPUT: ")?;
    print_list(&coins, separator, out)?;
    let filtered = ValuableUtil::filter_by_currency(&coins, currency)?;
    write!(out, "RESULT: ")?;
    print_list(&filtered, separator, out)?;
    if coins.len() != size {
        writeln!(out, "Error: you changed the original list.")?;
    }

    writeln!(out, "\nSort coins by currency")?;
    let mut coins = make_international_coins(rng)?;
    write!(out, " INPUT: ")?;
    print_list(&coins, separator, out)?;
    ValuableUtil::sort_by_currency(&mut coins);
    write!(out, "RESULT: ")?;
    print_list(&coins, separator, out)?;

    writeln!(out, "\nSum coins by currency")?;
    let coins = make_international_coins(rng)?;
    write!(out, "coins= ")?;
    print_list(&coins, separator, out)?;
    // The next list continues the report's line.
    print_sum_by_currency(&coins, out)?;

    let default_currency = Currency::new(config.purse.default_currency.as_str())?;
    let small = vec![
        Coin::new(dec!(5), default_currency.clone()),
        Coin::new(dec!(1), default_currency.clone()),
        Coin::new(dec!(10), default_currency.clone()),
    ];
    let ringgits = ValuableUtil::filter_by_currency(&small, "Ringgit")?;
    writeln!(out, "[{}]", join_list(&ringgits, ", "))?;

    let max = ValuableUtil::max([
        Cash::from(Coin::new(dec!(5), default_currency.clone())),
        Cash::from(Coin::new(dec!(10), default_currency.clone())),
        Cash::from(Coin::new(dec!(2), default_currency.clone())),
        Cash::from(Coin::new(dec!(1), default_currency.clone())),
        Cash::from(BankNote::new(dec!(100), default_currency)),
    ])?;
    writeln!(out, "{max}")?;

    Ok(())
}
