use::std::env;
use::std::process;

use log::info;
use rust_decimal::Decimal;
use transfer_gate::run;

fn main() {
    // Accounts file, transfers file and an optional minimum balance
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <accounts.csv> <transfers.csv> [minimum_balance]", args[0]);
        process::exit(1);
    }

    let minimum_balance = match args.get(3) {
        Some(raw) => match raw.parse::<Decimal>() {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Invalid minimum balance {}: {}", raw, e);
                process::exit(1);
            }
        },
        None => Decimal::ZERO,
    };

    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("processing transfers from {} against {}", args[2], args[1]);

    if let Err(e) = run(&args[1], &args[2], minimum_balance) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
