use std::io::BufRead;

use clap::Parser;
use serde_json::Value;
use title_proper::utils::logger;
use title_proper::{filters, CliConfig, FilterError, Result};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting title-proper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list {
        for filter in filters::all() {
            println!("{}", filter.name());
        }
        return;
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Filtering failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let filter = filters::lookup(&config.filter).ok_or_else(|| FilterError::UnknownFilterError {
        name: config.filter.clone(),
    })?;

    let inputs: Vec<String> = if config.text.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<_>>()?
    } else {
        config.text.clone()
    };

    tracing::debug!(
        "Applying filter '{}' to {} input(s)",
        filter.name(),
        inputs.len()
    );

    for input in &inputs {
        if config.json {
            let value: Value = serde_json::from_str(input)?;
            println!("{}", filter.apply(value));
        } else {
            match filter.apply(Value::String(input.clone())) {
                Value::String(s) => println!("{}", s),
                other => println!("{}", other),
            }
        }
    }

    Ok(())
}
