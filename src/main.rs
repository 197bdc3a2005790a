use clap::Parser;
use phone_formatter::adapters::serve;
use phone_formatter::config::Command;
use phone_formatter::utils::{logger, validation::Validate};
use phone_formatter::{CliConfig, LibPhoneNumber, PhoneFormatter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting phone-formatter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let formatter = PhoneFormatter::new(LibPhoneNumber::new());
    tracing::debug!("Phone number backend: {}", formatter.backend());

    match config.command {
        Command::Format(args) => {
            let failures = formatter.format_all(
                &args.numbers,
                args.json,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            if failures > 0 {
                tracing::error!("❌ {} of {} numbers failed", failures, args.numbers.len());
                std::process::exit(1);
            }
        }
        Command::Serve(args) => {
            if let Err(e) = args.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }

            if let Err(e) = serve::serve(formatter, &args).await {
                tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
        }
    }

    Ok(())
}
