use anyhow::Context;
use clap::Parser;
use gym_pricing::app::{presenter, quote::build_quote};
use gym_pricing::core::session::on_interrupt;
use gym_pricing::utils::{logger, validation::Validate};
use gym_pricing::{
    CliConfig, Command, Console, PricingConfig, QuoteArgs, SessionOutcome, SignupSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading pricing configuration from: {}", path.display());
            PricingConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?
        }
        None => PricingConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match cli.command {
        None => run_interactive(config).await,
        Some(Command::Catalog) => {
            for line in presenter::catalog_lines(&config) {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Quote(args)) => run_quote(&config, &args),
    }
}

async fn run_interactive(config: PricingConfig) -> anyhow::Result<()> {
    tokio::spawn(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl+C received, exiting");
                std::process::exit(on_interrupt(&mut std::io::stdout()));
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    let outcome = tokio::task::spawn_blocking(move || {
        let mut session = SignupSession::new(config, Console::stdio());
        session.run()
    })
    .await
    .context("sign-up session stopped unexpectedly")??;

    if let SessionOutcome::Confirmed(quote) = outcome {
        tracing::debug!(adjustments = ?quote.breakdown.adjustments, "Final quote");
    }
    Ok(())
}

fn run_quote(config: &PricingConfig, args: &QuoteArgs) -> anyhow::Result<()> {
    let quote = match build_quote(config, &args.plan, &args.features, &args.group_size) {
        Ok(quote) => quote,
        Err(e) => {
            tracing::error!("❌ Quote failed: {:?}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&quote).context("failed to serialize quote")?;
        println!("{}", json);
    } else {
        for line in presenter::summary_lines(&quote) {
            println!("{}", line);
        }
    }
    Ok(())
}
