use clap::Parser;
use tier_gate::cli::{show_tiers, Cli, Commands};
use tier_gate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = tier_gate::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Tiers => show_tiers(),
        Commands::Symbols(args) => args.list_symbols(),
        Commands::Timeframes(args) => args.list_timeframes(),
        Commands::Check(args) => args.execute()?,
        Commands::Quota(args) => args.execute()?,
        Commands::Price(args) => args.execute(&config.pricing).await?,
        Commands::Trial(args) => args.execute(&config.trial.policy())?,
        Commands::Token(args) => args.execute(&config.tokens)?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Pricing: discount={}%, commission={}%, refresh={}s",
                config.pricing.discount_percent,
                config.pricing.commission_percent,
                config.pricing.refresh_interval_secs
            );
            println!("  Trial: {} days", config.trial.duration_days);
            println!("  Tokens: reset TTL={}s", config.tokens.reset_token_ttl_secs);
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
