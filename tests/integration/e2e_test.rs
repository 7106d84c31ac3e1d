//! End-to-end integration tests

use clap::Parser;
use rust_decimal_macros::dec;
use tier_gate::cli::{Cli, Commands};
use tier_gate::config::Config;
use tier_gate::telemetry::LogFormat;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    config.validate().unwrap();

    assert_eq!(config.pricing.discount_percent, dec!(20));
    assert_eq!(config.pricing.commission_percent, dec!(20));
    assert_eq!(config.trial.duration_days, 7);
    assert_eq!(config.tokens.reset_token_ttl_secs, 3600);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    assert!(config.telemetry.metrics_port.is_none());
}

#[tokio::test]
async fn test_price_command_uses_configured_discount() {
    let cli = Cli::parse_from(["tier-gate", "price", "29"]);
    let Commands::Price(args) = cli.command else {
        panic!("expected price command");
    };
    assert!(args.discount.is_none());

    let mut config = Config::default();
    config.pricing.discount_percent = dec!(50);
    let out = args.render(&config.pricing).await.unwrap();
    assert!(out.contains("Discount:   50%\n"));
    assert!(out.contains("Price:      $14.50\n"));
    assert!(out.contains("Commission: $2.90 (20%)\n"));
}

#[test]
fn test_check_command_reports_upgrade() {
    let cli = Cli::parse_from(["tier-gate", "check", "free", "GBPUSD"]);
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };
    let out = args.render().unwrap();
    assert!(out.starts_with("DENY: "));
    assert!(out.contains("GBPUSD"));
    assert!(out.contains("Upgrade to PRO"));
}

#[test]
fn test_quota_command_parses_resource() {
    let cli = Cli::parse_from(["tier-gate", "quota", "PRO", "watchlist", "49"]);
    let Commands::Quota(args) = cli.command else {
        panic!("expected quota command");
    };
    assert_eq!(args.count, 49);
    assert_eq!(args.render(), "ALLOW: watchlist_items 49/50 used, 1 remaining");
}

#[test]
fn test_trial_command_runs_against_config_policy() {
    let cli = Cli::parse_from([
        "tier-gate",
        "trial",
        "--granted-at",
        "2024-01-01T00:00:00Z",
        "--at",
        "2024-01-09T00:00:00Z",
    ]);
    let Commands::Trial(args) = cli.command else {
        panic!("expected trial command");
    };
    let out = args.render(&Config::default().trial.policy()).unwrap();
    assert!(out.contains("Effective tier: FREE\n"));

    let mut config = Config::default();
    config.trial.duration_days = 14;
    let out = args.render(&config.trial.policy()).unwrap();
    assert!(out.contains("Effective tier: PRO\n"));
    assert!(out.contains("Days remaining: 6\n"));
}
