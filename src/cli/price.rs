//! Affiliate price command

use crate::config::PricingConfig;
use crate::pricing::{AffiliateConfig, AffiliateConfigCache, StaticConfigSource};
use clap::Args;
use rust_decimal::Decimal;
use std::fmt::Write;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Base monthly price in USD
    pub base: Decimal,

    /// Discount percent; defaults to the configured value
    #[arg(long)]
    pub discount: Option<Decimal>,
}

impl PriceArgs {
    /// Price breakdown, amounts shown to the cent
    pub async fn render(&self, pricing: &PricingConfig) -> anyhow::Result<String> {
        anyhow::ensure!(
            self.base >= Decimal::ZERO,
            "base price must not be negative, got {}",
            self.base
        );

        let cache = AffiliateConfigCache::new(
            StaticConfigSource::from_pricing(pricing)?,
            Duration::from_secs(pricing.refresh_interval_secs),
        );
        let current = cache.get().await;
        let config = match self.discount {
            Some(discount) => AffiliateConfig::new(discount, current.commission_percent)?,
            None => current,
        };

        let price = config.discounted_price(self.base);
        let mut out = String::new();
        writeln!(out, "Base:       ${:.2}", self.base)?;
        writeln!(out, "Discount:   {}%", config.discount_percent)?;
        writeln!(out, "Price:      ${price:.2}")?;
        writeln!(
            out,
            "Commission: ${:.2} ({}%)",
            config.commission(price),
            config.commission_percent
        )?;
        Ok(out)
    }

    pub async fn execute(&self, pricing: &PricingConfig) -> anyhow::Result<()> {
        print!("{}", self.render(pricing).await?);
        Ok(())
    }
}
