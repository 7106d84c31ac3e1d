//! Token generation command

use crate::config::TokenConfig;
use crate::token::{generate_reset_token, generate_verification_token, IssuedToken};
use chrono::Utc;
use clap::{Args, ValueEnum};

/// Token purpose as named on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenArg {
    Reset,
    Verify,
}

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Token purpose
    #[arg(value_enum)]
    pub kind: TokenArg,
}

impl TokenArgs {
    pub fn generate(&self, tokens: &TokenConfig) -> IssuedToken {
        match self.kind {
            TokenArg::Reset => generate_reset_token(Utc::now(), tokens.reset_token_ttl()),
            TokenArg::Verify => generate_verification_token(),
        }
    }

    pub fn execute(&self, tokens: &TokenConfig) -> anyhow::Result<()> {
        let token = self.generate(tokens);
        println!("{}", token.value);
        match token.expires_at {
            Some(expires_at) => println!("Expires: {}", expires_at.to_rfc3339()),
            None => println!("Expires: never"),
        }
        Ok(())
    }
}
