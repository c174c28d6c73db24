use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

const MIN_HOLDERS: u64 = 100;
const MIN_MARKET_CAP: f64 = 100_000.0;

/// Concentração e tamanho do token de destino. Dados ausentes não disparam.
pub struct TokenCheck;

#[async_trait]
impl RiskCheck for TokenCheck {
    fn name(&self) -> &str {
        "TokenCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Token
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let token = &ctx.to_token;

        if let Some(holders) = token.holders.filter(|h| *h < MIN_HOLDERS) {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Token,
                Severity::High,
                format!("Very few holders for {} ({} < {})", token.symbol, holders, MIN_HOLDERS),
                "High concentration risk: a few holders can move the price",
            ));
        }

        if let Some(market_cap) = token.market_cap.filter(|m| *m < MIN_MARKET_CAP) {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Token,
                Severity::Medium,
                format!(
                    "Very low market cap for {} ({} < {})",
                    token.symbol, market_cap, MIN_MARKET_CAP
                ),
                "Token may be illiquid or easily manipulated",
            ));
        }

        CheckOutcome::Clear
    }
}
