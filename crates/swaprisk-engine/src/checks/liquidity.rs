use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

/// Fração máxima da liquidez de origem que um swap pode consumir
const MAX_LIQUIDITY_SHARE: f64 = 0.1;
/// Liquidez mínima (USD) do token de destino
const MIN_DESTINATION_LIQUIDITY: f64 = 100_000.0;

/// Verifica o tamanho do swap contra a liquidez disponível.
///
/// A regra HIGH usa a liquidez do token de origem e a regra MEDIUM a do
/// token de destino (capacidade de saída contra profundidade de entrada).
pub struct LiquidityCheck;

#[async_trait]
impl RiskCheck for LiquidityCheck {
    fn name(&self) -> &str {
        "LiquidityCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Liquidity
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        if !ctx.config.unknown_liquidity_is_high_risk
            && ctx.from_token.liquidity.is_none()
            && ctx.to_token.liquidity.is_none()
        {
            return CheckOutcome::Skipped("liquidity unknown for both tokens".to_string());
        }

        let from_liquidity = ctx.from_token.liquidity_or_zero();
        let to_liquidity = ctx.to_token.liquidity_or_zero();

        if ctx.amount > from_liquidity * MAX_LIQUIDITY_SHARE {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Liquidity,
                Severity::High,
                format!(
                    "Swap amount ({}) exceeds 10% of available liquidity ({} {})",
                    ctx.amount, from_liquidity, ctx.from_token.symbol
                ),
                "High price impact and potential for significant slippage",
            ));
        }

        if to_liquidity < MIN_DESTINATION_LIQUIDITY {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Liquidity,
                Severity::Medium,
                format!(
                    "Low liquidity for destination token {} ({} < {})",
                    ctx.to_token.symbol, to_liquidity, MIN_DESTINATION_LIQUIDITY
                ),
                "Swap may execute at a worse price than quoted",
            ));
        }

        CheckOutcome::Clear
    }
}
