use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

const HIGH_SLIPPAGE: f64 = 5.0;
const TIGHT_SLIPPAGE: f64 = 2.0;
/// Fração da liquidez de destino a partir da qual uma tolerância apertada falha
const LARGE_SWAP_SHARE: f64 = 0.05;

/// Tolerância de slippage alta demais (exposição) ou apertada demais (falha)
pub struct SlippageCheck;

#[async_trait]
impl RiskCheck for SlippageCheck {
    fn name(&self) -> &str {
        "SlippageCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Slippage
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let slippage = ctx.params.slippage_tolerance;
        let liquidity = ctx.to_token.liquidity_or_zero();

        if slippage > HIGH_SLIPPAGE {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Slippage,
                Severity::High,
                format!("High slippage tolerance ({}% > {}%)", slippage, HIGH_SLIPPAGE),
                "Vulnerable to sandwich attacks and unfavorable execution",
            ));
        }

        if ctx.amount > liquidity * LARGE_SWAP_SHARE && slippage < TIGHT_SLIPPAGE {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Slippage,
                Severity::Medium,
                format!(
                    "Slippage tolerance of {}% may be too low for a swap of {} against {} liquidity",
                    slippage, ctx.amount, liquidity
                ),
                "Transaction may revert due to price movement",
            ));
        }

        CheckOutcome::Clear
    }
}
