use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

/// Valor (USD) a partir do qual o swap se torna alvo de bots
const MEV_ATTRACTIVE_AMOUNT: f64 = 10_000.0;

pub struct MevCheck;

#[async_trait]
impl RiskCheck for MevCheck {
    fn name(&self) -> &str {
        "MevCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Mev
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        if ctx.amount > MEV_ATTRACTIVE_AMOUNT {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Mev,
                Severity::Medium,
                format!(
                    "Large swap ({} > {}) may attract MEV bots",
                    ctx.amount, MEV_ATTRACTIVE_AMOUNT
                ),
                "Risk of front-running or sandwich attacks",
            ));
        }

        CheckOutcome::Clear
    }
}
