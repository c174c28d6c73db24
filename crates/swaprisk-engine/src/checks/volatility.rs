use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

const HIGH_VOLATILITY: f64 = 20.0;
const MODERATE_VOLATILITY: f64 = 10.0;

/// Variação de preço em 24h de qualquer um dos dois tokens
pub struct VolatilityCheck;

#[async_trait]
impl RiskCheck for VolatilityCheck {
    fn name(&self) -> &str {
        "VolatilityCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Volatility
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let fv = ctx.from_token.abs_price_change_24h();
        let tv = ctx.to_token.abs_price_change_24h();
        let detail = format!(
            "{} {}%, {} {}% in 24h",
            ctx.from_token.symbol, fv, ctx.to_token.symbol, tv
        );

        if fv > HIGH_VOLATILITY || tv > HIGH_VOLATILITY {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Volatility,
                Severity::High,
                format!("High price volatility ({})", detail),
                "Price may move significantly before the swap executes",
            ));
        }

        if fv > MODERATE_VOLATILITY || tv > MODERATE_VOLATILITY {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Volatility,
                Severity::Medium,
                format!("Moderate price volatility ({})", detail),
                "Execution price may differ from the quote",
            ));
        }

        CheckOutcome::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{context, healthy_token, params};

    async fn evaluate(from_change: Option<f64>, to_change: Option<f64>) -> CheckOutcome {
        let mut from = healthy_token("ETH", 1e9);
        from.price_change_24h = from_change;
        let mut to = healthy_token("PEPE", 5e8);
        to.price_change_24h = to_change;
        VolatilityCheck.evaluate(&context(params("10", 1.0), from, to)).await
    }

    #[tokio::test]
    async fn negative_moves_count_by_magnitude() {
        match evaluate(Some(-25.0), Some(0.1)).await {
            CheckOutcome::Flagged(f) => {
                assert_eq!(f.severity, Severity::High);
                assert!(f.description.contains("ETH 25%"));
            }
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn either_side_triggers_medium() {
        match evaluate(Some(2.5), Some(-15.0)).await {
            CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::Medium),
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn boundaries_are_exclusive() {
        assert_eq!(evaluate(Some(10.0), Some(-10.0)).await, CheckOutcome::Clear);
        match evaluate(Some(20.0), None).await {
            CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::Medium),
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_changes_are_calm() {
        assert_eq!(evaluate(None, None).await, CheckOutcome::Clear);
    }
}
