use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};
use swaprisk_core::utils::parse_decimal;
use tracing::{debug, warn};

/// Compara o preço de gas informado (gwei) com o preço atual da rede.
///
/// Só roda quando o swap informa `gas_price`; sem oráculo a verificação é
/// pulada silenciosamente.
pub struct GasCheck;

#[async_trait]
impl RiskCheck for GasCheck {
    fn name(&self) -> &str {
        "GasCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Gas
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let raw = match ctx.params.gas_price.as_deref() {
            Some(raw) => raw,
            None => return CheckOutcome::Clear,
        };

        let offered = match parse_decimal(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(gas_price = raw, error = %e, "preço de gas do swap ignorado");
                return CheckOutcome::Skipped(format!("unparseable gas price '{}'", raw));
            }
        };

        let current = match ctx.current_gas_price().await {
            Ok(Some(current)) => current,
            Ok(None) => {
                debug!("oráculo de gas indisponível");
                return CheckOutcome::Skipped("network gas price unavailable".to_string());
            }
            Err(_) => {
                warn!("timeout ao consultar preço de gas");
                return CheckOutcome::Skipped("network gas price timed out".to_string());
            }
        };

        let offered = offered.normalize();
        let current = current.normalize();

        let (floor, ceiling) = match (current.checked_mul(dec!(0.8)), current.checked_mul(dec!(2))) {
            (Some(floor), Some(ceiling)) => (floor, ceiling),
            _ => {
                warn!(current = %current, "preço de gas da rede fora do intervalo");
                return CheckOutcome::Skipped("network gas price out of range".to_string());
            }
        };

        if offered < floor {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Gas,
                Severity::Medium,
                format!(
                    "Gas price ({} gwei) is below 80% of the network price ({} gwei)",
                    offered, current
                ),
                "Transaction may be delayed or stall",
            ));
        }

        if offered > ceiling {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Gas,
                Severity::Low,
                format!(
                    "Gas price ({} gwei) is more than twice the network price ({} gwei)",
                    offered, current
                ),
                "Overpaying for transaction fees",
            ));
        }

        CheckOutcome::Clear
    }
}
