use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

const RISKY_PROTOCOLS: [&str; 3] = ["unknown", "new_protocol", "experimental"];

pub struct ProtocolCheck;

#[async_trait]
impl RiskCheck for ProtocolCheck {
    fn name(&self) -> &str {
        "ProtocolCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Protocol
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let protocol = match ctx.params.protocol.as_deref() {
            Some(protocol) => protocol.trim(),
            None => return CheckOutcome::Clear,
        };

        let normalized = protocol.to_lowercase();
        if RISKY_PROTOCOLS.contains(&normalized.as_str()) {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Protocol,
                Severity::High,
                format!("Unknown or experimental protocol ({})", protocol),
                "Protocol may contain untested or unaudited code",
            ));
        }

        CheckOutcome::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{context, healthy_token, params};

    async fn evaluate(protocol: Option<&str>) -> CheckOutcome {
        let mut p = params("10", 1.0);
        p.protocol = protocol.map(str::to_string);
        ProtocolCheck.evaluate(&context(p, healthy_token("ETH", 1e9), healthy_token("USDC", 5e8))).await
    }

    #[tokio::test]
    async fn case_insensitive_match() {
        for name in ["unknown", "NEW_PROTOCOL", " Experimental "] {
            match evaluate(Some(name)).await {
                CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::High),
                other => panic!("esperado fator para {}, obtido {:?}", name, other),
            }
        }
    }

    #[tokio::test]
    async fn established_or_absent_is_clear() {
        assert_eq!(evaluate(Some("uniswap_v3")).await, CheckOutcome::Clear);
        assert_eq!(evaluate(None).await, CheckOutcome::Clear);
    }
}
