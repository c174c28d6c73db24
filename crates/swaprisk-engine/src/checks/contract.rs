use super::RiskCheck;
use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::{AuditStatus, RiskFactor, RiskFactorType, Severity};
use swaprisk_core::utils::{format_address, hex_to_address};
use tracing::{debug, warn};

/// Verificação, auditoria e privilégios do contrato de destino.
///
/// Prioridade: não verificado → não auditado → `owner()` não nulo.
/// A leitura de `owner()` é de melhor esforço.
pub struct ContractCheck;

#[async_trait]
impl RiskCheck for ContractCheck {
    fn name(&self) -> &str {
        "ContractCheck"
    }

    fn factor_type(&self) -> RiskFactorType {
        RiskFactorType::Contract
    }

    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome {
        let token = &ctx.to_token;

        if !token.is_verified {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Contract,
                Severity::High,
                format!("Unverified contract for {} ({})", token.symbol, token.address),
                "Contract source cannot be inspected and may contain malicious code",
            ));
        }

        if token.audit_status == AuditStatus::Unaudited {
            return CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Contract,
                Severity::Medium,
                format!("Contract for {} has not been audited", token.symbol),
                "Undiscovered vulnerabilities may put funds at risk",
            ));
        }

        let contract = match hex_to_address(&token.address).or_else(|| hex_to_address(&ctx.params.to_token)) {
            Some(address) => address,
            None => {
                debug!(token = %token.address, "endereço não hexadecimal, owner() não consultado");
                return CheckOutcome::Clear;
            }
        };

        match ctx.read_owner(contract).await {
            Ok(Some(owner)) if !owner.is_zero() => CheckOutcome::Flagged(RiskFactor::new(
                RiskFactorType::Contract,
                Severity::Critical,
                format!(
                    "Contract owner {} retains privileged access to {}",
                    format_address(&owner),
                    token.symbol
                ),
                "Owner may be able to mint, pause or modify the token",
            )),
            Ok(_) => CheckOutcome::Clear,
            Err(_) => {
                warn!(contract = %format_address(&contract), "timeout ao consultar owner()");
                CheckOutcome::Skipped("owner probe timed out".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{context, context_with, healthy_token, params, StubReader};
    use ethereum_types::Address;

    #[tokio::test]
    async fn unverified_is_high_even_when_unaudited() {
        let mut to = healthy_token("NEW", 5e8);
        to.is_verified = false;
        to.audit_status = AuditStatus::Unaudited;
        let ctx = context(params("10", 1.0), healthy_token("ETH", 1e9), to);
        match ContractCheck.evaluate(&ctx).await {
            CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::High),
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn verified_but_unaudited_is_medium() {
        let mut to = healthy_token("NEW", 5e8);
        to.audit_status = AuditStatus::Unaudited;
        let reader = StubReader { owner: Some(Address::repeat_byte(0x99)), gas_price: None };
        let ctx = context_with(params("10", 1.0), healthy_token("ETH", 1e9), to, reader);
        match ContractCheck.evaluate(&ctx).await {
            CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::Medium),
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn live_owner_is_critical() {
        let owner = Address::repeat_byte(0x99);
        let reader = StubReader { owner: Some(owner), gas_price: None };
        let ctx = context_with(params("10", 1.0), healthy_token("ETH", 1e9), healthy_token("USDC", 5e8), reader);
        match ContractCheck.evaluate(&ctx).await {
            CheckOutcome::Flagged(f) => {
                assert_eq!(f.severity, Severity::Critical);
                assert!(f.description.contains(&format_address(&owner)));
            }
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_audit_status_still_reads_owner() {
        let mut to = healthy_token("USDC", 5e8);
        to.audit_status = AuditStatus::Unknown;
        let reader = StubReader { owner: Some(Address::repeat_byte(0x99)), gas_price: None };
        let ctx = context_with(params("10", 1.0), healthy_token("ETH", 1e9), to, reader);
        match ContractCheck.evaluate(&ctx).await {
            CheckOutcome::Flagged(f) => assert_eq!(f.severity, Severity::Critical),
            other => panic!("esperado fator, obtido {:?}", other),
        }
    }

    #[tokio::test]
    async fn renounced_or_missing_owner_is_clear() {
        let reader = StubReader { owner: Some(Address::zero()), gas_price: None };
        let ctx = context_with(params("10", 1.0), healthy_token("ETH", 1e9), healthy_token("USDC", 5e8), reader);
        assert_eq!(ContractCheck.evaluate(&ctx).await, CheckOutcome::Clear);

        let ctx = context(params("10", 1.0), healthy_token("ETH", 1e9), healthy_token("USDC", 5e8));
        assert_eq!(ContractCheck.evaluate(&ctx).await, CheckOutcome::Clear);
    }

    #[tokio::test]
    async fn non_hex_identifier_skips_probe() {
        let mut to = healthy_token("USDC", 5e8);
        to.address = "usd-coin".to_string();
        let reader = StubReader { owner: Some(Address::repeat_byte(0x99)), gas_price: None };
        let ctx = context_with(params("10", 1.0), healthy_token("ETH", 1e9), to, reader);
        assert_eq!(ContractCheck.evaluate(&ctx).await, CheckOutcome::Clear);
    }
}
