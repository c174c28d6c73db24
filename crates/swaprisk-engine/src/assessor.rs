use crate::chain_reader::OfflineChainReader;
use crate::checks::CheckRegistry;
use crate::config::AssessorConfig;
use crate::context::{CheckOutcome, SwapContext};
use crate::recommendations::build_recommendations;
use crate::scoring::risk_score;
use futures::future::join_all;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use swaprisk_core::error::{Error, Result};
use swaprisk_core::traits::ChainReader;
use swaprisk_core::types::{RiskAssessment, Severity, SwapParameters, TokenInfo};
use swaprisk_core::utils::parse_decimal;
use tracing::{debug, info};

/// Motor de avaliação de risco de swaps.
///
/// Executa as oito verificações concorrentemente e monta o resultado na
/// ordem fixa de avaliação. Sem estado compartilhado e sem cache entre
/// chamadas.
pub struct RiskAssessor {
    reader: Arc<dyn ChainReader>,
    config: AssessorConfig,
    registry: CheckRegistry,
}

impl RiskAssessor {
    pub fn new(reader: Arc<dyn ChainReader>) -> Self {
        Self::with_config(reader, AssessorConfig::default())
    }

    pub fn with_config(reader: Arc<dyn ChainReader>, config: AssessorConfig) -> Self {
        let registry = CheckRegistry::new();
        debug!(checks = ?registry.available_checks(), "verificações registradas");
        Self {
            reader,
            config,
            registry,
        }
    }

    /// Avaliador sem leituras on-chain (owner e gas ficam desconhecidos)
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineChainReader))
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    /// Avalia o risco de um swap.
    ///
    /// Falha apenas para parâmetros obrigatórios inválidos
    /// ([`Error::ValidationError`]); dados ausentes e leituras externas
    /// com falha nunca interrompem a avaliação.
    pub async fn assess_swap_risk(
        &self,
        params: &SwapParameters,
        from_token: &TokenInfo,
        to_token: &TokenInfo,
    ) -> Result<RiskAssessment> {
        let amount = validate(params)?;

        let ctx = SwapContext::new(
            params.clone(),
            from_token.clone(),
            to_token.clone(),
            amount,
            self.config.clone(),
            self.reader.clone(),
        );

        let checks = self.registry.checks();
        let outcomes = join_all(checks.iter().map(|check| check.evaluate(&ctx))).await;

        let mut risk_factors = Vec::new();
        let mut skipped_checks = Vec::new();
        for (check, outcome) in checks.iter().zip(outcomes) {
            match outcome {
                CheckOutcome::Flagged(factor) => {
                    debug!(check = check.name(), severity = %factor.severity, "{}", factor.description);
                    risk_factors.push(factor);
                }
                CheckOutcome::Skipped(reason) => {
                    debug!(check = check.name(), reason = %reason, "verificação não determinada");
                    skipped_checks.push(check.factor_type());
                }
                CheckOutcome::Clear => {}
            }
        }

        let risk_score = risk_score(&risk_factors);
        let overall_risk = Severity::from_score(risk_score);
        let recommendations = build_recommendations(overall_risk, &risk_factors);

        info!(
            from = %params.from_token,
            to = %params.to_token,
            risk_score,
            overall_risk = %overall_risk,
            factors = risk_factors.len(),
            skipped = skipped_checks.len(),
            "avaliação de risco concluída"
        );

        Ok(RiskAssessment {
            overall_risk,
            risk_score,
            risk_factors,
            recommendations,
            skipped_checks,
        })
    }
}

/// Valida os parâmetros obrigatórios e retorna o valor numérico do swap
fn validate(params: &SwapParameters) -> Result<f64> {
    if params.from_token.trim().is_empty() {
        return Err(Error::ValidationError("fromToken é obrigatório".to_string()));
    }
    if params.to_token.trim().is_empty() {
        return Err(Error::ValidationError("toToken é obrigatório".to_string()));
    }
    if params.amount.trim().is_empty() {
        return Err(Error::ValidationError("amount é obrigatório".to_string()));
    }

    let amount = parse_decimal(&params.amount)?;
    if amount < Decimal::ZERO {
        return Err(Error::ValidationError(format!("amount negativo: {}", params.amount)));
    }
    let amount = amount
        .to_f64()
        .ok_or_else(|| Error::ValidationError(format!("amount fora do intervalo: {}", params.amount)))?;

    let slippage = params.slippage_tolerance;
    if !slippage.is_finite() || slippage < 0.0 {
        return Err(Error::ValidationError(format!(
            "slippageTolerance inválido: {}",
            slippage
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_plain_and_scientific_amounts() {
        assert_eq!(validate(&SwapParameters::new("a", "b", "1000", 1.0)).unwrap(), 1000.0);
        assert_eq!(validate(&SwapParameters::new("a", "b", "1e6", 1.0)).unwrap(), 1_000_000.0);
        assert_eq!(validate(&SwapParameters::new("a", "b", "0", 0.0)).unwrap(), 0.0);
    }

    #[test]
    fn validate_rejects_bad_input() {
        let cases = [
            SwapParameters::new("", "b", "1", 1.0),
            SwapParameters::new("a", "  ", "1", 1.0),
            SwapParameters::new("a", "b", "", 1.0),
            SwapParameters::new("a", "b", "lots", 1.0),
            SwapParameters::new("a", "b", "-5", 1.0),
            SwapParameters::new("a", "b", "1", f64::NAN),
            SwapParameters::new("a", "b", "1", -1.0),
        ];
        for params in cases {
            let err = validate(&params).unwrap_err();
            assert!(err.is_bad_input(), "{:?} deveria ser entrada inválida", params);
        }
    }
}
