use swaprisk_core::types::{RiskFactor, RiskFactorType, Severity};

pub const CRITICAL_PREAMBLE: &str =
    "Consider canceling this swap: critical risk factors were detected";
pub const HIGH_PREAMBLE: &str = "Proceed with extreme caution: high risk factors were detected";

/// Recomendação canônica para cada tipo de fator
pub fn advisory_for(factor_type: RiskFactorType) -> &'static str {
    match factor_type {
        RiskFactorType::Liquidity => "Reduce the swap amount or use a different venue with deeper liquidity",
        RiskFactorType::Slippage => "Adjust slippage tolerance to match market conditions (1-3% is typical)",
        RiskFactorType::Contract => "Verify the contract address and audit status before proceeding",
        RiskFactorType::Volatility => "Consider waiting for the market to stabilize or split the swap",
        RiskFactorType::Mev => "Use MEV protection such as a private transaction relay",
        RiskFactorType::Gas => "Adjust the gas price to current network conditions",
        RiskFactorType::Token => "Research the token's holder distribution and market cap",
        RiskFactorType::Protocol => "Prefer established protocols with a proven track record",
    }
}

/// Monta as recomendações: preâmbulo para HIGH/CRITICAL e uma entrada por
/// fator, na ordem de avaliação. Sem fatores, nenhuma recomendação.
pub fn build_recommendations(overall_risk: Severity, factors: &[RiskFactor]) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(factors.len() + 1);

    match overall_risk {
        Severity::Critical => recommendations.push(CRITICAL_PREAMBLE.to_string()),
        Severity::High => recommendations.push(HIGH_PREAMBLE.to_string()),
        _ => {}
    }

    recommendations.extend(factors.iter().map(|f| advisory_for(f.factor_type).to_string()));
    recommendations
}
