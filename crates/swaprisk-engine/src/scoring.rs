use swaprisk_core::types::RiskFactor;

/// Pontuação máxima de uma avaliação
pub const MAX_RISK_SCORE: u8 = 100;

/// Soma das pontuações dos fatores, limitada a 100
pub fn risk_score(factors: &[RiskFactor]) -> u8 {
    let total: u32 = factors.iter().map(|f| f.severity.score()).sum();
    total.min(MAX_RISK_SCORE as u32) as u8
}
