use serde::{Deserialize, Serialize};
use std::fmt;
use swaprisk_core::types::{RiskAssessment, Severity};

/// Decisão do consumidor da avaliação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapDecision {
    Proceed,
    Warn,
    Block,
}

impl SwapDecision {
    /// CRITICAL bloqueia, HIGH avisa, o resto segue
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        match assessment.overall_risk {
            Severity::Critical => SwapDecision::Block,
            Severity::High => SwapDecision::Warn,
            Severity::Medium | Severity::Low => SwapDecision::Proceed,
        }
    }
}

impl fmt::Display for SwapDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDecision::Proceed => write!(f, "proceed"),
            SwapDecision::Warn => write!(f, "warn"),
            SwapDecision::Block => write!(f, "block"),
        }
    }
}
