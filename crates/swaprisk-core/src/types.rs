/*!
 * SwapRisk Types
 *
 * Modelo de dados compartilhado: parâmetros do swap, metadados de tokens
 * e o resultado da avaliação de risco.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severidade de um fator de risco (e também o nível de risco geral)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Pontuação atribuída a um fator desta severidade
    pub fn score(&self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 25,
            Severity::High => 50,
            Severity::Critical => 75,
        }
    }

    /// Classifica uma pontuação agregada (0-100) em um nível de risco
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 75 => Severity::Critical,
            s if s >= 50 => Severity::High,
            s if s >= 25 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Tipo de fator de risco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFactorType {
    Liquidity,
    Slippage,
    Contract,
    Volatility,
    Mev,
    Gas,
    Token,
    Protocol,
}

impl RiskFactorType {
    /// Todos os tipos, na ordem em que as verificações são avaliadas
    pub const EVALUATION_ORDER: [RiskFactorType; 8] = [
        RiskFactorType::Liquidity,
        RiskFactorType::Slippage,
        RiskFactorType::Contract,
        RiskFactorType::Volatility,
        RiskFactorType::Mev,
        RiskFactorType::Gas,
        RiskFactorType::Token,
        RiskFactorType::Protocol,
    ];
}

impl fmt::Display for RiskFactorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFactorType::Liquidity => write!(f, "liquidity"),
            RiskFactorType::Slippage => write!(f, "slippage"),
            RiskFactorType::Contract => write!(f, "contract"),
            RiskFactorType::Volatility => write!(f, "volatility"),
            RiskFactorType::Mev => write!(f, "mev"),
            RiskFactorType::Gas => write!(f, "gas"),
            RiskFactorType::Token => write!(f, "token"),
            RiskFactorType::Protocol => write!(f, "protocol"),
        }
    }
}

/// Status de auditoria de um contrato
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Audited,
    Unaudited,
    #[default]
    Unknown,
}

/// Parâmetros do swap proposto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapParameters {
    pub from_token: String,
    pub to_token: String,
    /// Valor em string decimal, na mesma unidade (USD) de liquidez e market cap
    pub amount: String,
    /// Percentual, `1.0` = 1%
    pub slippage_tolerance: f64,
    /// Preço de gas em gwei
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
}

impl SwapParameters {
    pub fn new(
        from_token: impl Into<String>,
        to_token: impl Into<String>,
        amount: impl Into<String>,
        slippage_tolerance: f64,
    ) -> Self {
        Self {
            from_token: from_token.into(),
            to_token: to_token.into(),
            amount: amount.into(),
            slippage_tolerance,
            gas_price: None,
            protocol: None,
        }
    }
}

/// Metadados de um dos lados do swap.
///
/// Todos os campos de enriquecimento são opcionais; feeds reais omitem
/// campos com frequência e a ausência nunca é tratada como erro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    /// Variação percentual com sinal
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    /// Profundidade em USD
    #[serde(default)]
    pub liquidity: Option<f64>,
    #[serde(default)]
    pub holders: Option<u64>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub audit_status: AuditStatus,
}

impl TokenInfo {
    /// Cria um token sem nenhum dado de enriquecimento
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            total_supply: None,
            market_cap: None,
            volume_24h: None,
            price_change_24h: None,
            liquidity: None,
            holders: None,
            is_verified: false,
            audit_status: AuditStatus::Unknown,
        }
    }

    /// Liquidez com o padrão zero para dados ausentes
    pub fn liquidity_or_zero(&self) -> f64 {
        self.liquidity.unwrap_or(0.0)
    }

    /// Variação de preço absoluta em 24h, zero quando ausente
    pub fn abs_price_change_24h(&self) -> f64 {
        self.price_change_24h.unwrap_or(0.0).abs()
    }
}

/// Um risco detectado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub factor_type: RiskFactorType,
    pub severity: Severity,
    pub description: String,
    pub impact: String,
}

impl RiskFactor {
    pub fn new(
        factor_type: RiskFactorType,
        severity: Severity,
        description: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            factor_type,
            severity,
            description: description.into(),
            impact: impact.into(),
        }
    }
}

/// Resultado de uma avaliação
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: Severity,
    pub risk_score: u8,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    /// Verificações que não puderam ser determinadas (leitura externa falhou
    /// ou dados insuficientes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_checks: Vec<RiskFactorType>,
}

impl RiskAssessment {
    /// Retorna o fator do tipo informado, se disparado
    pub fn factor(&self, factor_type: RiskFactorType) -> Option<&RiskFactor> {
        self.risk_factors.iter().find(|f| f.factor_type == factor_type)
    }

    pub fn has_factor(&self, factor_type: RiskFactorType) -> bool {
        self.factor(factor_type).is_some()
    }

    /// HIGH ou CRITICAL exigem aviso ao usuário
    pub fn requires_warning(&self) -> bool {
        self.overall_risk >= Severity::High
    }

    /// CRITICAL bloqueia o swap
    pub fn should_block(&self) -> bool {
        self.overall_risk == Severity::Critical
    }
}
