use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENV_READ_TIMEOUT_MS: &str = "SWAPRISK_READ_TIMEOUT_MS";
const ENV_UNKNOWN_LIQUIDITY_HIGH_RISK: &str = "SWAPRISK_UNKNOWN_LIQUIDITY_HIGH_RISK";

/// Configuração da avaliação de risco
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    /// Limite de tempo de cada leitura externa (owner, preço de gas), em milissegundos
    pub read_timeout_ms: u64,
    /// Quando `false`, a verificação de liquidez é marcada como não avaliável
    /// se nenhum dos dois tokens informar liquidez
    pub unknown_liquidity_is_high_risk: bool,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: 5000, // 5 segundos
            unknown_liquidity_is_high_risk: true,
        }
    }
}

impl AssessorConfig {
    /// Valores padrão sobrescritos pelas variáveis de ambiente, quando válidas
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = std::env::var(ENV_READ_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.read_timeout_ms = ms;
        }
        if let Some(flag) = std::env::var(ENV_UNKNOWN_LIQUIDITY_HIGH_RISK)
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
        {
            config.unknown_liquidity_is_high_risk = flag;
        }
        config
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
