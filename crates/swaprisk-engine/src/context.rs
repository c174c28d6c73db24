use crate::config::AssessorConfig;
use ethereum_types::Address;
use rust_decimal::Decimal;
use std::sync::Arc;
use swaprisk_core::traits::ChainReader;
use swaprisk_core::types::{RiskFactor, SwapParameters, TokenInfo};
use tokio::time::error::Elapsed;

/// Resultado de uma verificação individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Nada detectado
    Clear,
    /// Risco detectado
    Flagged(RiskFactor),
    /// Não foi possível determinar (leitura externa falhou ou dados insuficientes)
    Skipped(String),
}

/// Dados de um swap já validados, compartilhados por todas as verificações
pub struct SwapContext {
    pub params: SwapParameters,
    pub from_token: TokenInfo,
    pub to_token: TokenInfo,
    /// `params.amount` já convertido
    pub amount: f64,
    pub config: AssessorConfig,
    reader: Arc<dyn ChainReader>,
}

impl SwapContext {
    pub fn new(
        params: SwapParameters,
        from_token: TokenInfo,
        to_token: TokenInfo,
        amount: f64,
        config: AssessorConfig,
        reader: Arc<dyn ChainReader>,
    ) -> Self {
        Self {
            params,
            from_token,
            to_token,
            amount,
            config,
            reader,
        }
    }

    /// Lê `owner()` respeitando o timeout configurado
    pub async fn read_owner(&self, contract: Address) -> Result<Option<Address>, Elapsed> {
        tokio::time::timeout(self.config.read_timeout(), self.reader.read_owner(contract)).await
    }

    /// Preço de gas da rede (gwei) respeitando o timeout configurado
    pub async fn current_gas_price(&self) -> Result<Option<Decimal>, Elapsed> {
        tokio::time::timeout(self.config.read_timeout(), self.reader.current_gas_price()).await
    }
}
