/*!
 * SwapRisk Traits
 *
 * Contratos usados entre o motor de risco e a camada de acesso à blockchain
 */

use async_trait::async_trait;
use crate::error::Result;
use ethereum_types::{Address, U256};
use rust_decimal::Decimal;

/// Trait para provedores RPC
#[async_trait]
pub trait RpcProvider: Send + Sync {
    /// Chama um método de contrato (`eth_call`)
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>>;

    /// Obtém o preço de gas atual da rede, em wei
    async fn gas_price(&self) -> Result<U256>;
}

/// Capacidade de leitura on-chain consumida pela avaliação de risco.
///
/// As duas leituras são de melhor esforço: qualquer falha é reportada como
/// `None` ("desconhecido") e nunca interrompe a avaliação.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Lê `owner()` do contrato, se a função existir e responder
    async fn read_owner(&self, contract: Address) -> Option<Address>;

    /// Preço de gas atual da rede, em gwei
    async fn current_gas_price(&self) -> Option<Decimal>;
}
