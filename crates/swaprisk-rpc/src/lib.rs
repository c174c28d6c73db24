/*!
 * SwapRisk RPC
 *
 * Cliente RPC para as leituras on-chain da avaliação de risco
 * (`eth_call` e `eth_gasPrice`)
 */

use swaprisk_core::{Error, error::Result};
use ethereum_types::{Address, U256};
use web3::{
    Web3,
    transports::{Http, WebSocket},
    types::{Bytes, CallRequest, H160},
};
use std::future::Future;
use std::time::Duration;
use async_trait::async_trait;
use tracing::debug;

/// Configuração do cliente RPC
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub endpoint: String,
    /// Limite de tempo de cada requisição
    pub timeout: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RpcConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Enum para diferentes tipos de transporte
pub enum TransportType {
    Http(Web3<Http>),
    WebSocket(Web3<WebSocket>),
}

/// Cliente RPC para Ethereum
pub struct ChainRpcClient {
    transport: TransportType,
    config: RpcConfig,
}

impl ChainRpcClient {
    /// Cria um novo cliente RPC HTTP
    pub async fn new_http(config: RpcConfig) -> Result<Self> {
        let transport = Http::new(&config.endpoint)
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via HTTP: {}", e)))?;

        let client = Self {
            transport: TransportType::Http(Web3::new(transport)),
            config,
        };

        // Verifica a conexão
        let block = client.get_block_number().await?;
        debug!(endpoint = %client.config.endpoint, block, "conectado via HTTP");

        Ok(client)
    }

    /// Cria um novo cliente RPC WebSocket
    pub async fn new_websocket(config: RpcConfig) -> Result<Self> {
        let transport = WebSocket::new(&config.endpoint)
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via WebSocket: {}", e)))?;

        let client = Self {
            transport: TransportType::WebSocket(Web3::new(transport)),
            config,
        };

        // Verifica a conexão
        let block = client.get_block_number().await?;
        debug!(endpoint = %client.config.endpoint, block, "conectado via WebSocket");

        Ok(client)
    }

    /// Cria um novo cliente baseado na URL
    pub async fn new(config: RpcConfig) -> Result<Self> {
        if config.endpoint.starts_with("ws") {
            Self::new_websocket(config).await
        } else {
            Self::new_http(config).await
        }
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Aplica o timeout configurado a uma requisição
    async fn bounded<T, F>(&self, what: &str, request: F) -> Result<T>
    where
        F: Future<Output = web3::Result<T>>,
    {
        match tokio::time::timeout(self.config.timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::RpcError(format!("Falha ao {}: {}", what, e))),
            Err(_) => Err(Error::TimeoutError(format!(
                "{} excedeu {:?}",
                what, self.config.timeout
            ))),
        }
    }

    /// Obtém o número do bloco atual
    pub async fn get_block_number(&self) -> Result<u64> {
        let block_number = match &self.transport {
            TransportType::Http(web3) => {
                self.bounded("obter número do bloco", web3.eth().block_number()).await?
            },
            TransportType::WebSocket(web3) => {
                self.bounded("obter número do bloco", web3.eth().block_number()).await?
            }
        };

        Ok(block_number.as_u64())
    }

    /// Obtém o preço de gas atual, em wei
    pub async fn gas_price(&self) -> Result<U256> {
        let price = match &self.transport {
            TransportType::Http(web3) => {
                self.bounded("obter preço de gas", web3.eth().gas_price()).await?
            },
            TransportType::WebSocket(web3) => {
                self.bounded("obter preço de gas", web3.eth().gas_price()).await?
            }
        };

        Ok(price)
    }

    /// Executa um `eth_call` no bloco mais recente
    pub async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        let call_request = CallRequest {
            from: None,
            to: Some(H160::from_slice(to.as_bytes())),
            gas: None,
            gas_price: None,
            value: None,
            data: Some(Bytes(data)),
            transaction_type: None,
            access_list: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        };

        let result = match &self.transport {
            TransportType::Http(web3) => {
                self.bounded("executar chamada RPC", web3.eth().call(call_request, None)).await?
            },
            TransportType::WebSocket(web3) => {
                self.bounded("executar chamada RPC", web3.eth().call(call_request, None)).await?
            }
        };

        Ok(result.0)
    }
}

/// Implementação da trait RpcProvider do swaprisk-core
#[async_trait]
impl swaprisk_core::traits::RpcProvider for ChainRpcClient {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        self.call(to, data).await
    }

    async fn gas_price(&self) -> Result<U256> {
        self.gas_price().await
    }
}
