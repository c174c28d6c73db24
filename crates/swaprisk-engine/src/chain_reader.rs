use async_trait::async_trait;
use ethereum_types::Address;
use ethers::abi::{AbiParser, Function};
use rust_decimal::Decimal;
use swaprisk_core::traits::{ChainReader, RpcProvider};
use swaprisk_core::utils::{format_address, wei_to_gwei};
use tracing::{debug, warn};

const OWNER_SIGNATURE: &str = "owner() view returns (address)";

/// Implementação padrão de [`ChainReader`] usando [`RpcProvider`].
pub struct RpcChainReader<P> {
    provider: P,
}

impl<P: RpcProvider> RpcChainReader<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn owner_function() -> Option<Function> {
        match AbiParser::default().parse_function(OWNER_SIGNATURE) {
            Ok(function) => Some(function),
            Err(e) => {
                warn!(error = %e, "assinatura owner() inválida");
                None
            }
        }
    }
}

#[async_trait]
impl<P> ChainReader for RpcChainReader<P>
where
    P: RpcProvider,
{
    async fn read_owner(&self, contract: Address) -> Option<Address> {
        let function = Self::owner_function()?;
        let data = function.encode_input(&[]).ok()?;

        let out = match self.provider.call(contract, data).await {
            Ok(out) => out,
            Err(e) => {
                // contratos sem owner() revertem: não é risco
                debug!(contract = %format_address(&contract), error = %e, "owner() indisponível");
                return None;
            }
        };

        match function.decode_output(&out) {
            Ok(tokens) => tokens.into_iter().next().and_then(|t| t.into_address()),
            Err(e) => {
                debug!(contract = %format_address(&contract), error = %e, "resposta de owner() inválida");
                None
            }
        }
    }

    async fn current_gas_price(&self) -> Option<Decimal> {
        match self.provider.gas_price().await {
            Ok(wei) => wei_to_gwei(wei),
            Err(e) => {
                warn!(error = %e, "falha ao obter preço de gas da rede");
                None
            }
        }
    }
}

/// Leitor sem acesso à rede: toda leitura é "desconhecida"
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineChainReader;

#[async_trait]
impl ChainReader for OfflineChainReader {
    async fn read_owner(&self, _contract: Address) -> Option<Address> {
        None
    }

    async fn current_gas_price(&self) -> Option<Decimal> {
        None
    }
}
