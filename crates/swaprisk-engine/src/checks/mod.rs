use crate::context::{CheckOutcome, SwapContext};
use async_trait::async_trait;
use swaprisk_core::types::RiskFactorType;

pub mod liquidity;
pub mod slippage;
pub mod contract;
pub mod volatility;
pub mod mev;
pub mod gas;
pub mod token;
pub mod protocol;

pub use liquidity::LiquidityCheck;
pub use slippage::SlippageCheck;
pub use contract::ContractCheck;
pub use volatility::VolatilityCheck;
pub use mev::MevCheck;
pub use gas::GasCheck;
pub use token::TokenCheck;
pub use protocol::ProtocolCheck;

/// Uma heurística de risco independente.
///
/// Cada verificação produz no máximo um fator e não depende do resultado
/// das demais.
#[async_trait]
pub trait RiskCheck: Send + Sync {
    fn name(&self) -> &str;
    fn factor_type(&self) -> RiskFactorType;
    async fn evaluate(&self, ctx: &SwapContext) -> CheckOutcome;
}

/// Conjunto ordenado de verificações. A ordem de registro define a ordem
/// dos fatores no resultado.
pub struct CheckRegistry {
    checks: Vec<Box<dyn RiskCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        let checks: Vec<Box<dyn RiskCheck>> = vec![
            Box::new(LiquidityCheck),
            Box::new(SlippageCheck),
            Box::new(ContractCheck),
            Box::new(VolatilityCheck),
            Box::new(MevCheck),
            Box::new(GasCheck),
            Box::new(TokenCheck),
            Box::new(ProtocolCheck),
        ];

        Self { checks }
    }

    pub fn checks(&self) -> &[Box<dyn RiskCheck>] {
        &self.checks
    }

    pub fn available_checks(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::AssessorConfig;
    use crate::context::SwapContext;
    use async_trait::async_trait;
    use ethereum_types::Address;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use swaprisk_core::traits::ChainReader;
    use swaprisk_core::types::{AuditStatus, SwapParameters, TokenInfo};
    use swaprisk_core::utils::format_address;

    /// Leitor com respostas fixas
    #[derive(Default)]
    pub struct StubReader {
        pub owner: Option<Address>,
        pub gas_price: Option<Decimal>,
    }

    #[async_trait]
    impl ChainReader for StubReader {
        async fn read_owner(&self, _contract: Address) -> Option<Address> {
            self.owner
        }

        async fn current_gas_price(&self) -> Option<Decimal> {
            self.gas_price
        }
    }

    pub fn healthy_token(symbol: &str, liquidity: f64) -> TokenInfo {
        TokenInfo {
            liquidity: Some(liquidity),
            is_verified: true,
            audit_status: AuditStatus::Audited,
            ..TokenInfo::new(
                format_address(&Address::repeat_byte(0x42)),
                symbol,
                symbol,
                18,
            )
        }
    }

    pub fn context_with(
        params: SwapParameters,
        from_token: TokenInfo,
        to_token: TokenInfo,
        reader: StubReader,
    ) -> SwapContext {
        let amount = params.amount.parse::<f64>().unwrap();
        SwapContext::new(params, from_token, to_token, amount, AssessorConfig::default(), Arc::new(reader))
    }

    pub fn context(params: SwapParameters, from_token: TokenInfo, to_token: TokenInfo) -> SwapContext {
        context_with(params, from_token, to_token, StubReader::default())
    }

    pub fn params(amount: &str, slippage: f64) -> SwapParameters {
        SwapParameters::new("ETH", "USDC", amount, slippage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_evaluation_order() {
        let registry = CheckRegistry::new();
        let types: Vec<RiskFactorType> = registry.checks().iter().map(|c| c.factor_type()).collect();
        assert_eq!(types, RiskFactorType::EVALUATION_ORDER.to_vec());
        assert_eq!(registry.available_checks().len(), 8);
    }
}
