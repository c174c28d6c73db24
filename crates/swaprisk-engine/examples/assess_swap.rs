//! Avalia o risco de um swap descrito em um arquivo JSON.
//!
//! Sem endpoint RPC a avaliação roda offline (owner e preço de gas
//! desconhecidos):
//!
//! ```bash
//! cargo run -p swaprisk-engine --example assess_swap -- swap.json [RPC_ENDPOINT]
//! ```
//!
//! Formato do arquivo:
//!
//! ```json
//! {
//!   "params": { "fromToken": "ETH", "toToken": "USDC", "amount": "1000", "slippageTolerance": 1 },
//!   "fromToken": { "address": "0x...", "symbol": "ETH", "name": "Ether", "decimals": 18, "liquidity": 1e9 },
//!   "toToken": { "address": "0x...", "symbol": "USDC", "name": "USD Coin", "decimals": 6, "liquidity": 5e8 }
//! }
//! ```

use std::env;
use std::fs;
use std::sync::Arc;

use serde::Deserialize;
use swaprisk_core::types::{SwapParameters, TokenInfo};
use swaprisk_engine::{AssessorConfig, OfflineChainReader, RiskAssessor, RpcChainReader, SwapDecision};
use swaprisk_rpc::{ChainRpcClient, RpcConfig};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapRequest {
    params: SwapParameters,
    from_token: TokenInfo,
    to_token: TokenInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <ARQUIVO_JSON> [RPC_ENDPOINT]", args[0]);
        eprintln!("Exemplo: {} swap.json http://localhost:8545", args[0]);
        std::process::exit(1);
    }

    let json = fs::read_to_string(&args[1])?;
    let request: SwapRequest = serde_json::from_str(&json)?;

    let config = AssessorConfig::from_env();
    let assessor = match args.get(2) {
        Some(endpoint) => {
            let client = ChainRpcClient::new(RpcConfig::new(endpoint.clone())).await?;
            RiskAssessor::with_config(Arc::new(RpcChainReader::new(client)), config)
        }
        None => RiskAssessor::with_config(Arc::new(OfflineChainReader), config),
    };

    let assessment = assessor
        .assess_swap_risk(&request.params, &request.from_token, &request.to_token)
        .await?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    println!("Decisão: {}", SwapDecision::from_assessment(&assessment));

    Ok(())
}
