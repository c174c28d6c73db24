/*!
 * SwapRisk Engine
 *
 * Avaliação de risco de swaps de tokens DeFi. Oito heurísticas
 * independentes (liquidez, slippage, contrato, volatilidade, MEV, gas,
 * token e protocolo) geram fatores de risco que são agregados em uma
 * pontuação de 0 a 100, classificados em quatro níveis e acompanhados de
 * recomendações.
 */

mod assessor;
mod chain_reader;
mod config;
mod context;
mod policy;
pub mod checks;
pub mod recommendations;
pub mod scoring;

pub use assessor::*;
pub use chain_reader::*;
pub use config::*;
pub use context::*;
pub use policy::*;
