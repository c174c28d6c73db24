/*!
 * SwapRisk Core
 *
 * Tipos e contratos compartilhados para a workspace SwapRisk
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::Error;
pub use types::*;
