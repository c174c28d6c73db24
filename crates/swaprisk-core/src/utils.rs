/*!
 * SwapRisk Utils
 *
 * Utilitários comuns usados em toda a workspace SwapRisk
 */

use crate::error::{Error, Result};
use ethereum_types::{Address, U256};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Casas decimais entre wei e gwei
const GWEI_SCALE: u32 = 9;

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex = hex.trim();
    let hex_str = hex.strip_prefix("0x").unwrap_or(hex);
    Address::from_str(hex_str).ok()
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Converte um valor em wei para gwei sem perda de precisão
pub fn wei_to_gwei(wei: U256) -> Option<Decimal> {
    if wei > U256::from(u128::MAX) {
        return None;
    }
    let raw = i128::try_from(wei.as_u128()).ok()?;
    Decimal::try_from_i128_with_scale(raw, GWEI_SCALE).ok()
}

/// Converte uma string decimal (simples ou em notação científica)
pub fn parse_decimal(value: &str) -> Result<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::ValidationError("valor decimal vazio".to_string()));
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| Error::ValidationError(format!("valor decimal inválido '{}': {}", value, e)))
}
