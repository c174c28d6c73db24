use thiserror::Error;

/// Erros comuns da biblioteca SwapRisk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Erro de comunicação com o node Ethereum
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Parâmetro obrigatório ausente ou inválido
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Erro de timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),
}

impl Error {
    /// Indica se o erro foi causado por entrada inválida do chamador,
    /// e não por dados degradados ou falhas externas.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, Error::ValidationError(_))
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
