use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Transaction not found")]
    NotFound {},

    #[error("Sender has already confirmed this transaction")]
    DuplicateConfirmation {},

    #[error("Transaction has already been executed")]
    AlreadyExecuted {},

    #[error("Insufficient confirmations ({confirmations} of {threshold} required)")]
    InsufficientConfirmations { confirmations: u64, threshold: u64 },
}

impl ContractError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        ContractError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
