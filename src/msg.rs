use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// fixed owner roster; unique, non-empty addresses
    pub owners: Vec<String>,
    /// distinct confirmations required before a transaction may execute
    pub threshold: u64,
    /// native denom queued values are paid out in
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Append a new transaction to the ledger. Owner only.
    /// The assigned id is emitted as the `tx_id` attribute and returned as data.
    Queue {
        target: String,
        value: Uint128,
        payload: Binary,
    },
    /// Record the sender's confirmation of a pending transaction. Owner only,
    /// at most once per owner per transaction.
    Confirm { id: u64 },
    /// Perform the external effect of a transaction that has reached the
    /// threshold. Open to any sender.
    Execute { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(TransactionResponse)]
    Transaction { id: u64 },
    #[returns(TransactionListResponse)]
    ListTransactions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ConfirmationResponse)]
    Confirmation { id: u64, owner: String },
    #[returns(ConfirmationListResponse)]
    ListConfirmations {
        id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(OwnerListResponse)]
    ListOwners {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub threshold: u64,
    pub owner_count: u64,
    pub denom: String,
}

#[cw_serde]
pub struct TransactionResponse {
    pub id: u64,
    pub target: Addr,
    pub value: Uint128,
    pub payload: Binary,
    pub confirmations: u64,
    pub executed: bool,
}

#[cw_serde]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}

#[cw_serde]
pub struct ConfirmationResponse {
    pub confirmed: bool,
}

#[cw_serde]
pub struct ConfirmationListResponse {
    pub confirmers: Vec<Addr>,
}

#[cw_serde]
pub struct OwnerListResponse {
    pub owners: Vec<Addr>,
}
