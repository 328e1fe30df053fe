use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Empty, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub threshold: u64,
    pub owner_count: u64,
    /// native denom every queued `value` is denominated in
    pub denom: String,
}

#[cw_serde]
pub struct Transaction {
    pub target: Addr,
    pub value: Uint128,
    /// opaque execute message for the target contract; empty means plain transfer
    pub payload: Binary,
    pub confirmations: u64,
    pub executed: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TX_COUNT: Item<u64> = Item::new("tx_count");
pub const OWNERS: Map<&Addr, Empty> = Map::new("owners");
pub const TRANSACTIONS: Map<u64, Transaction> = Map::new("transactions");
// one record per (transaction, owner) pair, written at most once
pub const CONFIRMATIONS: Map<(u64, &Addr), Empty> = Map::new("confirmations");

pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = TX_COUNT.may_load(store)?.unwrap_or_default();
    TX_COUNT.save(store, &(id + 1))?;
    Ok(id)
}
