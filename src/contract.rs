#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_binary, BankMsg, Binary, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdResult, Uint128, WasmMsg,
};

use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::maybe_addr;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ConfirmationListResponse, ConfirmationResponse, ExecuteMsg, InstantiateMsg,
    OwnerListResponse, QueryMsg, TransactionListResponse, TransactionResponse,
};
use crate::state::{next_id, Config, Transaction, CONFIG, CONFIRMATIONS, OWNERS, TRANSACTIONS, TX_COUNT};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-multisig-queue";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.owners.is_empty() {
        return Err(ContractError::invalid_configuration("owner list is empty"));
    }
    if msg.threshold == 0 {
        return Err(ContractError::invalid_configuration(
            "threshold cannot be zero",
        ));
    }
    if msg.threshold > msg.owners.len() as u64 {
        return Err(ContractError::invalid_configuration(
            "threshold exceeds owner count",
        ));
    }
    if msg.denom.is_empty() {
        return Err(ContractError::invalid_configuration("denom is empty"));
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let cfg = Config {
        threshold: msg.threshold,
        owner_count: msg.owners.len() as u64,
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &cfg)?;
    TX_COUNT.save(deps.storage, &0)?;

    // add all owners, rejecting duplicates
    for owner in msg.owners.iter() {
        if owner.is_empty() {
            return Err(ContractError::invalid_configuration("empty owner address"));
        }
        let addr = deps.api.addr_validate(owner)?;
        if OWNERS.has(deps.storage, &addr) {
            return Err(ContractError::invalid_configuration(format!(
                "duplicate owner: {owner}"
            )));
        }
        OWNERS.save(deps.storage, &addr, &Empty {})?;
    }

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Queue {
            target,
            value,
            payload,
        } => execute_queue(deps, info, target, value, payload),
        ExecuteMsg::Confirm { id } => execute_confirm(deps, info, id),
        ExecuteMsg::Execute { id } => execute_execute(deps, info, id),
    }
}

pub fn execute_queue(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    value: Uint128,
    payload: Binary,
) -> Result<Response, ContractError> {
    // only owners can queue
    if !OWNERS.has(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized {});
    }
    let target = deps.api.addr_validate(&target)?;

    let tx = Transaction {
        target: target.clone(),
        value,
        payload,
        confirmations: 0,
        executed: false,
    };
    let id = next_id(deps.storage)?;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    Ok(Response::new()
        .add_attribute("action", "queue")
        .add_attribute("sender", info.sender)
        .add_attribute("tx_id", id.to_string())
        .add_attribute("target", target)
        .add_attribute("value", value.to_string())
        .set_data(to_binary(&id)?))
}

pub fn execute_confirm(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    // only owners can confirm
    if !OWNERS.has(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized {});
    }
    let mut tx = TRANSACTIONS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::NotFound {})?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted {});
    }

    // record the confirmation if none was recorded before
    CONFIRMATIONS.update(deps.storage, (id, &info.sender), |existing| match existing {
        Some(_) => Err(ContractError::DuplicateConfirmation {}),
        None => Ok(Empty {}),
    })?;

    tx.confirmations += 1;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    Ok(Response::new()
        .add_attribute("action", "confirm")
        .add_attribute("sender", info.sender)
        .add_attribute("tx_id", id.to_string())
        .add_attribute("confirmations", tx.confirmations.to_string()))
}

pub fn execute_execute(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    // anyone can trigger this once the threshold is reached
    let mut tx = TRANSACTIONS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::NotFound {})?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted {});
    }
    let cfg = CONFIG.load(deps.storage)?;
    if tx.confirmations < cfg.threshold {
        return Err(ContractError::InsufficientConfirmations {
            confirmations: tx.confirmations,
            threshold: cfg.threshold,
        });
    }

    // commit the executed flag before dispatching the effect, so a re-entrant
    // execute on the same id is rejected above
    tx.executed = true;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    let funds = if tx.value.is_zero() {
        vec![]
    } else {
        coins(tx.value.u128(), cfg.denom)
    };
    let msgs: Vec<CosmosMsg> = if !tx.payload.is_empty() {
        vec![WasmMsg::Execute {
            contract_addr: tx.target.into_string(),
            msg: tx.payload,
            funds,
        }
        .into()]
    } else if !funds.is_empty() {
        vec![BankMsg::Send {
            to_address: tx.target.into_string(),
            amount: funds,
        }
        .into()]
    } else {
        // nothing to transfer and nothing to call
        vec![]
    };

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "execute")
        .add_attribute("sender", info.sender)
        .add_attribute("tx_id", id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Transaction { id } => to_binary(&query_transaction(deps, id)?),
        QueryMsg::ListTransactions { start_after, limit } => {
            to_binary(&list_transactions(deps, start_after, limit)?)
        }
        QueryMsg::Confirmation { id, owner } => to_binary(&query_confirmation(deps, id, owner)?),
        QueryMsg::ListConfirmations {
            id,
            start_after,
            limit,
        } => to_binary(&list_confirmations(deps, id, start_after, limit)?),
        QueryMsg::ListOwners { start_after, limit } => {
            to_binary(&list_owners(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        threshold: cfg.threshold,
        owner_count: cfg.owner_count,
        denom: cfg.denom,
    })
}

fn query_transaction(deps: Deps, id: u64) -> StdResult<TransactionResponse> {
    let tx = TRANSACTIONS.load(deps.storage, id)?;
    Ok(map_transaction(id, tx))
}

fn map_transaction(id: u64, tx: Transaction) -> TransactionResponse {
    TransactionResponse {
        id,
        target: tx.target,
        value: tx.value,
        payload: tx.payload,
        confirmations: tx.confirmations,
        executed: tx.executed,
    }
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_transactions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransactionListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let transactions: StdResult<Vec<_>> = TRANSACTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, tx)| map_transaction(id, tx)))
        .collect();

    Ok(TransactionListResponse {
        transactions: transactions?,
    })
}

fn query_confirmation(deps: Deps, id: u64, owner: String) -> StdResult<ConfirmationResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let confirmed = CONFIRMATIONS.has(deps.storage, (id, &owner));
    Ok(ConfirmationResponse { confirmed })
}

fn list_confirmations(
    deps: Deps,
    id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ConfirmationListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);
    let confirmers: StdResult<Vec<_>> = CONFIRMATIONS
        .prefix(id)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect();

    Ok(ConfirmationListResponse {
        confirmers: confirmers?,
    })
}

fn list_owners(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<OwnerListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);
    let owners: StdResult<Vec<_>> = OWNERS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect();

    Ok(OwnerListResponse { owners: owners? })
}
