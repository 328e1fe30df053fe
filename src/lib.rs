/*!
This is a multisig over a queued transaction ledger, with a fixed set of
owner addresses given at instantiation. Owners queue a transfer or contract
call, other owners confirm it by id, and once a configured threshold of
distinct confirmations is reached anyone may trigger the execution. Each
entry executes at most once; the executed flag is committed to storage
before the effect is dispatched, so a malicious target calling back into
the contract cannot run the same entry twice.

The roster and threshold are immutable. There is no un-confirm, no expiry
and no way to drop a queued entry.
*/

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
