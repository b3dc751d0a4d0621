//! Custody of deposited tokens.
//!
//! The auction house never tracks ownership itself: moving a token in or out
//! is a call into the token's own contract, which enforces ownership and
//! operator approval.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::BasketEntry;

/// The subset of a non-fungible token contract the auction house relies on.
#[contractclient(name = "NftClient")]
pub trait NonFungibleToken {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

/// Move `token_id` from `depositor` into the auction house. The depositor
/// must have approved the auction house as an operator beforehand.
pub fn take(e: &Env, token_contract: &Address, depositor: &Address, token_id: u64) {
    let house = e.current_contract_address();
    NftClient::new(e, token_contract).transfer_from(&house, depositor, &house, &token_id);
}

/// Hand a custodied token to `to`.
pub fn release(e: &Env, entry: &BasketEntry, to: &Address) {
    NftClient::new(e, &entry.token_contract).transfer(
        &e.current_contract_address(),
        to,
        &entry.token_id,
    );
}

/// Whether the auction house is custodian of record for this entry.
pub fn holds(entry: &BasketEntry) -> bool {
    entry.state.is_custodied()
}
