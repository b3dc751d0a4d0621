use soroban_sdk::{log, Address, Env};

use crate::custody;
use crate::errors::Error;
use crate::events::{AddedToBasket, RetrievedFromBasket};
use crate::queue;
use crate::storage;
use crate::types::{BasketEntry, BasketState};

/// Take custody of a token and record it under the next basket id.
pub fn deposit(
    e: &Env,
    depositor: &Address,
    token_contract: &Address,
    token_id: u64,
) -> u64 {
    custody::take(e, token_contract, depositor, token_id);

    let basket_id = storage::increment_basket_counter(e);
    let entry = BasketEntry {
        basket_id,
        depositor: depositor.clone(),
        token_contract: token_contract.clone(),
        token_id,
        state: BasketState::Deposited,
    };
    storage::set_basket_entry(e, &entry);
    queue::push_back(e, basket_id);

    log!(e, "basket entry deposited", basket_id);

    AddedToBasket {
        basket_id,
        depositor: depositor.clone(),
        token_contract: token_contract.clone(),
        token_id,
    }
    .publish(e);

    basket_id
}

/// Give a token that is still waiting in the basket back to its depositor.
pub fn retrieve(e: &Env, caller: &Address, basket_id: u64) -> Result<(), Error> {
    let mut entry = storage::get_basket_entry(e, basket_id).ok_or(Error::BasketEntryNotFound)?;

    if entry.depositor != *caller {
        return Err(Error::NotAuthor);
    }

    match entry.state {
        BasketState::Deposited => {}
        BasketState::InAuction => return Err(Error::InAuctionHouse),
        BasketState::Returned | BasketState::Sold => return Err(Error::NotInBasket),
    }

    entry.state = BasketState::Returned;
    storage::set_basket_entry(e, &entry);
    queue::remove(e, basket_id);

    custody::release(e, &entry, caller);

    RetrievedFromBasket {
        basket_id,
        depositor: caller.clone(),
    }
    .publish(e);

    Ok(())
}

/// Pick the earliest deposit still waiting and mark it `InAuction`.
pub fn select_next(e: &Env) -> Result<BasketEntry, Error> {
    if storage::get_basket_counter(e) == 0 {
        return Err(Error::BasketEmpty);
    }

    let basket_id = queue::front(e).ok_or(Error::BasketExhausted)?;
    let mut entry = storage::get_basket_entry(e, basket_id).ok_or(Error::BasketEntryNotFound)?;

    entry.state = BasketState::InAuction;
    storage::set_basket_entry(e, &entry);
    queue::remove(e, basket_id);

    Ok(entry)
}

/// Close out the entry that was under auction.
pub fn finish(e: &Env, basket_id: u64, state: BasketState) -> Result<BasketEntry, Error> {
    let mut entry = storage::get_basket_entry(e, basket_id).ok_or(Error::BasketEntryNotFound)?;
    entry.state = state;
    storage::set_basket_entry(e, &entry);
    Ok(entry)
}
