use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;
use crate::events::{RefundClaimed, RefundDeferred};
use crate::storage;

/// Return an outbid amount. If the transfer is rejected the amount stays in
/// the contract as a pending refund instead of reverting the new bid.
pub fn refund_or_defer(
    e: &Env,
    currency: &Address,
    bidder: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::TokenClient::new(e, currency);
    let result = token_client.try_transfer(&e.current_contract_address(), bidder, &amount);

    if !matches!(result, Ok(Ok(_))) {
        log!(e, "refund deferred", bidder.clone(), amount);
        let pending = storage::get_pending_refund(e, bidder);
        let pending = pending.checked_add(amount).ok_or(Error::AmountOverflow)?;
        storage::set_pending_refund(e, bidder, pending);

        RefundDeferred {
            bidder: bidder.clone(),
            amount,
        }
        .publish(e);
    }

    Ok(())
}

/// Pay out everything pending for `bidder`.
pub fn claim(e: &Env, currency: &Address, bidder: &Address) -> Result<i128, Error> {
    let amount = storage::get_pending_refund(e, bidder);
    if amount <= 0 {
        return Err(Error::NothingToClaim);
    }

    storage::set_pending_refund(e, bidder, 0);

    token::TokenClient::new(e, currency).transfer(&e.current_contract_address(), bidder, &amount);

    RefundClaimed {
        bidder: bidder.clone(),
        amount,
    }
    .publish(e);

    Ok(amount)
}
