use soroban_sdk::{token, Address, Env};

use crate::errors::Error;

/// Shares of a winning bid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Split {
    pub beneficiary: i128,
    pub depositor: i128,
}

/// `floor(amount * percentage / 100)` for a non-negative `amount`, without
/// forming the full product. Cannot overflow while `percentage <= 100`.
pub fn percent_of(amount: i128, percentage: u32) -> Result<i128, Error> {
    let pct = percentage as i128;
    let whole = (amount / 100)
        .checked_mul(pct)
        .ok_or(Error::AmountOverflow)?;
    let rest = (amount % 100) * pct / 100;
    whole.checked_add(rest).ok_or(Error::AmountOverflow)
}

/// `beneficiary = floor(total * percentage / 100)`, the depositor gets the rest.
pub fn split(total: i128, beneficiary_percentage: u32) -> Result<Split, Error> {
    let beneficiary = percent_of(total, beneficiary_percentage)?;

    Ok(Split {
        beneficiary,
        depositor: total - beneficiary,
    })
}

/// Pay out a settled auction. Any failing transfer aborts the settlement.
pub fn distribute(
    e: &Env,
    currency: &Address,
    total: i128,
    beneficiary_percentage: u32,
    depositor: &Address,
    beneficiary: &Address,
) -> Result<Split, Error> {
    let shares = split(total, beneficiary_percentage)?;
    let token_client = token::TokenClient::new(e, currency);
    let house = e.current_contract_address();

    if shares.beneficiary > 0 {
        token_client.transfer(&house, beneficiary, &shares.beneficiary);
    }
    if shares.depositor > 0 {
        token_client.transfer(&house, depositor, &shares.depositor);
    }

    Ok(shares)
}
