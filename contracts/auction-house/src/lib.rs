#![no_std]

mod admin;
mod basket;
mod custody;
mod errors;
mod events;
mod payout;
mod queue;
mod refunds;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use crate::custody::{NftClient, NonFungibleToken};
pub use crate::errors::Error;
pub use crate::types::{Auction, BasketEntry, BasketState, MarketplaceConfig, SettlementOutcome};

use crate::events::*;

/// Basket Auction House
///
/// Depositors place NFTs into a shared basket. One basket entry at a time is
/// sent to a timed English auction paid in a single token; at expiry the
/// winning bid is split between the depositor and the beneficiary and the
/// NFT goes to the winner, or back to its depositor if nobody bid.
///
/// Every state change is written before the contract calls out to the
/// currency or NFT contracts.
#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Configure the auction house. Callable exactly once, with the
    /// authorization of `admin`. Deploy and initialize in the same
    /// transaction so nobody else can configure the contract first.
    ///
    /// # Arguments
    /// * `admin` - Account recorded as the one that configured the house
    /// * `currency` - Token contract bids are paid in
    /// * `beneficiary` - Receives `beneficiary_share_percentage` of every sale
    /// * `time_buffer` - Minimum seconds left after any bid
    /// * `reserve_price` - Minimum first bid
    /// * `min_bid_increment_percentage` - Minimum raise over the last bid
    /// * `duration` - Auction length in seconds
    /// * `beneficiary_share_percentage` - Beneficiary cut, 0..=100
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidConfig` - Negative reserve price, share above 100, or a
    ///   duration or time buffer that does not fit after the current time
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: &Env,
        admin: Address,
        currency: Address,
        beneficiary: Address,
        time_buffer: u64,
        reserve_price: i128,
        min_bid_increment_percentage: u32,
        duration: u64,
        beneficiary_share_percentage: u32,
    ) -> Result<(), Error> {
        let config = MarketplaceConfig {
            currency: currency.clone(),
            beneficiary: beneficiary.clone(),
            time_buffer,
            reserve_price,
            min_bid_increment_percentage,
            duration,
            beneficiary_share_percentage,
        };
        admin::initialize(e, &admin, &config)?;

        Initialized {
            admin,
            beneficiary,
            currency,
            reserve_price,
            duration,
        }
        .publish(e);

        Ok(())
    }

    pub fn get_config(e: &Env) -> Result<MarketplaceConfig, Error> {
        admin::require_config(e)
    }

    pub fn admin(e: &Env) -> Result<Address, Error> {
        storage::get_admin(e).ok_or(Error::NotInitialized)
    }

    pub fn currency(e: &Env) -> Result<Address, Error> {
        Ok(admin::require_config(e)?.currency)
    }

    pub fn beneficiary(e: &Env) -> Result<Address, Error> {
        Ok(admin::require_config(e)?.beneficiary)
    }

    pub fn time_buffer(e: &Env) -> Result<u64, Error> {
        Ok(admin::require_config(e)?.time_buffer)
    }

    pub fn reserve_price(e: &Env) -> Result<i128, Error> {
        Ok(admin::require_config(e)?.reserve_price)
    }

    pub fn min_bid_increment_percentage(e: &Env) -> Result<u32, Error> {
        Ok(admin::require_config(e)?.min_bid_increment_percentage)
    }

    pub fn duration(e: &Env) -> Result<u64, Error> {
        Ok(admin::require_config(e)?.duration)
    }

    pub fn beneficiary_share_percentage(e: &Env) -> Result<u32, Error> {
        Ok(admin::require_config(e)?.beneficiary_share_percentage)
    }

    // ========================================================================
    // BASKET
    // ========================================================================

    /// Deposit an NFT into the basket.
    ///
    /// The depositor must own `token_id` and have approved this contract as an
    /// operator on `token_contract`; both are enforced by the NFT contract.
    ///
    /// # Returns
    /// * The new basket id
    pub fn deposit(
        e: &Env,
        depositor: Address,
        token_contract: Address,
        token_id: u64,
    ) -> Result<u64, Error> {
        depositor.require_auth();
        admin::require_config(e)?;

        let basket_id = basket::deposit(e, &depositor, &token_contract, token_id);

        storage::extend_instance_ttl(e);
        Ok(basket_id)
    }

    /// Take a token that has not been auctioned yet back out of the basket.
    ///
    /// # Errors
    /// * `Error::NotAuthor` - Caller is not the depositor
    /// * `Error::InAuctionHouse` - The token is currently under auction
    /// * `Error::NotInBasket` - The token was already returned or sold
    pub fn retrieve(e: &Env, caller: Address, basket_id: u64) -> Result<(), Error> {
        caller.require_auth();
        admin::require_config(e)?;

        basket::retrieve(e, &caller, basket_id)?;

        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn get_basket_entry(e: &Env, basket_id: u64) -> Result<BasketEntry, Error> {
        storage::get_basket_entry(e, basket_id).ok_or(Error::BasketEntryNotFound)
    }

    /// Number of basket entries ever created
    pub fn basket_size(e: &Env) -> u64 {
        storage::get_basket_counter(e)
    }

    /// Whether the auction house currently holds the token of `basket_id`
    pub fn in_custody(e: &Env, basket_id: u64) -> Result<bool, Error> {
        let entry = storage::get_basket_entry(e, basket_id).ok_or(Error::BasketEntryNotFound)?;
        Ok(custody::holds(&entry))
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Send the earliest waiting basket entry to auction.
    ///
    /// # Errors
    /// * `Error::AuctionStillActive` - The previous auction is not settled
    /// * `Error::BasketEmpty` - Nothing was ever deposited
    /// * `Error::BasketExhausted` - All tokens were retrieved or sold
    pub fn create_new_auction(e: &Env) -> Result<u64, Error> {
        let config = admin::require_config(e)?;

        if let Some(current) = storage::get_auction(e) {
            if !current.settled {
                return Err(Error::AuctionStillActive);
            }
        }

        let entry = basket::select_next(e)?;

        let start_time = e.ledger().timestamp();
        let auction = Auction {
            basket_id: entry.basket_id,
            start_time,
            end_time: start_time
                .checked_add(config.duration)
                .ok_or(Error::InvalidConfig)?,
            amount: 0,
            bidder: None,
            settled: false,
        };
        storage::save_auction(e, &auction);
        storage::extend_instance_ttl(e);

        log!(e, "auction created", entry.basket_id, auction.end_time);

        SentToAuction {
            basket_id: entry.basket_id,
        }
        .publish(e);

        AuctionCreated {
            basket_id: entry.basket_id,
            start_time,
            end_time: auction.end_time,
            token_id: entry.token_id,
        }
        .publish(e);

        Ok(entry.basket_id)
    }

    /// Bid on the current auction.
    ///
    /// `amount` is pulled from the bidder; the previous high bidder is refunded.
    /// A bid placed less than `time_buffer` before the end moves the end to
    /// `now + time_buffer`.
    ///
    /// # Errors
    /// * `Error::WrongToken` - `basket_id` is not up for auction
    /// * `Error::AuctionAlreadySettled` - The auction is over and settled
    /// * `Error::AuctionExpired` - The end time has passed
    /// * `Error::BidTooLow` - First bid below the reserve price
    /// * `Error::BidIncrementTooSmall` - Raise below the minimum increment
    pub fn create_bid(e: &Env, bidder: Address, basket_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let config = admin::require_config(e)?;

        let mut auction = storage::get_auction(e).ok_or(Error::WrongToken)?;

        if auction.basket_id != basket_id {
            return Err(Error::WrongToken);
        }

        if auction.settled {
            return Err(Error::AuctionAlreadySettled);
        }

        let now = e.ledger().timestamp();
        if now > auction.end_time {
            return Err(Error::AuctionExpired);
        }

        if auction.amount == 0 {
            if amount <= 0 || amount < config.reserve_price {
                return Err(Error::BidTooLow);
            }
        } else if amount < minimum_next_bid(auction.amount, config.min_bid_increment_percentage)? {
            return Err(Error::BidIncrementTooSmall);
        }

        let previous_bidder = auction.bidder.replace(bidder.clone());
        let previous_amount = auction.amount;
        auction.amount = amount;

        let extended = auction.end_time - now < config.time_buffer;
        if extended {
            auction.end_time = now
                .checked_add(config.time_buffer)
                .ok_or(Error::InvalidConfig)?;
        }

        storage::save_auction(e, &auction);
        storage::extend_instance_ttl(e);

        let house = e.current_contract_address();
        token::TokenClient::new(e, &config.currency).transfer(&bidder, &house, &amount);

        if let Some(previous_bidder) = previous_bidder {
            refunds::refund_or_defer(e, &config.currency, &previous_bidder, previous_amount)?;
        }

        if extended {
            AuctionExtended {
                basket_id,
                end_time: auction.end_time,
            }
            .publish(e);
        }

        AuctionBid {
            basket_id,
            bidder,
            amount,
            extended,
        }
        .publish(e);

        Ok(())
    }

    /// Settle the current auction once its end time is reached.
    ///
    /// With a winning bid the proceeds are split and the NFT goes to the
    /// winner; without one the NFT goes back to its depositor.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - No auction was ever created
    /// * `Error::AuctionAlreadySettled` - Settlement already happened
    /// * `Error::AuctionNotComplete` - The end time has not been reached
    pub fn settle_auction(e: &Env) -> Result<SettlementOutcome, Error> {
        let config = admin::require_config(e)?;
        let mut auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;

        if auction.settled {
            return Err(Error::AuctionAlreadySettled);
        }

        if e.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotComplete);
        }

        auction.settled = true;
        storage::save_auction(e, &auction);
        storage::extend_instance_ttl(e);

        let (winner, outcome) = match auction.bidder.clone() {
            Some(winner) if auction.amount > 0 => {
                let entry = basket::finish(e, auction.basket_id, BasketState::Sold)?;
                payout::distribute(
                    e,
                    &config.currency,
                    auction.amount,
                    config.beneficiary_share_percentage,
                    &entry.depositor,
                    &config.beneficiary,
                )?;
                custody::release(e, &entry, &winner);
                (Some(winner), SettlementOutcome::Sold)
            }
            _ => {
                let entry = basket::finish(e, auction.basket_id, BasketState::Returned)?;
                custody::release(e, &entry, &entry.depositor);
                (None, SettlementOutcome::Returned)
            }
        };

        log!(e, "auction settled", auction.basket_id, auction.amount);

        AuctionSettled {
            basket_id: auction.basket_id,
            winner,
            amount: auction.amount,
            outcome,
        }
        .publish(e);

        Ok(outcome)
    }

    pub fn get_auction(e: &Env) -> Result<Auction, Error> {
        storage::get_auction(e).ok_or(Error::AuctionNotFound)
    }

    // ========================================================================
    // REFUNDS
    // ========================================================================

    /// Collect outbid refunds that could not be delivered at bid time.
    ///
    /// # Errors
    /// * `Error::NothingToClaim` - No pending refund for `bidder`
    pub fn claim_refund(e: &Env, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();
        let config = admin::require_config(e)?;

        refunds::claim(e, &config.currency, &bidder)
    }

    pub fn pending_refund(e: &Env, bidder: Address) -> i128 {
        storage::get_pending_refund(e, &bidder)
    }
}

/// Lowest acceptable bid after `current`: `current * (100 + pct) / 100`.
fn minimum_next_bid(current: i128, increment_percentage: u32) -> Result<i128, Error> {
    current
        .checked_add(payout::percent_of(current, increment_percentage)?)
        .ok_or(Error::AmountOverflow)
}
