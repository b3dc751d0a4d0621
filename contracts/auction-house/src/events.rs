use soroban_sdk::{contractevent, Address};

use crate::types::SettlementOutcome;

/// Event emitted when the auction house is configured
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub beneficiary: Address,
    pub currency: Address,
    pub reserve_price: i128,
    pub duration: u64,
}

/// Event emitted when a token enters the basket
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddedToBasket {
    #[topic]
    pub basket_id: u64,
    #[topic]
    pub depositor: Address,
    pub token_contract: Address,
    pub token_id: u64,
}

/// Event emitted when a depositor takes a token back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetrievedFromBasket {
    #[topic]
    pub basket_id: u64,
    #[topic]
    pub depositor: Address,
}

/// Event emitted when a basket entry is selected for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SentToAuction {
    #[topic]
    pub basket_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub basket_id: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionBid {
    #[topic]
    pub basket_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    /// Whether this bid pushed the end time back
    pub extended: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionExtended {
    #[topic]
    pub basket_id: u64,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    #[topic]
    pub basket_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
    pub outcome: SettlementOutcome,
}

/// Event emitted when an outbid refund could not be delivered
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundDeferred {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimed {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}
