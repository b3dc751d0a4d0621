use soroban_sdk::{contracttype, Address};

/// Storage keys for the auction house contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Account that configured the house
    Admin,
    /// Write-once marketplace configuration
    Config,
    /// Last basket id handed out
    BasketCounter,
    /// Oldest and newest `Deposited` basket ids
    QueueEnds,
    /// Neighbours of a `Deposited` basket id in the selection queue
    QueueLink(u64),
    /// Basket entry by id
    BasketEntry(u64),
    /// The single auction slot
    Auction,
    /// Undelivered outbid refund by bidder
    PendingRefund(Address),
}

/// Lifecycle of a deposited token
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BasketState {
    /// Held by the auction house, waiting for its auction
    Deposited = 0,
    /// Currently up for auction
    InAuction = 1,
    /// Handed back to the depositor
    Returned = 2,
    /// Transferred to an auction winner
    Sold = 3,
}

impl BasketState {
    /// The auction house is the custodian of record in these states.
    pub fn is_custodied(&self) -> bool {
        matches!(self, BasketState::Deposited | BasketState::InAuction)
    }
}

/// Settlement result reported in `AuctionSettled`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SettlementOutcome {
    Sold = 0,
    Returned = 1,
}

/// First and last basket id of the selection queue
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueueEnds {
    pub head: Option<u64>,
    pub tail: Option<u64>,
}

/// Position of one basket id in the selection queue
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueueLink {
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

/// One deposited token and its custody record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketEntry {
    /// Sequential id, starting at 1
    pub basket_id: u64,
    /// Account that deposited the token
    pub depositor: Address,
    /// NFT contract holding the token
    pub token_contract: Address,
    /// Token id inside `token_contract`
    pub token_id: u64,
    pub state: BasketState,
}

/// The auction slot. At most one unsettled auction exists at any time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub basket_id: u64,
    pub start_time: u64,
    pub end_time: u64,
    /// Current highest bid, 0 until the first bid
    pub amount: i128,
    pub bidder: Option<Address>,
    pub settled: bool,
}

/// Marketplace configuration, set once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    /// Token contract bids are paid in
    pub currency: Address,
    /// Receives the beneficiary share of every sale
    pub beneficiary: Address,
    /// Minimum time left after any bid, in seconds
    pub time_buffer: u64,
    /// Minimum first bid
    pub reserve_price: i128,
    /// Minimum raise over the previous bid, in percent
    pub min_bid_increment_percentage: u32,
    /// Auction length in seconds
    pub duration: u64,
    /// Beneficiary cut of the winning bid, in percent
    pub beneficiary_share_percentage: u32,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold for instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
