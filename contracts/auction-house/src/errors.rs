use soroban_sdk::contracterror;

/// Error codes for the basket auction house contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Negative reserve price or beneficiary share above 100%
    InvalidConfig = 3,
    /// Caller is not the depositor of the basket entry
    NotAuthor = 4,
    /// Token is currently being auctioned
    InAuctionHouse = 5,
    /// Token already left the basket (returned or sold)
    NotInBasket = 6,
    /// No basket entry with the given id
    BasketEntryNotFound = 7,
    /// Nothing has ever been deposited
    BasketEmpty = 8,
    /// All tokens were either retrieved or sold
    BasketExhausted = 9,
    /// The current auction has not been settled yet
    AuctionStillActive = 10,
    /// No auction has been created yet
    AuctionNotFound = 11,
    /// Basket id is not the one up for auction
    WrongToken = 12,
    /// Auction end time has passed
    AuctionExpired = 13,
    /// First bid is below the reserve price
    BidTooLow = 14,
    /// Bid does not beat the last one by the minimum increment percentage
    BidIncrementTooSmall = 15,
    /// Auction end time has not been reached
    AuctionNotComplete = 16,
    /// Auction was already settled
    AuctionAlreadySettled = 17,
    /// Amount arithmetic overflowed
    AmountOverflow = 18,
    /// No pending refund for the caller
    NothingToClaim = 19,
}
