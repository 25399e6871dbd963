use soroban_sdk::contracterror;

/// Error codes for the auction house contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the admin
    Unauthorized = 3,
    /// Token ID has never been minted
    TokenNotFound = 4,
    /// Auction index is out of range
    AuctionNotFound = 5,
    /// Token is not eligible for auction
    InvalidToken = 6,
    /// Auction duration is zero or overflows the end time
    InvalidDuration = 7,
    /// Current time is outside the auction's bidding window
    AuctionNotLive = 8,
    /// Bid is not strictly greater than the standing winning bid
    BidTooLow = 9,
    /// Bid is below the configured minimum bid
    BidBelowMinimum = 10,
    /// Auction has already been claimed
    AlreadyClaimed = 11,
    /// A live auction blocks withdrawal
    WithdrawBlocked = 12,
    /// Amount must not be negative
    InvalidAmount = 13,
}
