use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage entries (60 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;

/// TTL threshold before extending persistent entries
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// A single time-boxed ascending-price auction over one token.
///
/// `winner` holds the contract's own address until a first bid is accepted;
/// that reserved identity is how "no bidder yet" is represented. `claimed`
/// flips exactly once, when the winner collects the token after `end_time`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub token_id: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub winner: Address,
    pub winning_bid: i128,
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PaymentToken,
    MinBid,
    ReservePrice,
    NextTokenId,
    AuctionCount,
    TokenOwner(u32),
    Auction(u32),
}
