#![no_std]

//! # Auction House Contract
//!
//! Soroban smart contract that mints a single collection of unique tokens,
//! runs time-boxed ascending-price auctions over them, escrows bidder funds
//! in a payment token, and settles ownership transfer plus fund withdrawal
//! once an auction concludes.
//!
//! Auctions have no scheduled transitions: whether an auction is live is
//! recomputed from its stored window and the ledger timestamp at each call.
//! Every accepted bid refunds the displaced bidder in the same invocation,
//! so the contract never holds more than one standing bid per auction.

mod admin;
mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use crate::errors::Error;
use crate::events::*;
use crate::types::Auction;

/// Base URL of the external metadata host; the token ID is appended as a
/// query parameter.
const TOKEN_URI_BASE: &[u8] = b"https://www.cryptolympians.com/api/token?id=";

const SECONDS_PER_HOUR: u64 = 3600;

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction house.
    ///
    /// # Arguments
    /// * `admin` - the only address allowed to mint, create auctions, change
    ///   configuration, and withdraw
    /// * `payment_token` - token contract used for escrowed bids and refunds
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - if called a second time
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_payment_token(&env, &payment_token);
        Self::extend_instance_ttl(&env);

        InitializedEventData {
            admin,
            payment_token,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // TOKEN LEDGER
    // ========================================================================

    /// Mint a new token into the treasury (admin only).
    ///
    /// IDs are assigned sequentially starting at 0 and never reused. The
    /// freshly minted token is owned by the contract itself until an auction
    /// winner claims it.
    pub fn mint(env: Env, caller: Address) -> Result<u32, Error> {
        admin::require_admin(&env, &caller)?;

        let token_id = storage::bump_next_token_id(&env);
        let treasury = env.current_contract_address();
        storage::set_token_owner(&env, token_id, &treasury);
        Self::extend_instance_ttl(&env);

        TokenMintedEventData {
            token_id,
            owner: treasury,
        }
        .publish(&env);

        Ok(token_id)
    }

    /// Current owner of a token.
    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        storage::get_token_owner(&env, token_id).ok_or(Error::TokenNotFound)
    }

    /// Metadata URI for a token, served by an external static host.
    pub fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        if token_id >= storage::get_next_token_id(&env) {
            return Err(Error::TokenNotFound);
        }
        Ok(build_token_uri(&env, token_id))
    }

    /// ID that the next `mint` will assign.
    pub fn next_token_id(env: Env) -> u32 {
        storage::get_next_token_id(&env)
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Set the minimum absolute bid amount (admin only).
    pub fn set_min_bid(env: Env, caller: Address, value: i128) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        if value < 0 {
            return Err(Error::InvalidAmount);
        }
        storage::set_min_bid(&env, value);
        Self::extend_instance_ttl(&env);

        MinBidUpdatedEventData {
            admin: caller,
            value,
        }
        .publish(&env);

        Ok(())
    }

    /// Set the reserve price (admin only). Stored for future use, not
    /// enforced as a bidding floor.
    pub fn set_reserve_price(env: Env, caller: Address, value: i128) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        if value < 0 {
            return Err(Error::InvalidAmount);
        }
        storage::set_reserve_price(&env, value);
        Self::extend_instance_ttl(&env);

        ReservePriceUpdatedEventData {
            admin: caller,
            value,
        }
        .publish(&env);

        Ok(())
    }

    pub fn min_bid(env: Env) -> i128 {
        storage::get_min_bid(&env)
    }

    pub fn reserve_price(env: Env) -> i128 {
        storage::get_reserve_price(&env)
    }

    // ========================================================================
    // AUCTION STORE
    // ========================================================================

    /// Create an auction for a treasury-owned token (admin only).
    ///
    /// `start_time` is an absolute timestamp; `duration_hours` is converted
    /// to seconds and added to it to derive the end of the bidding window.
    ///
    /// # Errors
    /// * `Error::InvalidToken` - token unminted, no longer owned by the
    ///   treasury, or already referenced by an open auction
    /// * `Error::InvalidDuration` - zero duration, or the end time overflows
    pub fn create_auction(
        env: Env,
        caller: Address,
        token_id: u32,
        start_time: u64,
        duration_hours: u64,
    ) -> Result<u32, Error> {
        admin::require_admin(&env, &caller)?;

        let treasury = env.current_contract_address();
        let owner = storage::get_token_owner(&env, token_id).ok_or(Error::InvalidToken)?;
        if owner != treasury {
            return Err(Error::InvalidToken);
        }
        if has_open_auction(&env, token_id) {
            return Err(Error::InvalidToken);
        }

        if duration_hours == 0 {
            return Err(Error::InvalidDuration);
        }
        let end_time = duration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|seconds| start_time.checked_add(seconds))
            .ok_or(Error::InvalidDuration)?;

        let auction = Auction {
            token_id,
            start_time,
            end_time,
            winner: treasury,
            winning_bid: 0,
            claimed: false,
        };

        let auction_index = storage::bump_auction_count(&env);
        storage::save_auction(&env, auction_index, &auction);
        Self::extend_instance_ttl(&env);

        AuctionCreatedEventData {
            auction_index,
            token_id,
            start_time,
            end_time,
        }
        .publish(&env);

        Ok(auction_index)
    }

    /// Auction record at a given index.
    pub fn get_auction(env: Env, auction_index: u32) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_index).ok_or(Error::AuctionNotFound)
    }

    /// Number of auctions ever created.
    pub fn auction_count(env: Env) -> u32 {
        storage::get_auction_count(&env)
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Place a bid on a live auction.
    ///
    /// The bid must meet the configured minimum and strictly exceed the
    /// standing winning bid. The displaced bidder (if any) is refunded their
    /// exact standing bid before the new bid is collected; a trap in either
    /// token transfer rolls back the whole invocation, so no partial state
    /// is ever observable.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no auction at that index
    /// * `Error::AuctionNotLive` - current time outside `[start, end]`
    /// * `Error::BidBelowMinimum` - amount below the configured `min_bid`
    /// * `Error::BidTooLow` - amount not strictly above the winning bid
    pub fn place_bid(
        env: Env,
        bidder: Address,
        auction_index: u32,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_index).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if !is_live(&auction, now) {
            return Err(Error::AuctionNotLive);
        }
        if amount < storage::get_min_bid(&env) {
            return Err(Error::BidBelowMinimum);
        }
        if amount <= auction.winning_bid {
            return Err(Error::BidTooLow);
        }

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(&env, &payment_token);
        let treasury = env.current_contract_address();

        if auction.winner != treasury && auction.winning_bid > 0 {
            token_client.transfer(&treasury, &auction.winner, &auction.winning_bid);
        }
        token_client.transfer(&bidder, &treasury, &amount);

        auction.winner = bidder.clone();
        auction.winning_bid = amount;
        storage::save_auction(&env, auction_index, &auction);
        Self::extend_instance_ttl(&env);

        BidPlacedEventData {
            auction_index,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // SETTLEMENT & TREASURY
    // ========================================================================

    /// Claim the token won in an ended auction.
    ///
    /// Only the stored winner may claim, and only strictly after the
    /// auction's end time. Each auction can be claimed exactly once.
    pub fn claim(env: Env, claimer: Address, auction_index: u32) -> Result<(), Error> {
        claimer.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_index).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if now <= auction.end_time {
            return Err(Error::Unauthorized);
        }
        if claimer != auction.winner {
            return Err(Error::Unauthorized);
        }
        if auction.claimed {
            return Err(Error::AlreadyClaimed);
        }

        storage::set_token_owner(&env, auction.token_id, &claimer);
        auction.claimed = true;
        storage::save_auction(&env, auction_index, &auction);
        Self::extend_instance_ttl(&env);

        TokenClaimedEventData {
            auction_index,
            winner: claimer,
            token_id: auction.token_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw the contract's entire payment-token balance (admin only).
    ///
    /// Blocked while any auction, at any index, is inside its bidding
    /// window: funds held for a live auction may still owe a refund.
    /// Returns the amount transferred.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        admin::require_admin(&env, &caller)?;

        let now = env.ledger().timestamp();
        let count = storage::get_auction_count(&env);
        for index in 0..count {
            if let Some(auction) = storage::get_auction(&env, index) {
                if is_live(&auction, now) {
                    return Err(Error::WithdrawBlocked);
                }
            }
        }

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(&env, &payment_token);
        let treasury = env.current_contract_address();

        let amount = token_client.balance(&treasury);
        if amount > 0 {
            token_client.transfer(&treasury, &caller, &amount);
        }
        Self::extend_instance_ttl(&env);

        WithdrawnEventData {
            admin: caller,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

/// Boundary-inclusive liveness predicate over the stored bidding window.
fn is_live(auction: &Auction, now: u64) -> bool {
    now >= auction.start_time && now <= auction.end_time
}

/// Whether any stored auction still holds `token_id` open: unclaimed and
/// either not yet past its window, or ended with a real winner who has not
/// claimed. An expired auction that drew no bids does not block a re-run.
fn has_open_auction(env: &Env, token_id: u32) -> bool {
    let treasury = env.current_contract_address();
    let now = env.ledger().timestamp();
    let count = storage::get_auction_count(env);
    for index in 0..count {
        if let Some(auction) = storage::get_auction(env, index) {
            if auction.token_id != token_id || auction.claimed {
                continue;
            }
            if now <= auction.end_time || auction.winner != treasury {
                return true;
            }
        }
    }
    false
}

fn build_token_uri(env: &Env, token_id: u32) -> String {
    let mut buf = [0u8; TOKEN_URI_BASE.len() + 10];
    buf[..TOKEN_URI_BASE.len()].copy_from_slice(TOKEN_URI_BASE);

    let mut digits = [0u8; 10];
    let mut n = token_id;
    let mut digit_count = 0;
    loop {
        digits[digit_count] = b'0' + (n % 10) as u8;
        n /= 10;
        digit_count += 1;
        if n == 0 {
            break;
        }
    }

    let mut len = TOKEN_URI_BASE.len();
    while digit_count > 0 {
        digit_count -= 1;
        buf[len] = digits[digit_count];
        len += 1;
    }

    String::from_bytes(env, &buf[..len])
}
