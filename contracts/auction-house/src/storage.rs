use soroban_sdk::{Address, Env};

use crate::types::{Auction, DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_min_bid(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::MinBid).unwrap_or(0)
}

pub fn set_min_bid(env: &Env, value: i128) {
    env.storage().instance().set(&DataKey::MinBid, &value);
}

pub fn get_reserve_price(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ReservePrice)
        .unwrap_or(0)
}

pub fn set_reserve_price(env: &Env, value: i128) {
    env.storage().instance().set(&DataKey::ReservePrice, &value);
}

// ============================================================================
// TOKEN LEDGER STORAGE
// ============================================================================

pub fn get_next_token_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0)
}

/// Assign the next sequential token ID and advance the counter.
pub fn bump_next_token_id(env: &Env) -> u32 {
    let token_id = get_next_token_id(env);
    env.storage()
        .instance()
        .set(&DataKey::NextTokenId, &(token_id + 1));
    token_id
}

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = DataKey::TokenOwner(token_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = DataKey::TokenOwner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORE STORAGE
// ============================================================================

pub fn get_auction_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCount)
        .unwrap_or(0)
}

/// Reserve the next auction index and advance the counter.
pub fn bump_auction_count(env: &Env) -> u32 {
    let index = get_auction_count(env);
    env.storage()
        .instance()
        .set(&DataKey::AuctionCount, &(index + 1));
    index
}

pub fn get_auction(env: &Env, index: u32) -> Option<Auction> {
    let key = DataKey::Auction(index);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, index: u32, auction: &Auction) {
    let key = DataKey::Auction(index);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
