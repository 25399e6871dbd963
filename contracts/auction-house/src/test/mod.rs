
use crate::{AuctionHouse, AuctionHouseClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};

/// Ledger timestamp all tests start from.
pub const BASE_TIME: u64 = 1_700_000_000;

/// Default auction window used by most tests: starts a minute after
/// `BASE_TIME`, runs for a week.
pub const START_TIME: u64 = BASE_TIME + 60;
pub const DURATION_HOURS: u64 = 24 * 7;
pub const END_TIME: u64 = START_TIME + DURATION_HOURS * 3600;

pub fn setup_test() -> (
    Env,
    AuctionHouseClient<'static>,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    set_time(&env, BASE_TIME);

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&alice, &10_000_000);
    token_admin_client.mint(&bob, &10_000_000);
    token_admin_client.mint(&carol, &10_000_000);

    client.initialize(&admin, &token_address);

    (env, client, admin, alice, bob, carol, token_client)
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}

/// Mint token 0 and open the default week-long auction over it.
pub fn mint_and_create_auction(client: &AuctionHouseClient<'static>, admin: &Address) -> u32 {
    client.mint(admin);
    client.create_auction(admin, &0, &START_TIME, &DURATION_HOURS)
}
