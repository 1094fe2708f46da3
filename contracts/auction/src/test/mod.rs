pub mod lifecycle_test;

use crate::{AuctionHouse, AuctionHouseClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const START_TICK: u32 = 10;
pub const END_TICK: u32 = 100;

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

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let bidder_a = Address::generate(&env);
    let bidder_b = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&bidder_a, &10_000);
    token_admin_client.mint(&bidder_b, &10_000);

    (
        env,
        client,
        owner,
        bidder_a,
        bidder_b,
        token_address,
        token_client,
    )
}

/// Create an auction with the default tick window and the given reserve.
pub fn create_default_auction(
    env: &Env,
    client: &AuctionHouseClient<'static>,
    owner: &Address,
    token_address: &Address,
    reserve_price: i128,
) -> u64 {
    client.create_auction(
        owner,
        token_address,
        &START_TICK,
        &END_TICK,
        &String::from_str(env, "ipfs://QmAuctionMeta"),
        &reserve_price,
    )
}

/// Jump the ledger sequence to an absolute tick.
pub fn advance_to(env: &Env, tick: u32) {
    env.ledger().with_mut(|li| li.sequence_number = tick);
}
