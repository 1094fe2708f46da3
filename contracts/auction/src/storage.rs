use crate::types::{Auction, Bid, DataKey};
use soroban_sdk::{Address, Env, Vec};

// TTL constants (~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Auction Counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    counter
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Contribution Ledger ==========

pub fn get_contribution(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::Contribution(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::Contribution(auction_id, bidder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Refundable Ledger ==========

pub fn get_refundable(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::Refundable(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn remove_refundable(env: &Env, auction_id: u64, bidder: &Address) {
    let key = DataKey::Refundable(auction_id, bidder.clone());
    env.storage().persistent().remove(&key);
}

/// Move a bidder's entire contribution into their refundable balance.
///
/// This is the single displacement primitive: the contribution entry is
/// zeroed so a later re-bid starts from scratch and a repeat displacement
/// can never credit the same funds twice.
pub fn move_contribution_to_refundable(env: &Env, auction_id: u64, bidder: &Address) {
    let contribution = get_contribution(env, auction_id, bidder);
    if contribution == 0 {
        return;
    }
    let key = DataKey::Refundable(auction_id, bidder.clone());
    let refundable: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .set(&key, &(refundable + contribution));
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    set_contribution(env, auction_id, bidder, 0);
}

// ========== Bid History ==========

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::BidHistory(auction_id);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
