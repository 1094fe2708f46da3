use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub auction_id: u64,
    pub owner: Address,
    pub start_tick: u32,
    pub end_tick: u32,
    pub reserve_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveReachedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCanceledEvent {
    pub auction_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaxBidAcceptedEvent {
    pub auction_id: u64,
    pub owner: Address,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalEvent {
    pub auction_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    owner: Address,
    start_tick: u32,
    end_tick: u32,
    reserve_price: i128,
) {
    let event = AuctionCreatedEvent {
        auction_id,
        owner: owner.clone(),
        start_tick,
        end_tick,
        reserve_price,
    };
    env.events().publish(("auction_created", auction_id, owner), event);
}

pub fn emit_bid_placed(env: &Env, auction_id: u64, bidder: Address, amount: i128, total: i128) {
    let event = BidPlacedEvent {
        auction_id,
        bidder: bidder.clone(),
        amount,
        total,
    };
    env.events().publish(("bid_placed", auction_id, bidder), event);
}

pub fn emit_reserve_reached(env: &Env, auction_id: u64, bidder: Address, total: i128) {
    let event = ReserveReachedEvent {
        auction_id,
        bidder: bidder.clone(),
        total,
    };
    env.events().publish(("reserve_reached", auction_id, bidder), event);
}

pub fn emit_auction_canceled(env: &Env, auction_id: u64, owner: Address) {
    let event = AuctionCanceledEvent {
        auction_id,
        owner: owner.clone(),
    };
    env.events().publish(("auction_canceled", auction_id, owner), event);
}

pub fn emit_max_bid_accepted(env: &Env, auction_id: u64, owner: Address, total: i128) {
    let event = MaxBidAcceptedEvent {
        auction_id,
        owner: owner.clone(),
        total,
    };
    env.events().publish(("max_bid_accepted", auction_id, owner), event);
}

pub fn emit_withdrawal(env: &Env, auction_id: u64, recipient: Address, amount: i128) {
    let event = WithdrawalEvent {
        auction_id,
        recipient: recipient.clone(),
        amount,
    };
    env.events().publish(("withdrawal", auction_id, recipient), event);
}
