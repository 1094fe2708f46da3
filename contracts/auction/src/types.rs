use soroban_sdk::{contracttype, Address, String};

/// Lifecycle phase of an auction, always derived from the stored flags and
/// the current ledger sequence, never persisted.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Pending = 0,
    Active = 1,
    Ended = 2,
    Canceled = 3,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub owner: Address,
    pub token: Address,
    pub start_tick: u32,
    pub end_tick: u32,
    pub reserve_price: i128,
    pub metadata_ref: String,
    pub canceled: bool,
    pub force_ended: bool,
    pub highest_bidder: Option<Address>,
    pub highest_total: i128,
    pub owner_proceeds: i128,
    pub owner_paid: bool,
}

impl Auction {
    /// Derive the lifecycle phase at the given ledger sequence.
    ///
    /// `canceled` and `force_ended` are mutually exclusive by construction:
    /// cancellation is rejected once the auction has ended, and force-ending
    /// is rejected once it is canceled.
    pub fn status(&self, now: u32) -> AuctionStatus {
        if self.canceled {
            AuctionStatus::Canceled
        } else if self.force_ended || now >= self.end_tick {
            AuctionStatus::Ended
        } else if now < self.start_tick {
            AuctionStatus::Pending
        } else {
            AuctionStatus::Active
        }
    }
}

/// Audit entry recorded for every accepted bid.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub total: i128,
    pub tick: u32,
}

/// Storage keys for the auction contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    AuctionCounter,
    Auction(u64),
    Contribution(u64, Address),
    Refundable(u64, Address),
    BidHistory(u64),
}
