use soroban_sdk::contracterror;

/// Error codes for the auction house contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// No auction registered under the given id
    AuctionNotFound = 1,
    /// Bidding attempted before the start tick
    NotStarted = 2,
    /// Auction was canceled by its owner
    Canceled = 3,
    /// Auction is past its end tick or was force-ended
    Ended = 4,
    /// The owner may not bid on their own auction
    OwnerCannotBid = 5,
    /// Bid amount must be positive
    ZeroBid = 6,
    /// Cumulative total does not beat the current highest total
    BidTooLow = 7,
    /// Caller is not the auction owner
    NotOwner = 8,
    /// Auction is already canceled
    AlreadyCanceled = 9,
    /// Withdrawals require the auction to be ended or canceled
    NotEndedOrCanceled = 10,
    /// Caller has no proceeds or refundable balance to claim
    NothingToWithdraw = 11,
    /// Start tick must not exceed end tick
    InvalidRange = 12,
    /// Start tick must be strictly in the future
    StartsInPast = 13,
    /// Reserve price must be positive
    InvalidReserve = 14,
}
