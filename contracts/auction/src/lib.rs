#![no_std]

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use errors::Error;
use types::{Auction, AuctionStatus, Bid};

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========== CREATION / REGISTRY ==========

    /// Create a new auction and append it to the registry.
    ///
    /// `metadata_ref` is stored as-is and never interpreted. Bids are
    /// escrowed in the given token. Ids are assigned densely from 1.
    pub fn create_auction(
        env: Env,
        owner: Address,
        token: Address,
        start_tick: u32,
        end_tick: u32,
        metadata_ref: String,
        reserve_price: i128,
    ) -> Result<u64, Error> {
        owner.require_auth();

        if start_tick > end_tick {
            return Err(Error::InvalidRange);
        }

        let now = env.ledger().sequence();
        if start_tick <= now {
            return Err(Error::StartsInPast);
        }

        if reserve_price <= 0 {
            return Err(Error::InvalidReserve);
        }

        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            id: auction_id,
            owner: owner.clone(),
            token,
            start_tick,
            end_tick,
            reserve_price,
            metadata_ref,
            canceled: false,
            force_ended: false,
            highest_bidder: None,
            highest_total: 0,
            owner_proceeds: 0,
            owner_paid: false,
        };

        storage::save_auction(&env, &auction);

        events::emit_auction_created(&env, auction_id, owner, start_tick, end_tick, reserve_price);

        Ok(auction_id)
    }

    /// Number of auctions ever created.
    pub fn amount_all_auctions(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// All auctions in creation order.
    pub fn list_auctions(env: Env) -> Vec<Auction> {
        let counter = storage::get_auction_counter(&env);
        let mut auctions = Vec::new(&env);

        for id in 1..=counter {
            if let Some(auction) = storage::get_auction(&env, id) {
                auctions.push_back(auction);
            }
        }

        auctions
    }

    // ========== BIDDING ==========

    /// Place a bid. Bids are cumulative: a bidder's new total is their
    /// prior contribution plus `amount`. A re-bid by the current leader is
    /// always accepted; anyone else must beat the current highest total.
    /// Reaching the reserve price force-ends the auction immediately.
    pub fn place_bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().sequence();
        if now < auction.start_tick {
            return Err(Error::NotStarted);
        }
        if auction.canceled {
            return Err(Error::Canceled);
        }
        if auction.force_ended || now >= auction.end_tick {
            return Err(Error::Ended);
        }
        if bidder == auction.owner {
            return Err(Error::OwnerCannotBid);
        }
        if amount <= 0 {
            return Err(Error::ZeroBid);
        }

        let bidder_total = storage::get_contribution(&env, auction_id, &bidder) + amount;

        let is_leader = auction.highest_bidder.as_ref() == Some(&bidder);
        if !is_leader {
            if bidder_total <= auction.highest_total {
                return Err(Error::BidTooLow);
            }
            // The displaced leader's funds become an ordinary refund. Their
            // contribution entry is zeroed here, so a later re-bid starts
            // over and repeat displacements never credit funds twice.
            if let Some(previous_leader) = auction.highest_bidder.clone() {
                storage::move_contribution_to_refundable(&env, auction_id, &previous_leader);
            }
            auction.highest_bidder = Some(bidder.clone());
        }
        auction.highest_total = bidder_total;
        storage::set_contribution(&env, auction_id, &bidder, bidder_total);

        // Reserve reached: the sale locks in immediately, no further bids
        // regardless of remaining time.
        if auction.highest_total >= auction.reserve_price {
            auction.force_ended = true;
            auction.owner_proceeds = auction.highest_total;
        }

        let bid = Bid {
            bidder: bidder.clone(),
            amount,
            total: bidder_total,
            tick: now,
        };
        storage::add_bid_to_history(&env, auction_id, bid);
        storage::save_auction(&env, &auction);

        // Escrow capture: all checks passed, pull the funds in.
        let token_client = token::TokenClient::new(&env, &auction.token);
        token_client.transfer(&bidder, &env.current_contract_address(), &amount);

        events::emit_bid_placed(&env, auction_id, bidder.clone(), amount, bidder_total);
        if auction.force_ended {
            events::emit_reserve_reached(&env, auction_id, bidder, auction.highest_total);
        }

        Ok(())
    }

    // ========== OWNER CONTROLS ==========

    /// Cancel the auction. Only possible before it has ended; the current
    /// leader's funds (if any) become refundable and there is no sale.
    pub fn cancel(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if caller != auction.owner {
            return Err(Error::NotOwner);
        }
        if auction.canceled {
            return Err(Error::AlreadyCanceled);
        }
        let now = env.ledger().sequence();
        if auction.force_ended || now >= auction.end_tick {
            return Err(Error::Ended);
        }

        auction.canceled = true;
        if let Some(leader) = auction.highest_bidder.clone() {
            storage::move_contribution_to_refundable(&env, auction_id, &leader);
        }
        auction.owner_proceeds = 0;
        storage::save_auction(&env, &auction);

        events::emit_auction_canceled(&env, auction_id, caller);

        Ok(())
    }

    /// Accept the current highest bid and end the auction early. Works with
    /// zero bids (proceeds are then zero). Proceeds are claimed later via
    /// `withdraw`, not paid inline.
    pub fn accept_max_bid(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if caller != auction.owner {
            return Err(Error::NotOwner);
        }
        let now = env.ledger().sequence();
        if now < auction.start_tick {
            return Err(Error::NotStarted);
        }
        if auction.canceled {
            return Err(Error::Canceled);
        }
        if auction.force_ended || now >= auction.end_tick {
            return Err(Error::Ended);
        }

        auction.force_ended = true;
        auction.owner_proceeds = auction.highest_total;
        storage::save_auction(&env, &auction);

        events::emit_max_bid_accepted(&env, auction_id, caller, auction.highest_total);

        Ok(())
    }

    // ========== SETTLEMENT ==========

    /// Withdraw once the auction is ended or canceled. The owner collects
    /// the sale proceeds; everyone else collects their refundable balance.
    /// The entitlement is zeroed before the transfer, so each one pays out
    /// at most once. Returns the amount paid.
    pub fn withdraw(env: Env, auction_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().sequence();
        match auction.status(now) {
            AuctionStatus::Ended | AuctionStatus::Canceled => {}
            _ => return Err(Error::NotEndedOrCanceled),
        }

        let amount = if caller == auction.owner {
            let proceeds = auction.owner_proceeds;
            if proceeds == 0 {
                return Err(Error::NothingToWithdraw);
            }
            auction.owner_proceeds = 0;
            auction.owner_paid = true;
            storage::save_auction(&env, &auction);
            proceeds
        } else {
            let refundable = storage::get_refundable(&env, auction_id, &caller);
            if refundable == 0 {
                return Err(Error::NothingToWithdraw);
            }
            storage::remove_refundable(&env, auction_id, &caller);
            refundable
        };

        // State is committed; the outbound transfer is the last step.
        let token_client = token::TokenClient::new(&env, &auction.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        events::emit_withdrawal(&env, auction_id, caller, amount);

        Ok(amount)
    }

    // ========== VIEWS ==========

    /// Full auction record, including owner, tick bounds, reserve price and
    /// metadata reference.
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Lifecycle phase derived at the current ledger sequence.
    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(auction.status(env.ledger().sequence()))
    }

    pub fn get_highest_bid(
        env: Env,
        auction_id: u64,
    ) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_total))
    }

    pub fn get_contribution(env: Env, auction_id: u64, bidder: Address) -> Result<i128, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_contribution(&env, auction_id, &bidder))
    }

    pub fn get_refundable(env: Env, auction_id: u64, bidder: Address) -> Result<i128, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_refundable(&env, auction_id, &bidder))
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }
}

#[cfg(test)]
mod test;
