use crate::test::{advance_to, create_default_auction, setup_test, END_TICK, START_TICK};
use crate::types::AuctionStatus;
use crate::Error;

#[test]
fn test_cancel_only_owner() {
    let (env, client, owner, bidder_a, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    let result = client.try_cancel(&auction_id, &bidder_a);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_cancel_pending_auction() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    // The owner may cancel before the start tick
    client.cancel(&auction_id, &owner);
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Canceled);
}

#[test]
fn test_cancel_twice() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    client.cancel(&auction_id, &owner);

    let result = client.try_cancel(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::AlreadyCanceled)));
}

#[test]
fn test_cancel_after_end_tick() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, END_TICK);
    let result = client.try_cancel(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::Ended)));
}

#[test]
fn test_cancel_after_force_end() {
    let (env, client, owner, bidder_a, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 100);

    advance_to(&env, START_TICK);
    client.place_bid(&auction_id, &bidder_a, &100);

    let result = client.try_cancel(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::Ended)));
}

#[test]
fn test_cancel_refunds_leader() {
    let (env, client, owner, bidder_a, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    client.place_bid(&auction_id, &bidder_a, &99);
    client.cancel(&auction_id, &owner);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Canceled);
    assert_eq!(client.get_refundable(&auction_id, &bidder_a), 99);
    assert_eq!(client.get_auction(&auction_id).owner_proceeds, 0);
}

#[test]
fn test_accept_only_owner() {
    let (env, client, owner, bidder_a, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    let result = client.try_accept_max_bid(&auction_id, &bidder_a);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_accept_locks_auction() {
    let (env, client, owner, bidder_a, bidder_b, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    client.place_bid(&auction_id, &bidder_a, &99);
    client.accept_max_bid(&auction_id, &owner);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Ended);
    assert_eq!(client.get_auction(&auction_id).owner_proceeds, 99);

    let result = client.try_place_bid(&auction_id, &bidder_b, &500);
    assert_eq!(result, Err(Ok(Error::Ended)));
}

#[test]
fn test_accept_with_no_bids() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    client.accept_max_bid(&auction_id, &owner);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Ended);
    assert_eq!(client.get_auction(&auction_id).owner_proceeds, 0);

    let result = client.try_withdraw(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::NothingToWithdraw)));
}

#[test]
fn test_accept_before_start() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    let result = client.try_accept_max_bid(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::NotStarted)));
}

#[test]
fn test_accept_after_cancel() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, START_TICK);
    client.cancel(&auction_id, &owner);

    let result = client.try_accept_max_bid(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::Canceled)));
}

#[test]
fn test_accept_after_end_tick() {
    let (env, client, owner, _, _, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &owner, &token_address, 1000);

    advance_to(&env, END_TICK);
    let result = client.try_accept_max_bid(&auction_id, &owner);
    assert_eq!(result, Err(Ok(Error::Ended)));
}
