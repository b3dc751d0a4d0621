use soroban_sdk::{testutils::Address as _, Address, String};

use crate::test::setup_test;
use crate::{BasketState, Error};

#[test]
fn test_deposit_takes_custody() {
    let ctx = setup_test();
    let token_id = ctx.mint_approved(&ctx.depositor);

    let basket_id = ctx
        .client
        .deposit(&ctx.depositor, &ctx.nft.address, &token_id);
    assert_eq!(basket_id, 1);

    assert_eq!(ctx.nft.owner_of(&token_id), ctx.house);

    let entry = ctx.client.get_basket_entry(&basket_id);
    assert_eq!(entry.depositor, ctx.depositor);
    assert_eq!(entry.token_contract, ctx.nft.address);
    assert_eq!(entry.token_id, token_id);
    assert_eq!(entry.state, BasketState::Deposited);
    assert!(ctx.client.in_custody(&basket_id));
}

#[test]
fn test_basket_ids_are_sequential() {
    let ctx = setup_test();
    let other = Address::generate(&ctx.env);

    assert_eq!(ctx.deposit_new(&ctx.depositor), 1);
    assert_eq!(ctx.deposit_new(&other), 2);

    // Retrieved ids are never handed out again.
    ctx.client.retrieve(&other, &2);
    assert_eq!(ctx.deposit_new(&ctx.depositor), 3);
    assert_eq!(ctx.client.basket_size(), 3);
}

#[test]
fn test_deposit_without_approval_fails() {
    let ctx = setup_test();
    let token_id = ctx
        .nft
        .mint(&ctx.depositor, &String::from_str(&ctx.env, "sample URI"));

    let result = ctx
        .client
        .try_deposit(&ctx.depositor, &ctx.nft.address, &token_id);
    assert!(result.is_err());

    assert_eq!(ctx.nft.owner_of(&token_id), ctx.depositor);
    assert_eq!(ctx.client.basket_size(), 0);
}

#[test]
fn test_deposit_of_foreign_token_fails() {
    let ctx = setup_test();
    let owner = Address::generate(&ctx.env);
    let token_id = ctx.mint_approved(&owner);
    ctx.nft.set_approval_for_all(&ctx.depositor, &ctx.house, &true);

    let result = ctx
        .client
        .try_deposit(&ctx.depositor, &ctx.nft.address, &token_id);
    assert!(result.is_err());
    assert_eq!(ctx.nft.owner_of(&token_id), owner);
}

#[test]
fn test_retrieve_by_other_address_fails() {
    let ctx = setup_test();
    let basket_id = ctx.deposit_new(&ctx.depositor);
    let other = Address::generate(&ctx.env);

    let result = ctx.client.try_retrieve(&other, &basket_id);
    assert_eq!(result, Err(Ok(Error::NotAuthor)));
    assert_eq!(
        ctx.client.get_basket_entry(&basket_id).state,
        BasketState::Deposited
    );
}

#[test]
fn test_retrieve_returns_token() {
    let ctx = setup_test();
    let basket_id = ctx.deposit_new(&ctx.depositor);
    let token_id = ctx.client.get_basket_entry(&basket_id).token_id;

    ctx.client.retrieve(&ctx.depositor, &basket_id);

    assert_eq!(ctx.nft.owner_of(&token_id), ctx.depositor);
    assert_eq!(
        ctx.client.get_basket_entry(&basket_id).state,
        BasketState::Returned
    );
    assert!(!ctx.client.in_custody(&basket_id));
}

#[test]
fn test_retrieve_twice_fails() {
    let ctx = setup_test();
    let basket_id = ctx.deposit_new(&ctx.depositor);
    ctx.client.retrieve(&ctx.depositor, &basket_id);

    let result = ctx.client.try_retrieve(&ctx.depositor, &basket_id);
    assert_eq!(result, Err(Ok(Error::NotInBasket)));
}

#[test]
fn test_unknown_basket_entry() {
    let ctx = setup_test();
    assert_eq!(
        ctx.client.try_retrieve(&ctx.depositor, &9),
        Err(Ok(Error::BasketEntryNotFound))
    );
    assert_eq!(
        ctx.client.try_get_basket_entry(&9),
        Err(Ok(Error::BasketEntryNotFound))
    );
}
