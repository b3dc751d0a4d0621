pub mod basket_test;

use basket_nft::{NftCollection, NftCollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, Event, String,
};

use crate::{AuctionHouse, AuctionHouseClient};

pub const TIME_BUFFER: u64 = 15 * 60;
pub const RESERVE_PRICE: i128 = 2;
pub const MIN_INCREMENT_BID_PERCENTAGE: u32 = 5;
pub const DURATION: u64 = 60 * 60 * 24;
pub const BENEFICIARY_SHARE: u32 = 10;
pub const START_TIME: u64 = 1_700_000_000;
pub const INITIAL_BALANCE: i128 = 10_000_000;

pub struct TestContext {
    pub env: Env,
    pub client: AuctionHouseClient<'static>,
    pub house: Address,
    pub nft: NftCollectionClient<'static>,
    pub token: token::TokenClient<'static>,
    pub admin: Address,
    pub beneficiary: Address,
    pub depositor: Address,
    pub bidder_a: Address,
    pub bidder_b: Address,
}

impl TestContext {
    /// Mint a fresh token to `owner` and approve the auction house for it.
    pub fn mint_approved(&self, owner: &Address) -> u64 {
        let token_id = self
            .nft
            .mint(owner, &String::from_str(&self.env, "sample URI"));
        self.nft.set_approval_for_all(owner, &self.house, &true);
        token_id
    }

    /// Mint, approve and deposit in one go; returns the basket id.
    pub fn deposit_new(&self, owner: &Address) -> u64 {
        let token_id = self.mint_approved(owner);
        self.client.deposit(owner, &self.nft.address, &token_id)
    }
}

pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let house = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &house);

    let nft_id = env.register(NftCollection, ());
    let nft = NftCollectionClient::new(&env, &nft_id);
    nft.initialize(
        &String::from_str(&env, "Test NFT"),
        &String::from_str(&env, "TST"),
    );

    let issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(issuer);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let admin = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let depositor = Address::generate(&env);
    let bidder_a = Address::generate(&env);
    let bidder_b = Address::generate(&env);

    token_admin.mint(&bidder_a, &INITIAL_BALANCE);
    token_admin.mint(&bidder_b, &INITIAL_BALANCE);

    TestContext {
        env,
        client,
        house,
        nft,
        token,
        admin,
        beneficiary,
        depositor,
        bidder_a,
        bidder_b,
    }
}

pub fn setup_test() -> TestContext {
    let ctx = setup_uninitialized();
    ctx.client.initialize(
        &ctx.admin,
        &ctx.token.address,
        &ctx.beneficiary,
        &TIME_BUFFER,
        &RESERVE_PRICE,
        &MIN_INCREMENT_BID_PERCENTAGE,
        &DURATION,
        &BENEFICIARY_SHARE,
    );
    ctx
}

/// A configured house with one deposited token already up for auction.
pub fn setup_auction() -> TestContext {
    let ctx = setup_test();
    ctx.deposit_new(&ctx.depositor);
    ctx.client.create_new_auction();
    ctx
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Position of `event` among the events `contract` published, if it did.
pub fn event_index<T: Event>(env: &Env, contract: &Address, event: &T) -> Option<u32> {
    let expected = (contract.clone(), event.topics(env), event.data(env));
    env.events().all().first_index_of(&expected)
}
