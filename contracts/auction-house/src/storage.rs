use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, BasketEntry, MarketplaceConfig, QueueEnds, QueueLink, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    e.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

/// Extend the TTL of instance storage (config, counters and the auction slot).
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// BASKET STORAGE
// ============================================================================

/// Number of basket entries ever created
pub fn get_basket_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&StorageKey::BasketCounter)
        .unwrap_or(0)
}

/// Reserve the next basket id
pub fn increment_basket_counter(e: &Env) -> u64 {
    let counter = get_basket_counter(e) + 1;
    e.storage()
        .instance()
        .set(&StorageKey::BasketCounter, &counter);
    counter
}

pub fn get_queue_ends(e: &Env) -> QueueEnds {
    e.storage()
        .instance()
        .get(&StorageKey::QueueEnds)
        .unwrap_or_default()
}

pub fn set_queue_ends(e: &Env, ends: &QueueEnds) {
    e.storage().instance().set(&StorageKey::QueueEnds, ends);
}

pub fn get_queue_link(e: &Env, basket_id: u64) -> Option<QueueLink> {
    e.storage()
        .persistent()
        .get(&StorageKey::QueueLink(basket_id))
}

pub fn set_queue_link(e: &Env, basket_id: u64, link: &QueueLink) {
    let key = StorageKey::QueueLink(basket_id);
    e.storage().persistent().set(&key, link);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_queue_link(e: &Env, basket_id: u64) {
    e.storage()
        .persistent()
        .remove(&StorageKey::QueueLink(basket_id));
}

pub fn get_basket_entry(e: &Env, basket_id: u64) -> Option<BasketEntry> {
    let key = StorageKey::BasketEntry(basket_id);
    let entry = e.storage().persistent().get::<_, BasketEntry>(&key);
    if entry.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    entry
}

pub fn set_basket_entry(e: &Env, entry: &BasketEntry) {
    let key = StorageKey::BasketEntry(entry.basket_id);
    e.storage().persistent().set(&key, entry);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(e: &Env) -> Option<Auction> {
    e.storage().instance().get(&StorageKey::Auction)
}

pub fn save_auction(e: &Env, auction: &Auction) {
    e.storage().instance().set(&StorageKey::Auction, auction);
}

// ============================================================================
// PENDING REFUND STORAGE
// ============================================================================

pub fn get_pending_refund(e: &Env, bidder: &Address) -> i128 {
    let key = StorageKey::PendingRefund(bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_pending_refund(e: &Env, bidder: &Address, amount: i128) {
    let key = StorageKey::PendingRefund(bidder.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
