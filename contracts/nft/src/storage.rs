use soroban_sdk::{contracttype, Address, Env, String};

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Name,
    Symbol,
    TokenCount,
    Owner(u64),
    TokenUri(u64),
    Balance(Address),
    Operator(Address, Address),
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Name)
}

pub fn set_metadata(e: &Env, name: &String, symbol: &String) {
    e.storage().instance().set(&DataKey::Name, name);
    e.storage().instance().set(&DataKey::Symbol, symbol);
}

pub fn get_name(e: &Env) -> Option<String> {
    e.storage().instance().get(&DataKey::Name)
}

pub fn get_symbol(e: &Env) -> Option<String> {
    e.storage().instance().get(&DataKey::Symbol)
}

pub fn get_token_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::TokenCount)
        .unwrap_or(0)
}

pub fn increment_token_count(e: &Env) -> u64 {
    let count = get_token_count(e) + 1;
    e.storage().instance().set(&DataKey::TokenCount, &count);
    count
}

fn set_persistent<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(e: &Env, key: &DataKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_owner(e: &Env, token_id: u64) -> Option<Address> {
    e.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn set_owner(e: &Env, token_id: u64, owner: &Address) {
    set_persistent(e, &DataKey::Owner(token_id), owner);
}

pub fn get_token_uri(e: &Env, token_id: u64) -> Option<String> {
    e.storage().persistent().get(&DataKey::TokenUri(token_id))
}

pub fn set_token_uri(e: &Env, token_id: u64, uri: &String) {
    set_persistent(e, &DataKey::TokenUri(token_id), uri);
}

pub fn get_balance(e: &Env, owner: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(e: &Env, owner: &Address, balance: u64) {
    set_persistent(e, &DataKey::Balance(owner.clone()), &balance);
}

pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        set_persistent(e, &key, &true);
    } else {
        e.storage().persistent().remove(&key);
    }
}
