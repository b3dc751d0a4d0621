#![no_std]

//! Reference NFT collection for the basket auction house.
//!
//! Tokens are minted with sequential ids starting at 1 and carry a URI.
//! Owners may approve operators for all of their tokens; the auction house
//! relies on that approval to pull deposited tokens into custody.

mod storage;


use soroban_sdk::{contract, contracterror, contractevent, contractimpl, Address, Env, String};

/// NFT collection errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    /// Collection already initialized
    AlreadyInitialized = 1,
    /// Collection not initialized
    NotInitialized = 2,
    /// Token id was never minted
    TokenNotFound = 3,
    /// `from` does not own the token
    NotOwner = 4,
    /// Spender is neither the owner nor an approved operator
    NotApproved = 5,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    #[topic]
    pub to: Address,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalForAll {
    #[topic]
    pub owner: Address,
    #[topic]
    pub operator: Address,
    pub approved: bool,
}

#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {
    pub fn initialize(e: Env, name: String, symbol: String) -> Result<(), NftError> {
        if storage::is_initialized(&e) {
            return Err(NftError::AlreadyInitialized);
        }
        storage::set_metadata(&e, &name, &symbol);
        Ok(())
    }

    pub fn name(e: Env) -> Result<String, NftError> {
        storage::get_name(&e).ok_or(NftError::NotInitialized)
    }

    pub fn symbol(e: Env) -> Result<String, NftError> {
        storage::get_symbol(&e).ok_or(NftError::NotInitialized)
    }

    /// Mint the next token to `to`.
    pub fn mint(e: Env, to: Address, uri: String) -> Result<u64, NftError> {
        to.require_auth();
        if !storage::is_initialized(&e) {
            return Err(NftError::NotInitialized);
        }

        let token_id = storage::increment_token_count(&e);
        storage::set_owner(&e, token_id, &to);
        storage::set_token_uri(&e, token_id, &uri);
        storage::set_balance(&e, &to, storage::get_balance(&e, &to) + 1);

        Minted { to, token_id }.publish(&e);
        Ok(token_id)
    }

    /// Number of tokens minted so far
    pub fn token_count(e: Env) -> u64 {
        storage::get_token_count(&e)
    }

    pub fn balance_of(e: Env, owner: Address) -> u64 {
        storage::get_balance(&e, &owner)
    }

    pub fn token_uri(e: Env, token_id: u64) -> Result<String, NftError> {
        storage::get_token_uri(&e, token_id).ok_or(NftError::TokenNotFound)
    }

    pub fn owner_of(e: Env, token_id: u64) -> Result<Address, NftError> {
        storage::get_owner(&e, token_id).ok_or(NftError::TokenNotFound)
    }

    pub fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        storage::set_operator(&e, &owner, &operator, approved);

        ApprovalForAll {
            owner,
            operator,
            approved,
        }
        .publish(&e);
    }

    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&e, &owner, &operator)
    }

    /// Move a token held by `from`, authorized by `from` itself.
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u64) -> Result<(), NftError> {
        from.require_auth();
        move_token(&e, &from, &to, token_id)
    }

    /// Move a token on behalf of `from`. `spender` must be `from` or one of
    /// its approved operators.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        spender.require_auth();
        if spender != from && !storage::is_operator(&e, &from, &spender) {
            return Err(NftError::NotApproved);
        }
        move_token(&e, &from, &to, token_id)
    }
}

fn move_token(e: &Env, from: &Address, to: &Address, token_id: u64) -> Result<(), NftError> {
    let owner = storage::get_owner(e, token_id).ok_or(NftError::TokenNotFound)?;
    if owner != *from {
        return Err(NftError::NotOwner);
    }

    storage::set_owner(e, token_id, to);
    storage::set_balance(e, from, storage::get_balance(e, from).saturating_sub(1));
    storage::set_balance(e, to, storage::get_balance(e, to) + 1);

    Transferred {
        from: from.clone(),
        to: to.clone(),
        token_id,
    }
    .publish(e);

    Ok(())
}
