//! Selection queue of `Deposited` basket ids, oldest first.
//!
//! A doubly linked list kept in storage: appending, unlinking any id and
//! reading the oldest id each touch a fixed number of entries, however many
//! tokens have come and gone.

use soroban_sdk::Env;

use crate::storage;
use crate::types::QueueLink;

pub fn push_back(e: &Env, basket_id: u64) {
    let mut ends = storage::get_queue_ends(e);

    match ends.tail {
        Some(tail) => {
            let mut tail_link = storage::get_queue_link(e, tail).unwrap_or_default();
            tail_link.next = Some(basket_id);
            storage::set_queue_link(e, tail, &tail_link);
        }
        None => ends.head = Some(basket_id),
    }

    storage::set_queue_link(
        e,
        basket_id,
        &QueueLink {
            prev: ends.tail,
            next: None,
        },
    );
    ends.tail = Some(basket_id);
    storage::set_queue_ends(e, &ends);
}

/// Unlink `basket_id`. Ids that are not queued are ignored.
pub fn remove(e: &Env, basket_id: u64) {
    let Some(link) = storage::get_queue_link(e, basket_id) else {
        return;
    };
    let mut ends = storage::get_queue_ends(e);

    match link.prev {
        Some(prev) => {
            let mut prev_link = storage::get_queue_link(e, prev).unwrap_or_default();
            prev_link.next = link.next;
            storage::set_queue_link(e, prev, &prev_link);
        }
        None => ends.head = link.next,
    }

    match link.next {
        Some(next) => {
            let mut next_link = storage::get_queue_link(e, next).unwrap_or_default();
            next_link.prev = link.prev;
            storage::set_queue_link(e, next, &next_link);
        }
        None => ends.tail = link.prev,
    }

    storage::remove_queue_link(e, basket_id);
    storage::set_queue_ends(e, &ends);
}

pub fn front(e: &Env) -> Option<u64> {
    storage::get_queue_ends(e).head
}
