//! Client-side joins over flat upstream collections.

use std::collections::HashMap;

use crate::models::{Album, EnrichedUser, Todo, User};
use crate::types::DbId;

/// Count records per owning user id.
pub fn count_by_owner<T>(items: &[T], owner: impl Fn(&T) -> DbId) -> HashMap<DbId, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(owner(item)).or_insert(0) += 1;
    }
    counts
}

/// Attach todo and album counts to each user.
///
/// Output order is the order of `users`; nothing is re-sorted. Users with
/// no todos or albums get a count of zero.
pub fn enrich_users(users: Vec<User>, todos: &[Todo], albums: &[Album]) -> Vec<EnrichedUser> {
    let todo_counts = count_by_owner(todos, |t| t.user_id);
    let album_counts = count_by_owner(albums, |a| a.user_id);

    users
        .into_iter()
        .map(|user| EnrichedUser {
            todo_count: todo_counts.get(&user.id).copied().unwrap_or(0),
            album_count: album_counts.get(&user.id).copied().unwrap_or(0),
            user,
        })
        .collect()
}
