//! Stale-result rejection for overlapping view refreshes.
//!
//! Every refresh takes a ticket keyed by the remote read it performs. Starting
//! another refresh for the same key bumps the key's generation, and results
//! carrying an older generation are dropped instead of rendered. Generations
//! for a key never repeat, so a stale ticket cannot become current again.

use dashmap::DashMap;

use crate::query::types::ListingScope;

/// Proof that a refresh was started, checked when its result arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshTicket {
    key: u64,
    generation: u64,
}

impl RefreshTicket {
    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct RefreshTracker {
    generations: DashMap<u64, u64>,
}

impl RefreshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh of the listings read for `scope`.
    ///
    /// Filter changes do not change the key: a newer refresh over the same
    /// scope supersedes an older one whatever filter either was started with.
    pub fn begin(&self, scope: &ListingScope) -> RefreshTicket {
        self.begin_keyed(scope.fetch_key())
    }

    /// Start a refresh for an arbitrary read key.
    pub fn begin_keyed(&self, key: u64) -> RefreshTicket {
        let generation = self.bump(key);
        RefreshTicket { key, generation }
    }

    /// Whether no newer refresh has started for the ticket's key.
    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        self.generations
            .get(&ticket.key)
            .is_some_and(|current| *current == ticket.generation)
    }

    /// Hand `value` back only when `ticket` is still current.
    pub fn accept<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        self.is_current(&ticket).then_some(value)
    }

    /// Make every outstanding ticket for `key` stale.
    pub fn invalidate(&self, key: u64) {
        self.bump(key);
    }

    fn bump(&self, key: u64) -> u64 {
        let mut generation = self.generations.entry(key).or_insert(0);
        *generation = generation.wrapping_add(1);
        *generation
    }
}
