//! Pub-sub state stores.
//!
//! Each store owns one state value. All mutation goes through
//! [`Store::action`], which applies the mutator to a fresh clone of the
//! state, swaps it in, and synchronously notifies every subscriber with the
//! new value — so subscribers never observe a half-applied mutation and old
//! snapshots are never aliased by later edits.


pub mod page;
pub mod page_state;
pub mod toolbar;

pub use page::{Page, PageData};
pub use page_state::{Camera, GridSettings, PageState, PageStateData};
pub use toolbar::{Toolbar, ToolbarData, ToolbarItem, ToolVisibility, ViewSettings};

use std::fmt;

/// Token returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber<T> = Box<dyn Fn(&T)>;

/// A single-value store with synchronous change notification.
pub struct Store<T> {
    state: T,
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
    next_subscriber: u64,
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Store<T> {
    #[must_use]
    pub fn new(state: T) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current state. Snapshots handed to subscribers are never
    /// mutated in place, so holding a clone of this is always safe.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Register a change callback, invoked synchronously after every
    /// [`Store::action`].
    pub fn subscribe(&mut self, f: impl Fn(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Apply `mutate` to a fresh clone of the state, swap it in, and
    /// notify all subscribers with the new state.
    pub fn action(&mut self, mutate: impl FnOnce(&mut T)) {
        let mut next = self.state.clone();
        mutate(&mut next);
        self.state = next;
        for (_, f) in &self.subscribers {
            f(&self.state);
        }
    }
}
