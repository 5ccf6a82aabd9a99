//! Repository contract and list-backed implementation with change observers.
//!
//! # Responsibility
//! - Own an ordered in-memory collection of one entity type.
//! - Notify registered observers synchronously after every mutation.
//!
//! # Invariants
//! - Items keep insertion order; duplicates are allowed.
//! - Observers run in subscription order, exactly once per `add`/`remove`.
//! - `remove` notifies even when no element matched.
//! - Not safe for concurrent mutation; callbacks are not `Send`, so the
//!   repository cannot cross threads without external wrapping.

use log::debug;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Handle returned by [`ListRepository::subscribe`].
pub type SubscriptionId = Uuid;

/// Mutation kind carried by a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
        }
    }
}

/// Notification payload delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// `"{kind} {rendering of item}"`, e.g. `"Added S001 - John Doe"`.
    pub message: String,
}

impl ChangeEvent {
    fn new(kind: ChangeKind, item: &impl Display) -> Self {
        Self {
            kind,
            message: format!("{} {item}", kind.as_str()),
        }
    }
}

impl Display for ChangeEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Repository interface shared by every entity collection.
pub trait Repository<T> {
    /// Appends `item` and notifies observers.
    fn add(&mut self, item: T);
    /// Removes the first element equal to `item`, then notifies observers
    /// regardless of the outcome. Returns whether an element was removed.
    fn remove(&mut self, item: &T) -> bool;
    /// Returns the live collection in insertion order.
    fn get_all(&self) -> &[T];
}

/// Observer callback: receives the repository after mutation and the event.
pub type ChangeObserver<T> = Box<dyn FnMut(&ListRepository<T>, &ChangeEvent)>;

struct Subscription<T> {
    id: SubscriptionId,
    callback: ChangeObserver<T>,
}

/// List-backed repository for one entity type.
pub struct ListRepository<T> {
    items: Vec<T>,
    observers: Vec<Subscription<T>>,
}

impl<T> Default for ListRepository<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl<T> ListRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer; it is appended after existing ones.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ListRepository<T>, &ChangeEvent) + 'static,
    {
        let id = Uuid::new_v4();
        self.observers.push(Subscription {
            id,
            callback: Box::new(callback),
        });
        debug!(
            "event=observer_subscribed module=repo entity={} observers={}",
            entity_name::<T>(),
            self.observers.len()
        );
        id
    }

    /// Drops one observer. Returns `false` when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|subscription| subscription.id != id);
        let removed = self.observers.len() != before;
        debug!(
            "event=observer_unsubscribed module=repo entity={} found={} observers={}",
            entity_name::<T>(),
            removed,
            self.observers.len()
        );
        removed
    }

    fn notify(&mut self, event: ChangeEvent) {
        // Callbacks borrow the repository immutably, so the list is detached
        // for the duration of the dispatch.
        let mut observers = std::mem::take(&mut self.observers);
        let repo: &Self = self;
        for subscription in observers.iter_mut() {
            (subscription.callback)(repo, &event);
        }
        self.observers = observers;
    }
}

impl<T: Display + PartialEq> Repository<T> for ListRepository<T> {
    fn add(&mut self, item: T) {
        let event = ChangeEvent::new(ChangeKind::Added, &item);
        self.items.push(item);
        debug!(
            "event=repo_add module=repo entity={} count={}",
            entity_name::<T>(),
            self.items.len()
        );
        self.notify(event);
    }

    fn remove(&mut self, item: &T) -> bool {
        let removed = match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        };
        debug!(
            "event=repo_remove module=repo entity={} found={} count={}",
            entity_name::<T>(),
            removed,
            self.items.len()
        );
        self.notify(ChangeEvent::new(ChangeKind::Removed, item));
        removed
    }

    fn get_all(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a ListRepository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn entity_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::{entity_name, ChangeEvent, ChangeKind};

    struct Probe;

    #[test]
    fn entity_name_strips_module_path() {
        assert_eq!(entity_name::<Probe>(), "Probe");
        assert_eq!(entity_name::<u32>(), "u32");
    }

    #[test]
    fn change_event_message_prefixes_kind() {
        let event = ChangeEvent::new(ChangeKind::Removed, &"C001 - Algebra (3 credits)");
        assert_eq!(event.message, "Removed C001 - Algebra (3 credits)");
        assert_eq!(event.to_string(), event.message);
    }
}
